//! Upload controller for the PizzaCount client.
//!
//! `UploadController` reflects the selected file into a label, uploads it to the
//! processing server and renders the processed image or video with its count.
//! Display targets are injected, so the same controller drives a terminal, an
//! HTML page, or in-memory fakes in tests.

pub mod controller;
pub mod targets;

pub use controller::{render_outcome, DisplayTargets, SubmitStatus, UploadController};
pub use targets::{MemoryResultArea, MemoryText, ResultArea, TextTarget};
