//! PizzaCount Core Library
//!
//! This crate provides the models, error types, configuration and result views
//! shared by the API client, the upload controller and the CLI.

pub mod cache_buster;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod view;

// Re-export commonly used types
pub use cache_buster::CacheBuster;
pub use config::{ClientConfig, Labels, Locale};
pub use error::{UploadError, UploadResult};
pub use models::{
    FileSelection, MediaKind, ProcessResponse, RejectionBody, ReportFormat, SelectedFile,
};
pub use service::ProcessingService;
pub use view::ResultView;
