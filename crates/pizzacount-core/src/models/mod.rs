pub mod response;
pub mod selection;

pub use response::{MediaKind, ProcessResponse, RejectionBody, ReportFormat};
pub use selection::{FileSelection, SelectedFile};
