//! Processing service abstraction
//!
//! The upload controller talks to the remote processing endpoint through this
//! trait, so it can be driven by the HTTP client or by a fake in tests.

use async_trait::async_trait;

use crate::error::UploadResult;
use crate::models::{ProcessResponse, SelectedFile};

#[async_trait]
pub trait ProcessingService: Send + Sync {
    /// Upload one file for processing and return the decoded answer.
    async fn process(&self, file: &SelectedFile) -> UploadResult<ProcessResponse>;
}
