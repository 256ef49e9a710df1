//! Domain methods for the processing server.

use async_trait::async_trait;
use bytes::Bytes;
use pizzacount_core::{
    ProcessResponse, ProcessingService, ReportFormat, SelectedFile, UploadError, UploadResult,
};

use crate::ApiClient;

impl ApiClient {
    /// Build the multipart form carrying one file under the configured field name.
    pub fn build_upload_form(&self, file: &SelectedFile) -> UploadResult<reqwest::multipart::Form> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone());
        if let Some(mime) = file.content_type() {
            part = part
                .mime_str(mime)
                .map_err(|e| UploadError::InvalidInput(format!("Invalid MIME type: {}", e)))?;
        }

        Ok(reqwest::multipart::Form::new().part(self.config().field_name.clone(), part))
    }

    /// Upload a file to the processing endpoint.
    pub async fn process_file(&self, file: &SelectedFile) -> UploadResult<ProcessResponse> {
        tracing::info!(
            file_name = %file.file_name,
            size = file.size(),
            "Uploading file for processing"
        );

        let form = self.build_upload_form(file)?;
        let response: ProcessResponse = self
            .post_multipart(&self.config().process_path, form)
            .await?;

        tracing::info!(
            kind = response.kind.as_str(),
            count = response.count,
            "Processing finished"
        );
        Ok(response)
    }

    /// Fetch a static asset, e.g. a cache-busted `/static/result.jpg?1700000000000`.
    pub async fn fetch_asset(&self, path: &str) -> UploadResult<Bytes> {
        if !path.starts_with('/') {
            return Err(UploadError::InvalidInput(format!(
                "Asset path must start with '/': {}",
                path
            )));
        }
        self.get_bytes(path).await
    }

    /// Download the processing history report.
    pub async fn download_report(&self, format: ReportFormat) -> UploadResult<Bytes> {
        tracing::info!(path = format.path(), "Downloading report");
        self.get_bytes(format.path()).await
    }
}

#[async_trait]
impl ProcessingService for ApiClient {
    async fn process(&self, file: &SelectedFile) -> UploadResult<ProcessResponse> {
        self.process_file(file).await
    }
}
