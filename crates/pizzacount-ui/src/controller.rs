//! Upload controller
//!
//! Bridges a user's file selection to one processing request and renders the
//! outcome into the injected display targets.
//!
//! Overlapping submissions resolve as latest-wins: every submission takes a
//! ticket, and a response only reaches the display if no newer submission has
//! started since.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use pizzacount_api_client::ApiClient;
use pizzacount_core::{
    CacheBuster, ClientConfig, FileSelection, MediaKind, ProcessResponse, ProcessingService,
    ResultView, UploadError, UploadResult,
};

use crate::targets::{ResultArea, TextTarget};

/// What one call to `submit_and_render` ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing selected; nothing happened.
    NoFile,
    /// The response was rendered into the result area.
    Rendered(ResultView),
    /// The request failed; the error message was rendered.
    Failed(UploadError),
    /// A newer submission started before this one finished; display untouched.
    Superseded,
}

/// Display targets the controller writes to.
#[derive(Clone)]
pub struct DisplayTargets {
    pub label: Arc<dyn TextTarget>,
    pub result: Arc<dyn ResultArea>,
    pub stats: Arc<dyn TextTarget>,
}

pub struct UploadController {
    service: Arc<dyn ProcessingService>,
    targets: DisplayTargets,
    config: ClientConfig,
    cache_buster: CacheBuster,
    generation: AtomicU64,
    display_lock: Mutex<()>,
}

impl UploadController {
    pub fn new(
        service: Arc<dyn ProcessingService>,
        targets: DisplayTargets,
        config: ClientConfig,
    ) -> Self {
        Self::with_cache_buster(service, targets, config, CacheBuster::new())
    }

    pub fn with_cache_buster(
        service: Arc<dyn ProcessingService>,
        targets: DisplayTargets,
        config: ClientConfig,
        cache_buster: CacheBuster,
    ) -> Self {
        Self {
            service,
            targets,
            config,
            cache_buster,
            generation: AtomicU64::new(0),
            display_lock: Mutex::new(()),
        }
    }

    /// Controller backed by the HTTP client, sharing its configuration.
    pub fn from_client(client: ApiClient, targets: DisplayTargets) -> Self {
        let config = client.config().clone();
        Self::new(Arc::new(client), targets, config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Mirror the selected file's name into the label.
    pub fn update_label(&self, selection: &FileSelection) {
        match selection.file() {
            Some(file) => self.targets.label.set_text(&file.file_name),
            None => self.targets.label.set_text(&self.config.labels.placeholder),
        }
    }

    /// Upload the selected file and render the server's answer.
    pub async fn submit_and_render(&self, selection: &FileSelection) -> SubmitStatus {
        let Some(file) = selection.file() else {
            return SubmitStatus::NoFile;
        };

        let ticket = {
            let _guard = self.lock_display();
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            self.targets.result.clear();
            self.targets.stats.set_text("");
            self.targets.result.show(ResultView::Loading);
            ticket
        };

        tracing::debug!(ticket, file_name = %file.file_name, "Submitting file");
        let outcome = self.service.process(file).await;

        let _guard = self.lock_display();
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "Discarding response of superseded submission");
            return SubmitStatus::Superseded;
        }

        if let Err(err) = &outcome {
            tracing::warn!(
                ticket,
                error = %err,
                code = err.error_code(),
                "File processing failed"
            );
        }

        let (view, stats) = render_outcome(&outcome, &self.config, &self.cache_buster);
        self.targets.result.clear();
        self.targets.result.show(view.clone());
        if let Some(stats) = stats {
            self.targets.stats.set_text(&stats);
        }

        match outcome {
            Ok(_) => SubmitStatus::Rendered(view),
            Err(err) => SubmitStatus::Failed(err),
        }
    }

    fn lock_display(&self) -> std::sync::MutexGuard<'_, ()> {
        self.display_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Map an upload outcome to the result view and the new stats text.
///
/// A `None` stats text means the stats element keeps its current content.
pub fn render_outcome(
    outcome: &UploadResult<ProcessResponse>,
    config: &ClientConfig,
    cache_buster: &CacheBuster,
) -> (ResultView, Option<String>) {
    match outcome {
        Ok(response) => {
            let view = match response.kind {
                MediaKind::Image => ResultView::Image {
                    src: cache_buster.bust(&config.result_image_path),
                    alt: config.labels.image_alt.clone(),
                },
                MediaKind::Video => ResultView::Video {
                    src: cache_buster.bust(&config.result_video_path),
                    controls: true,
                },
                MediaKind::Unknown => ResultView::Empty,
            };
            (view, Some(config.labels.count_text(response.count)))
        }
        Err(_) => (
            ResultView::Error {
                message: config.labels.error_message.clone(),
            },
            None,
        ),
    }
}
