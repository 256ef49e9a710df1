use std::path::Path;

use anyhow::Context;
use pizzacount_core::ResultView;
use pizzacount_ui::{MemoryResultArea, MemoryText, ResultArea, TextTarget};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Text element echoed to stdout as `name: text`.
pub struct TerminalText {
    name: &'static str,
    inner: MemoryText,
}

impl TerminalText {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: MemoryText::new(),
        }
    }

    pub fn text(&self) -> String {
        self.inner.text()
    }
}

impl TextTarget for TerminalText {
    fn set_text(&self, text: &str) {
        if !text.is_empty() {
            println!("{}: {}", self.name, text);
        }
        self.inner.set_text(text);
    }
}

/// Result area echoed to stdout, with media sources resolved against the server.
pub struct TerminalResultArea {
    base_url: String,
    inner: MemoryResultArea,
}

impl TerminalResultArea {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            inner: MemoryResultArea::new(),
        }
    }

    pub fn current(&self) -> ResultView {
        self.inner.current()
    }
}

impl ResultArea for TerminalResultArea {
    fn clear(&self) {
        self.inner.clear();
    }

    fn show(&self, view: ResultView) {
        match &view {
            ResultView::Empty => {}
            ResultView::Loading => println!("Processing..."),
            ResultView::Image { src, .. } => println!("Image: {}{}", self.base_url, src),
            ResultView::Video { src, .. } => println!("Video: {}{}", self.base_url, src),
            ResultView::Error { message } => println!("Error: {}", message),
        }
        self.inner.show(view);
    }
}

/// Rewrite relative media sources to absolute URLs on `base_url`.
pub fn absolute_view(view: &ResultView, base_url: &str) -> ResultView {
    match view {
        ResultView::Image { src, alt } if src.starts_with('/') => ResultView::Image {
            src: format!("{}{}", base_url, src),
            alt: alt.clone(),
        },
        ResultView::Video { src, controls } if src.starts_with('/') => ResultView::Video {
            src: format!("{}{}", base_url, src),
            controls: *controls,
        },
        other => other.clone(),
    }
}

/// Standalone page showing the rendered result and stats.
pub fn result_page(view: &ResultView, stats: &str, base_url: &str) -> String {
    let fragment = absolute_view(view, base_url).to_html();
    let stats = stats
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>PizzaCount</title></head>\n<body>\n<div id=\"resultBlock\">{}</div>\n<div id=\"stats\">{}</div>\n</body>\n</html>\n",
        fragment, stats
    )
}

/// Write bytes to `path`, creating parent directories.
pub fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
