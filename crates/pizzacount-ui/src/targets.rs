//! Display targets
//!
//! The controller never looks up page elements itself; it is handed these
//! targets at construction. Implementations use interior mutability so one
//! controller can be shared between concurrent submissions.

use std::sync::{Mutex, MutexGuard};

use pizzacount_core::ResultView;

/// A text element (file label, stats line).
pub trait TextTarget: Send + Sync {
    fn set_text(&self, text: &str);
}

/// The region showing the processed media, loader, or error.
pub trait ResultArea: Send + Sync {
    /// Remove everything from the area.
    fn clear(&self);

    /// Replace the area's content with `view`.
    fn show(&self, view: ResultView);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory text element.
#[derive(Debug, Default)]
pub struct MemoryText {
    text: Mutex<String>,
}

impl MemoryText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
        }
    }

    pub fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

impl TextTarget for MemoryText {
    fn set_text(&self, text: &str) {
        *lock(&self.text) = text.to_string();
    }
}

/// In-memory result area. Keeps every view it has shown, oldest first.
#[derive(Debug)]
pub struct MemoryResultArea {
    current: Mutex<ResultView>,
    history: Mutex<Vec<ResultView>>,
}

impl MemoryResultArea {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(ResultView::Empty),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn current(&self) -> ResultView {
        lock(&self.current).clone()
    }

    pub fn history(&self) -> Vec<ResultView> {
        lock(&self.history).clone()
    }

    /// Current content as an HTML fragment.
    pub fn html(&self) -> String {
        self.current().to_html()
    }
}

impl Default for MemoryResultArea {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultArea for MemoryResultArea {
    fn clear(&self) {
        *lock(&self.current) = ResultView::Empty;
    }

    fn show(&self, view: ResultView) {
        lock(&self.history).push(view.clone());
        *lock(&self.current) = view;
    }
}
