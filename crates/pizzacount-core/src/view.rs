//! Contents of the result area.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultView {
    Empty,
    Loading,
    Image { src: String, alt: String },
    Video { src: String, controls: bool },
    Error { message: String },
}

impl ResultView {
    /// HTML fragment as inserted into the page's result block.
    pub fn to_html(&self) -> String {
        match self {
            ResultView::Empty => String::new(),
            ResultView::Loading => r#"<div class="loader"></div>"#.to_string(),
            ResultView::Image { src, alt } => format!(
                r#"<img src="{}" alt="{}">"#,
                escape_attr(src),
                escape_attr(alt)
            ),
            ResultView::Video { src, controls } => format!(
                r#"<video src="{}"{}></video>"#,
                escape_attr(src),
                if *controls { " controls" } else { "" }
            ),
            ResultView::Error { message } => format!(
                r#"<span style="color:#d35400;">{}</span>"#,
                escape_text(message)
            ),
        }
    }

    /// Source of the media element, if this view shows one.
    pub fn media_src(&self) -> Option<&str> {
        match self {
            ResultView::Image { src, .. } | ResultView::Video { src, .. } => Some(src),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultView::Error { .. })
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
