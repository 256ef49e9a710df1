use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv"];

/// Kind of processed media returned by the server.
///
/// Any `type` other than `image` or `video` (including a missing one)
/// deserializes to `Unknown`, which renders an empty result area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    /// Classify a file by extension the way the processing server does.
    pub fn from_file_name(file_name: &str) -> Self {
        let ext = match file_name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => return MediaKind::Unknown,
        };
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Unknown => "unknown",
        }
    }
}

/// Successful answer of `POST /process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    pub count: u64,
}

/// Body the server sends with a non-2xx status, e.g. `{"error": "Unsupported file type"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectionBody {
    pub error: String,
}

/// History report formats offered by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn path(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "/report/pdf",
            ReportFormat::Excel => "/report/excel",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pizza_report.pdf",
            ReportFormat::Excel => "pizza_report.xlsx",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_response() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"count": 7, "type": "image"}"#).unwrap();
        assert_eq!(response.kind, MediaKind::Image);
        assert_eq!(response.count, 7);
    }

    #[test]
    fn test_unrecognised_type_is_unknown() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"count": 3, "type": "gif"}"#).unwrap();
        assert_eq!(response.kind, MediaKind::Unknown);

        let response: ProcessResponse = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(response.kind, MediaKind::Unknown);
    }

    #[test]
    fn test_missing_count_is_rejected() {
        assert!(serde_json::from_str::<ProcessResponse>(r#"{"type": "video"}"#).is_err());
        assert!(serde_json::from_str::<ProcessResponse>(r#"{"type": "video", "count": -1}"#).is_err());
    }

    #[test]
    fn test_media_kind_from_file_name() {
        assert_eq!(MediaKind::from_file_name("pizza.JPG"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("party.bmp"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("clip.mkv"), MediaKind::Video);
        assert_eq!(MediaKind::from_file_name("notes.txt"), MediaKind::Unknown);
        assert_eq!(MediaKind::from_file_name("README"), MediaKind::Unknown);
    }

    #[test]
    fn test_report_paths() {
        assert_eq!(ReportFormat::Pdf.path(), "/report/pdf");
        assert_eq!(ReportFormat::Excel.file_name(), "pizza_report.xlsx");
    }
}
