use std::path::{Component, Path};

use crate::error::{UploadError, UploadResult};
use crate::models::MediaKind;

/// A file picked by the user, held for one upload cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk. Paths containing `..` are refused.
    pub fn from_path(path: &Path) -> UploadResult<Self> {
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(UploadError::InvalidInput(format!(
                "Path must not contain '..': {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| UploadError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                UploadError::InvalidInput(format!("Path has no file name: {}", path.display()))
            })?
            .to_string();

        Ok(Self { file_name, bytes })
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_file_name(&self.file_name)
    }

    /// MIME type guessed from the extension, if it is one the server knows.
    pub fn content_type(&self) -> Option<&'static str> {
        let ext = self.file_name.rsplit_once('.')?.1.to_lowercase();
        let mime = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "bmp" => "image/bmp",
            "mp4" => "video/mp4",
            "avi" => "video/x-msvideo",
            "mov" => "video/quicktime",
            "mkv" => "video/x-matroska",
            _ => return None,
        };
        Some(mime)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Current state of the file picker: zero or one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection(Option<SelectedFile>);

impl FileSelection {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn single(file: SelectedFile) -> Self {
        Self(Some(file))
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<SelectedFile>> for FileSelection {
    fn from(file: Option<SelectedFile>) -> Self {
        Self(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_reads_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("margherita.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let selected = SelectedFile::from_path(&path).unwrap();
        assert_eq!(selected.file_name, "margherita.png");
        assert_eq!(selected.bytes, b"\x89PNG");
        assert_eq!(selected.kind(), MediaKind::Image);
        assert_eq!(selected.content_type(), Some("image/png"));
    }

    #[test]
    fn test_from_path_rejects_parent_dir() {
        let err = SelectedFile::from_path(Path::new("../secret.jpg")).unwrap_err();
        assert!(matches!(err, UploadError::InvalidInput(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(&dir.path().join("nope.jpg")).unwrap_err();
        assert!(matches!(err, UploadError::Io(_)));
    }

    #[test]
    fn test_unknown_extension_has_no_content_type() {
        let file = SelectedFile::new("menu.pdf", vec![1, 2, 3]);
        assert_eq!(file.content_type(), None);
        assert_eq!(file.size(), 3);
    }

    #[test]
    fn test_selection() {
        assert!(FileSelection::empty().is_empty());
        let selection = FileSelection::single(SelectedFile::new("a.mp4", vec![]));
        assert_eq!(selection.file().map(|f| f.file_name.as_str()), Some("a.mp4"));
    }
}
