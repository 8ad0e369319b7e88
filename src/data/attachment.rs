//! Document photos attached to the registration

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use super::form::DocumentType;

#[derive(Error, Debug)]
pub enum AttachmentError {
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A selected file: display name plus shared content.
///
/// Content lives behind an `Arc` so replacing the form record never copies it.
#[derive(Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub name: String,
    pub content: Arc<[u8]>,
}

impl FileAttachment {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk. The attachment is named after the file name.
    pub fn from_path(path: &Path) -> Result<Self, AttachmentError> {
        if !path.is_file() {
            return Err(AttachmentError::NotAFile(path.to_path_buf()));
        }
        let content = std::fs::read(path).map_err(|source| AttachmentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, content))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAttachment")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Upload slots in the document section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    CnicFront,
    CnicBack,
    PassportPhoto,
}

impl UploadSlot {
    /// Slots shown for a document type, in display order
    pub fn for_document(document_type: DocumentType) -> &'static [UploadSlot] {
        match document_type {
            DocumentType::Cnic => &[UploadSlot::CnicFront, UploadSlot::CnicBack],
            DocumentType::Passport => &[UploadSlot::PassportPhoto],
        }
    }

    pub fn document_type(self) -> DocumentType {
        match self {
            UploadSlot::CnicFront | UploadSlot::CnicBack => DocumentType::Cnic,
            UploadSlot::PassportPhoto => DocumentType::Passport,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadSlot::CnicFront => "CNIC Front",
            UploadSlot::CnicBack => "CNIC Back",
            UploadSlot::PassportPhoto => "Passport Photo Page",
        }
    }
}
