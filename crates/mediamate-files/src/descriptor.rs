//! Input handle for a user-selected file.

use serde::Serialize;

/// A user-selected file as delivered by the host's file picker.
///
/// The declared MIME type comes from the host and may be empty or wrong;
/// classification treats it as a hint, with an extension fallback for
/// documents only.
#[derive(Clone, Debug, Serialize)]
pub struct FileDescriptor {
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Declared MIME type (e.g. `"image/png"`); possibly empty.
    pub mime_type: String,
    /// File name as picked, including extension.
    pub name: String,
    /// Declared size in bytes.
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>, name: impl Into<String>) -> Self {
        let size = bytes.len() as u64;
        Self {
            bytes,
            mime_type: mime_type.into(),
            name: name.into(),
            size,
        }
    }

    /// The file name's extension, without the dot.
    pub(crate) fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }
}
