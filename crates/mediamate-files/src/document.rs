//! Document normalization — decode text, cap its length, keep metadata.

use serde::Serialize;
use tracing::debug;

use crate::classify::{classify, Classification};
use crate::descriptor::FileDescriptor;
use crate::error::FileError;

/// Maximum number of characters retained from a document.
pub const MAX_CHARS: usize = 10_000;

/// A truncated text payload with the original file's metadata.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentArtifact {
    /// UTF-8 text, at most [`MAX_CHARS`] characters.
    pub content: String,
    /// Declared MIME type of the source file, unchanged.
    pub original_type: String,
    /// Source size in bytes, unchanged.
    pub original_size: u64,
    /// Source file name, unchanged.
    pub original_name: String,
}

/// Normalize a user-selected text document.
///
/// Fails with [`FileError::UnsupportedType`] when classification does not
/// say Document, and with [`FileError::Read`] when the bytes are not valid
/// UTF-8. Truncation is a hard prefix cut at [`MAX_CHARS`] characters, not
/// word-aware, and always lands on a char boundary.
pub async fn normalize_document(file: &FileDescriptor) -> Result<DocumentArtifact, FileError> {
    if classify(file) != Classification::Document {
        return Err(FileError::unsupported(file));
    }

    let text = String::from_utf8(file.bytes.clone())?;
    let content = truncate_chars(text, MAX_CHARS);

    debug!(name = %file.name, chars = content.chars().count(), "document normalized");

    Ok(DocumentArtifact {
        content,
        original_type: file.mime_type.clone(),
        original_size: file.size,
        original_name: file.name.clone(),
    })
}

/// Keep the first `max` characters. A no-op for shorter input.
fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
