//! File classification and normalization pipeline for MediaMate.
//!
//! Given an arbitrary user-selected file, decide what it is and produce a
//! bounded in-memory artifact the chat layer can attach:
//!
//! - [`classify`] — image / document / unsupported, by MIME whitelist with
//!   an extension fallback for documents.
//! - [`image::normalize_image`] — decode, downscale to [`image::MAX_DIM`],
//!   re-encode as JPEG.
//! - [`document::normalize_document`] — decode UTF-8, cap at
//!   [`document::MAX_CHARS`] characters.
//! - [`process_file`] — the dispatcher external callers go through.
//!
//! Everything is single-shot and stateless; no caching, no cancellation.

pub mod classify;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod image;

pub use classify::{classify, Classification, DOC_EXTENSIONS, DOC_TYPES, IMAGE_TYPES};
pub use descriptor::FileDescriptor;
pub use document::{normalize_document, DocumentArtifact, MAX_CHARS};
pub use error::FileError;
pub use image::{normalize_image, ImageArtifact, MAX_DIM};

/// Normalized output of [`process_file`].
#[derive(Clone, Debug)]
pub enum FileArtifact {
    Image(ImageArtifact),
    Document(DocumentArtifact),
}

/// Classify and normalize in one step.
///
/// The sole entry point for general flows; direct-image-upload flows may
/// call [`normalize_image`] themselves. Fails with
/// [`FileError::UnsupportedType`] when the file is neither an image nor a
/// document.
pub async fn process_file(file: &FileDescriptor) -> Result<FileArtifact, FileError> {
    match classify(file) {
        Classification::Image => Ok(FileArtifact::Image(normalize_image(file).await?)),
        Classification::Document => {
            Ok(FileArtifact::Document(normalize_document(file).await?))
        }
        Classification::Unsupported => Err(FileError::unsupported(file)),
    }
}
