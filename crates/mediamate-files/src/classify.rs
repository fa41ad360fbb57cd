//! File classification — image vs. document vs. unsupported.
//!
//! Decision order: MIME whitelists first, then a case-insensitive extension
//! fallback for documents only. Always returns a verdict, never errors.

use crate::descriptor::FileDescriptor;

/// MIME types accepted as raster images.
pub const IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
];

/// MIME types accepted as text documents.
pub const DOC_TYPES: &[&str] = &[
    "text/plain",
    "application/json",
    "text/markdown",
    "text/csv",
    "text/html",
    "text/xml",
    "application/xml",
    "text/javascript",
    "application/javascript",
    "text/css",
    "application/rtf",
];

/// Extensions accepted as text documents when the MIME type says nothing.
pub const DOC_EXTENSIONS: &[&str] = &[
    "txt", "json", "md", "csv", "html", "xml", "js", "css", "rtf", "log", "conf", "config", "ini",
    "yaml", "yml",
];

/// Verdict of [`classify`]. Derived per call, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Image,
    Document,
    Unsupported,
}

/// Classify a file. Pure; first match wins.
pub fn classify(file: &FileDescriptor) -> Classification {
    if IMAGE_TYPES.contains(&file.mime_type.as_str()) {
        return Classification::Image;
    }
    if DOC_TYPES.contains(&file.mime_type.as_str()) || has_document_extension(file) {
        return Classification::Document;
    }
    Classification::Unsupported
}

fn has_document_extension(file: &FileDescriptor) -> bool {
    file.extension()
        .map(|ext| DOC_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}
