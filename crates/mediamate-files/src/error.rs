//! Errors for the file pipeline.

/// What went wrong while classifying or normalizing a file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("unsupported file type {mime_type:?} for {name:?}")]
    UnsupportedType { mime_type: String, name: String },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to read file content as text: {0}")]
    Read(#[from] std::string::FromUtf8Error),
}

impl FileError {
    pub(crate) fn unsupported(file: &crate::descriptor::FileDescriptor) -> Self {
        Self::UnsupportedType {
            mime_type: file.mime_type.clone(),
            name: file.name.clone(),
        }
    }
}
