use crate::clipboard::ClipboardError;
use thiserror::Error;

/// Outcomes that end a run unsuccessfully. The message has already been shown
/// to the user when one of these is returned.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("No valid extensions provided.")]
    NoExtensions,
    #[error("No files found with the specified extensions.")]
    NoFiles,
    #[error(transparent)]
    CopyFailed(#[from] ClipboardError),
}

impl CollectorError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}
