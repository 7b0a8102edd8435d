//! Domain errors surfaced to the user.
//!
//! DESIGN
//! ======
//! Validation failures are the only error taxonomy that reaches the user.
//! `Display` carries the exact message shown in the alert or toast, so the
//! reporting path never re-formats them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a selected file was not accepted for upload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing was selected. Not reported to the user.
    #[error("no file selected")]
    NoFile,
    /// Declared MIME type is outside the allow-list.
    #[error("Only PDF files are allowed.")]
    UnsupportedType { mime: String },
    /// File is larger than the configured limit.
    #[error("File size must be under {}MB.", .max / (1024 * 1024))]
    TooLarge { size: u64, max: u64 },
}

impl ValidationError {
    /// Whether the user should be told about this failure.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::NoFile)
    }
}
