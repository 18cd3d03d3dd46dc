//! Error types for the OTLP trace encoder
//!
//! Sizing and tree construction are infallible; the only runtime failure
//! class is the output sink rejecting bytes during the write pass.

use thiserror::Error;

/// Errors surfaced by the encode path.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The output sink failed while the request was being written. The
    /// in-progress encode is aborted; nothing partial is reported as
    /// success.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}
