// File: crates/sheet-core/src/error.rs
// Summary: Error taxonomy for layout computation and sink delivery.

use thiserror::Error;

/// Failure reported by a concrete `RenderSink`. Carried through the core verbatim.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("render backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Geometry or counts that cannot produce a sheet. Raised before any command is emitted.
    #[error("invalid sheet configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unknown paper size `{0}`")]
    UnknownPaperSize(String),
    #[error("label alphabet exhausted: {requested} symbols requested, {available} available")]
    LabelAlphabetExhausted { requested: usize, available: usize },
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl LayoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
