//! Error types for the export pipeline.
//!
//! Per-item failures (unresolved references, fetch failures, bad prop
//! values) recover locally with documented fallbacks and never appear
//! here; only whole-run failures are surfaced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No partial archive is usable, so this is terminal.
    #[error("archive serialization failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page render failed: {0}")]
    Render(#[from] weaver_compiler_page::RenderError),
}
