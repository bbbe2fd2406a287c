//! mathdok-build - External collaborators around the compiler core
//!
//! Wraps the synchronous child-process call to the LaTeX engine,
//! persists backend failure output to timestamped log files, and holds
//! the preview-resolution arithmetic. The core never touches any of
//! this; it is pure text-to-text.

pub mod logger;
pub mod preview;
pub mod runner;

pub use logger::ErrorLogger;
pub use preview::{effective_dpi, BASE_DPI, MAX_DPI};
pub use runner::{CompileOutput, LatexRunner};

use thiserror::Error;

/// Errors from the build-side collaborators.
///
/// A LaTeX run that completes with a non-zero exit is not an error at
/// this level; it is a failed [`CompileOutput`] whose captured log the
/// caller persists.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to invoke {engine}: {source}")]
    Spawn {
        engine: String,
        #[source]
        source: std::io::Error,
    },

    #[error("log I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
