//! mathdok-core - Problem markup to LaTeX compilation
//!
//! Core library for mathdok, converting a small line-oriented problem
//! markup into complete LaTeX documents under a user-editable style
//! configuration.
//!
//! # Example
//!
//! ```
//! use mathdok_core::{parse, StyleConfig};
//!
//! let config = StyleConfig::default();
//! let markup = "#problem\nSolve the following equation:\n#eq\n2x + 3 = 7";
//! let latex = parse(markup, &config).unwrap();
//! assert!(latex.contains("\\begin{equation}"));
//! assert!(latex.contains("2x + 3 = 7"));
//! assert!(latex.contains("\\end{document}"));
//! ```

pub mod config;
pub mod error;
pub mod latex;
pub mod parser;
pub mod skeleton;
pub mod template;

// Re-export main types and functions
pub use config::StyleConfig;
pub use error::{ConfigError, SkeletonError, TemplateError};
pub use latex::parse;
pub use parser::tokenize;
pub use skeleton::generate_skeleton;
pub use template::{builtin_templates, find_template, instantiate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
