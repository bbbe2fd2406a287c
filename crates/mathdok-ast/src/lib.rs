//! mathdok-ast - Block and template definitions
//!
//! This crate provides the types used by mathdok for representing
//! tokenized problem markup and fill-in templates.

pub mod block;
pub mod document;
pub mod template;

pub use block::Block;
pub use document::Document;
pub use template::{Slot, SlotKind, Template};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
