//! Tokenized document structure
//!
//! A `Document` is the ordered sequence of blocks produced by one
//! tokenizing pass over the raw markup text.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// A tokenized markup document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document content blocks, in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document is empty (no blocks)
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_document_push_block() {
        let mut doc = Document::new();
        doc.push(Block::Raw("Solve for x:".to_string()));
        doc.push(Block::Equation("2x + 3 = 7".to_string()));
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
    }
}
