//! Block-level constructs recognized in problem markup
//!
//! Each variant corresponds to one marker of the markup language.
//! Lines the tokenizer does not recognize become `Block::Raw` and are
//! passed through to the backend untouched.

use serde::{Deserialize, Serialize};

/// One tokenized block of problem markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `#problem` - problem section header
    ProblemHeader,
    /// `#solution` - solution section header
    SolutionHeader,
    /// `#question` - the consumed following line is the question body
    Question(String),
    /// `#eq` - a single-line display equation
    Equation(String),
    /// `#align` - aligned equation rows, one per collected line
    Align(Vec<String>),
    /// A run of consecutive `#bullet` lines
    BulletList(Vec<String>),
    /// A user-defined marker resolved against the custom-command table
    Custom {
        /// Replacement body from the configuration, `#TEXT#` unresolved
        body: String,
        /// The consumed following line, if the body declares `#TEXT#`
        text: Option<String>,
    },
    /// Unrecognized line, emitted verbatim
    Raw(String),
}

impl Block {
    /// Whether this block opens a math environment in the output
    pub fn is_math(&self) -> bool {
        matches!(self, Block::Equation(_) | Block::Align(_))
    }
}
