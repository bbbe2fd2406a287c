//! LaTeX emission
//!
//! Converts a tokenized document into LaTeX and substitutes it, along
//! with the margin and line-spacing values, into the generated
//! skeleton. This is the compilation entry point.

use mathdok_ast::{Block, Document};

use crate::config::StyleConfig;
use crate::error::SkeletonError;
use crate::parser::tokenize;
use crate::skeleton::{
    self, generate_skeleton, BOTTOM_PLACEHOLDER, LEFT_PLACEHOLDER, LINE_SPACING_PLACEHOLDER,
    RIGHT_PLACEHOLDER, TOP_PLACEHOLDER,
};

/// Row separator between collected align lines
const ALIGN_ROW_SEPARATOR: &str = " \\\\ ";

/// Fixed spacing directive emitted before each question
const QUESTION_LEAD: &str = "\\vspace{1em}";

/// Substitute a body into a single-placeholder format string.
///
/// Only the fixed `#TEXT#` token is interpreted; the value itself is
/// never re-scanned, so backend-special characters in user-authored
/// text pass through untouched.
pub(crate) fn fill_text(format: &str, value: &str) -> String {
    format.replace("#TEXT#", value)
}

/// LaTeX emitter over a tokenized document
struct LatexEmitter<'a> {
    config: &'a StyleConfig,
    output: String,
}

impl<'a> LatexEmitter<'a> {
    fn new(config: &'a StyleConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn emit(mut self, doc: &Document) -> String {
        for block in &doc.blocks {
            self.emit_block(block);
        }
        // One block per line; drop the trailing newline
        self.output.trim_end().to_string()
    }

    fn emit_block(&mut self, block: &Block) {
        match block {
            Block::ProblemHeader => {
                self.push_line(&fill_text(&self.config.styling.problem_format, ""));
            }
            Block::SolutionHeader => {
                self.push_line(&fill_text(&self.config.styling.problem_format, "Solution"));
            }
            Block::Question(body) => {
                self.push_line(QUESTION_LEAD);
                self.push_line(&fill_text(&self.config.styling.question_format, body));
            }
            Block::Equation(body) => {
                let above = self.config.spacing.above_equation.clone();
                let below = self.config.spacing.below_equation.clone();
                self.push_line(&format!("\\vspace{{{above}}}"));
                self.push_line("\\begin{equation}");
                self.push_line(body);
                self.push_line("\\end{equation}");
                self.push_line(&format!("\\vspace{{{below}}}"));
            }
            Block::Align(rows) => {
                let above = self.config.spacing.above_equation.clone();
                let below = self.config.spacing.below_equation.clone();
                self.push_line(&format!("\\vspace{{{above}}}"));
                self.push_line("\\begin{align}");
                self.push_line(&rows.join(ALIGN_ROW_SEPARATOR));
                self.push_line("\\end{align}");
                self.push_line(&format!("\\vspace{{{below}}}"));
            }
            Block::BulletList(items) => {
                self.push_line("\\begin{itemize}");
                for item in items {
                    self.push_line(&format!("\\item {item}"));
                }
                self.push_line("\\end{itemize}");
            }
            Block::Custom { body, text } => match text {
                Some(text) => self.push_line(&fill_text(body, text)),
                None => self.push_line(body),
            },
            Block::Raw(line) => self.push_line(line),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

/// Compile markup text into a complete LaTeX document.
///
/// Never fails for malformed markup (unrecognized lines pass through);
/// it fails only when the configuration carries a non-numeric scale
/// field, which makes skeleton generation impossible.
pub fn parse(markup: &str, config: &StyleConfig) -> Result<String, SkeletonError> {
    let doc = tokenize(markup, &config.custom_commands);
    let content = LatexEmitter::new(config).emit(&doc);
    let skeleton = generate_skeleton(config)?;

    // Margins and line spacing first; content last, so that literal
    // placeholder-shaped text in user prose is never reinterpreted.
    let document = skeleton
        .replace(TOP_PLACEHOLDER, &config.margins.top)
        .replace(RIGHT_PLACEHOLDER, &config.margins.right)
        .replace(BOTTOM_PLACEHOLDER, &config.margins.bottom)
        .replace(LEFT_PLACEHOLDER, &config.margins.left)
        .replace(LINE_SPACING_PLACEHOLDER, &config.spacing.line_spacing)
        .replace(skeleton::CONTENT_PLACEHOLDER, &content);

    Ok(document)
}
