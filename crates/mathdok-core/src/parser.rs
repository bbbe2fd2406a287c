//! Problem markup tokenizer
//!
//! Parses the line-oriented problem markup into a `mathdok_ast::Document`.
//!
//! # Supported markers
//!
//! - `#problem` / `#solution`: section headers
//! - `#question`: the next line is the question body
//! - `#eq`: the next non-empty, non-marker line is a single equation
//! - `#align`: all lines up to the next marker form one aligned block
//! - `#bullet <text>`: consecutive bullet lines form one list
//! - custom markers from the configuration table (additive only)
//!
//! Anything else passes through verbatim. The tokenizer never fails:
//! markup authorship is interactive and exploratory, so unknown input
//! is assumed to be raw backend syntax rather than an error.
//!
//! Block state during the scan is exactly "which block is open": none,
//! equation, or align. Blocks never nest; a marker encountered while a
//! block is open closes it first.

use std::collections::BTreeMap;

use mathdok_ast::{Block, Document};

/// Markers with hardcoded handlers. Custom commands never shadow these.
const BUILTIN_MARKERS: [&str; 6] = [
    "#problem",
    "#solution",
    "#question",
    "#eq",
    "#align",
    "#bullet",
];

/// Which multi-line block is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    None,
    Equation,
    Align,
}

/// Line-oriented tokenizer over the markup text
struct Tokenizer<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    state: BlockState,
    custom_commands: &'a BTreeMap<String, String>,
    doc: Document,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str, custom_commands: &'a BTreeMap<String, String>) -> Self {
        Self {
            lines: text.trim().lines().collect(),
            pos: 0,
            state: BlockState::None,
            custom_commands,
            doc: Document::new(),
        }
    }

    fn run(mut self) -> Document {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            match line {
                "#problem" => {
                    self.doc.push(Block::ProblemHeader);
                    self.pos += 1;
                }
                "#solution" => {
                    self.doc.push(Block::SolutionHeader);
                    self.pos += 1;
                }
                "#question" => self.take_question(),
                "#eq" => self.take_equation(),
                "#align" => self.take_align(),
                _ if line.starts_with("#bullet") => self.take_bullets(),
                _ => {
                    if let Some(body) = self.custom_body(line) {
                        self.take_custom(body);
                    } else {
                        self.doc.push(Block::Raw(line.to_string()));
                        self.pos += 1;
                    }
                }
            }
            debug_assert_eq!(self.state, BlockState::None);
        }
        self.doc
    }

    /// The question body is the next line, consumed as-is (trimmed).
    fn take_question(&mut self) {
        self.pos += 1;
        let body = if self.pos < self.lines.len() {
            let text = self.lines[self.pos].trim().to_string();
            self.pos += 1;
            text
        } else {
            // Marker at end of input: empty body rather than a failure
            String::new()
        };
        self.doc.push(Block::Question(body));
    }

    /// A single equation: exactly the next non-empty, non-marker line.
    fn take_equation(&mut self) {
        self.state = BlockState::Equation;
        self.pos += 1;
        while self.pos < self.lines.len() && self.lines[self.pos].trim().is_empty() {
            self.pos += 1;
        }
        let body = if self.pos < self.lines.len() && !self.lines[self.pos].trim().starts_with('#') {
            let text = self.lines[self.pos].trim().to_string();
            self.pos += 1;
            text
        } else {
            String::new()
        };
        self.state = BlockState::None;
        self.doc.push(Block::Equation(body));
    }

    /// Aligned rows: every line up to the next `#`-leading line or end
    /// of input. Empty lines are dropped; zero rows still form a block.
    fn take_align(&mut self) {
        self.state = BlockState::Align;
        self.pos += 1;
        let mut rows = Vec::new();
        while self.pos < self.lines.len() && !self.lines[self.pos].trim().starts_with('#') {
            let row = self.lines[self.pos].trim();
            if !row.is_empty() {
                rows.push(row.to_string());
            }
            self.pos += 1;
        }
        self.state = BlockState::None;
        self.doc.push(Block::Align(rows));
    }

    /// Consecutive `#bullet` lines accumulate into one list; the list
    /// closes as soon as the one-line lookahead is not a bullet.
    fn take_bullets(&mut self) {
        let mut items = Vec::new();
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            let Some(rest) = line.strip_prefix("#bullet") else {
                break;
            };
            items.push(rest.trim().to_string());
            self.pos += 1;
        }
        self.doc.push(Block::BulletList(items));
    }

    /// Resolve a custom-command marker against the configuration table.
    ///
    /// Custom commands are strictly additive: a configured marker that
    /// collides with a built-in is never consulted.
    fn custom_body(&self, line: &str) -> Option<String> {
        if !line.starts_with('#') || BUILTIN_MARKERS.contains(&line) {
            return None;
        }
        self.custom_commands.get(line).cloned()
    }

    /// A custom command whose body declares `#TEXT#` consumes the next
    /// line the way `#question` does.
    fn take_custom(&mut self, body: String) {
        self.pos += 1;
        let text = if body.contains("#TEXT#") {
            if self.pos < self.lines.len() {
                let text = self.lines[self.pos].trim().to_string();
                self.pos += 1;
                Some(text)
            } else {
                Some(String::new())
            }
        } else {
            None
        };
        self.doc.push(Block::Custom { body, text });
    }
}

/// Tokenize markup text into a block document.
///
/// Never fails; unrecognized lines become [`Block::Raw`].
pub fn tokenize(text: &str, custom_commands: &BTreeMap<String, String>) -> Document {
    Tokenizer::new(text, custom_commands).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_custom() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn test_empty_input() {
        let doc = tokenize("", &no_custom());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_headers_and_passthrough() {
        let doc = tokenize("#problem\nSolve this:\n#solution\nWe solve.", &no_custom());
        assert_eq!(
            doc.blocks,
            vec![
                Block::ProblemHeader,
                Block::Raw("Solve this:".to_string()),
                Block::SolutionHeader,
                Block::Raw("We solve.".to_string()),
            ]
        );
    }

    #[test]
    fn test_question_consumes_next_line() {
        let doc = tokenize("#question\nWhat is x?", &no_custom());
        assert_eq!(doc.blocks, vec![Block::Question("What is x?".to_string())]);
    }

    #[test]
    fn test_question_at_end_of_input_is_empty() {
        let doc = tokenize("#question", &no_custom());
        assert_eq!(doc.blocks, vec![Block::Question(String::new())]);
    }

    #[test]
    fn test_equation_single_line() {
        let doc = tokenize("#eq\n2x + 3 = 7\nleftover prose", &no_custom());
        assert_eq!(
            doc.blocks,
            vec![
                Block::Equation("2x + 3 = 7".to_string()),
                Block::Raw("leftover prose".to_string()),
            ]
        );
    }

    #[test]
    fn test_equation_skips_blank_lines_to_body() {
        let doc = tokenize("#eq\n\n2x = 4", &no_custom());
        assert_eq!(doc.blocks, vec![Block::Equation("2x = 4".to_string())]);
    }

    #[test]
    fn test_equation_before_marker_is_empty() {
        let doc = tokenize("#eq\n#question\nWhat is x?", &no_custom());
        assert_eq!(
            doc.blocks,
            vec![
                Block::Equation(String::new()),
                Block::Question("What is x?".to_string()),
            ]
        );
    }

    #[test]
    fn test_equation_at_end_of_input_is_empty() {
        let doc = tokenize("#eq", &no_custom());
        assert_eq!(doc.blocks, vec![Block::Equation(String::new())]);
    }

    #[test]
    fn test_align_collects_until_marker_or_end() {
        let doc = tokenize("#align\nx + y = 5\nx - y = 3", &no_custom());
        assert_eq!(
            doc.blocks,
            vec![Block::Align(vec![
                "x + y = 5".to_string(),
                "x - y = 3".to_string(),
            ])]
        );
    }

    #[test]
    fn test_align_drops_empty_lines() {
        let doc = tokenize("#align\nx = 1\n\ny = 2\n#problem", &no_custom());
        assert_eq!(
            doc.blocks,
            vec![
                Block::Align(vec!["x = 1".to_string(), "y = 2".to_string()]),
                Block::ProblemHeader,
            ]
        );
    }

    #[test]
    fn test_align_with_no_rows_still_forms_block() {
        let doc = tokenize("#align", &no_custom());
        assert_eq!(doc.blocks, vec![Block::Align(Vec::new())]);
    }

    #[test]
    fn test_bullets_accumulate_and_close_on_lookahead() {
        let doc = tokenize(
            "#bullet first\n#bullet second\nprose\n#bullet third",
            &no_custom(),
        );
        assert_eq!(
            doc.blocks,
            vec![
                Block::BulletList(vec!["first".to_string(), "second".to_string()]),
                Block::Raw("prose".to_string()),
                Block::BulletList(vec!["third".to_string()]),
            ]
        );
    }

    #[test]
    fn test_custom_command_with_text_slot() {
        let mut custom = BTreeMap::new();
        custom.insert("#note".to_string(), "\\textit{#TEXT#}".to_string());
        let doc = tokenize("#note\nRemember the sign.", &custom);
        assert_eq!(
            doc.blocks,
            vec![Block::Custom {
                body: "\\textit{#TEXT#}".to_string(),
                text: Some("Remember the sign.".to_string()),
            }]
        );
    }

    #[test]
    fn test_custom_command_without_text_slot() {
        let mut custom = BTreeMap::new();
        custom.insert("#pagebreak".to_string(), "\\newpage".to_string());
        let doc = tokenize("#pagebreak\nprose", &custom);
        assert_eq!(
            doc.blocks,
            vec![
                Block::Custom {
                    body: "\\newpage".to_string(),
                    text: None,
                },
                Block::Raw("prose".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_command_cannot_shadow_builtin() {
        let mut custom = BTreeMap::new();
        custom.insert("#eq".to_string(), "IGNORED".to_string());
        let doc = tokenize("#eq\nx = 1", &custom);
        assert_eq!(doc.blocks, vec![Block::Equation("x = 1".to_string())]);
    }

    #[test]
    fn test_unknown_marker_passes_through() {
        let doc = tokenize("#mystery\ntext", &no_custom());
        assert_eq!(
            doc.blocks,
            vec![
                Block::Raw("#mystery".to_string()),
                Block::Raw("text".to_string()),
            ]
        );
    }
}
