//! Style configuration
//!
//! A `StyleConfig` is the nested mapping of formatting parameters that
//! drives both skeleton generation and markup compilation. It is
//! constructed with built-in defaults, optionally merged with a
//! persisted TOML copy, and passed as an immutable snapshot into each
//! compilation pass.
//!
//! Merge policy: categories present in the loaded copy are merged
//! key-by-key into the current values; keys and categories the defaults
//! do not know are dropped silently (forward-compatible ignore);
//! categories absent from the loaded copy are left untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Font size and scale settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Base class size token with unit, e.g. `12pt`
    pub base_font_size: String,
    /// Global scaling factor applied to the base size (nominal 0.5-1.5)
    pub global_scale: String,
    /// Scale of problem/solution headers relative to the base size
    pub problem_header_scale: String,
    /// Scale of question text relative to the base size
    pub question_scale: String,
    /// Scale of equation bodies relative to the base size
    pub equation_scale: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            base_font_size: "12pt".to_string(),
            global_scale: "0.8".to_string(),
            problem_header_scale: "1.2".to_string(),
            question_scale: "1.0".to_string(),
            equation_scale: "1.0".to_string(),
        }
    }
}

/// Vertical spacing settings, each a LaTeX length or bare multiplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Line spacing multiplier for `\setstretch`
    pub line_spacing: String,
    /// Length inserted above equation and align environments
    pub above_equation: String,
    /// Length inserted below equation and align environments
    pub below_equation: String,
    /// Paragraph spacing length
    pub paragraph_spacing: String,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            line_spacing: "1.5".to_string(),
            above_equation: "12pt".to_string(),
            below_equation: "12pt".to_string(),
            paragraph_spacing: "6pt".to_string(),
        }
    }
}

/// Format strings for rendered sections, each with one `#TEXT#` slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styling {
    /// Rendering of a question body
    pub question_format: String,
    /// Rendering of a problem/solution header
    pub problem_format: String,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            question_format: "#TEXT#".to_string(),
            problem_format: "\\section*{#TEXT#}".to_string(),
        }
    }
}

/// Page margins, as LaTeX lengths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: "0.75in".to_string(),
            right: "0.75in".to_string(),
            bottom: "0.75in".to_string(),
            left: "0.75in".to_string(),
        }
    }
}

/// The complete style configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub fonts: Fonts,
    pub spacing: Spacing,
    pub styling: Styling,
    pub margins: Margins,
    /// User-defined marker table: marker token (e.g. `#note`) to a
    /// replacement body with an optional `#TEXT#` slot. Strictly
    /// additive; entries shadowing built-in markers are never consulted.
    pub custom_commands: BTreeMap<String, String>,
}

/// Partial configuration as found in a persisted copy
///
/// Every category is an open key/value mapping so that a persisted file
/// may name only the keys it overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleOverlay {
    pub fonts: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub styling: BTreeMap<String, String>,
    pub margins: BTreeMap<String, String>,
    pub custom_commands: BTreeMap<String, String>,
}

impl StyleOverlay {
    /// Parse an overlay from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

impl StyleConfig {
    /// Merge a loaded overlay into this configuration, key by key.
    ///
    /// Keys the defaults do not declare are dropped silently, except in
    /// `custom_commands`, which is an open table.
    pub fn merge(&mut self, overlay: StyleOverlay) {
        for (key, value) in overlay.fonts {
            match key.as_str() {
                "base_font_size" => self.fonts.base_font_size = value,
                "global_scale" => self.fonts.global_scale = value,
                "problem_header_scale" => self.fonts.problem_header_scale = value,
                "question_scale" => self.fonts.question_scale = value,
                "equation_scale" => self.fonts.equation_scale = value,
                _ => {}
            }
        }
        for (key, value) in overlay.spacing {
            match key.as_str() {
                "line_spacing" => self.spacing.line_spacing = value,
                "above_equation" => self.spacing.above_equation = value,
                "below_equation" => self.spacing.below_equation = value,
                "paragraph_spacing" => self.spacing.paragraph_spacing = value,
                _ => {}
            }
        }
        for (key, value) in overlay.styling {
            match key.as_str() {
                "question_format" => self.styling.question_format = value,
                "problem_format" => self.styling.problem_format = value,
                _ => {}
            }
        }
        for (key, value) in overlay.margins {
            match key.as_str() {
                "top" => self.margins.top = value,
                "right" => self.margins.right = value,
                "bottom" => self.margins.bottom = value,
                "left" => self.margins.left = value,
                _ => {}
            }
        }
        self.custom_commands.extend(overlay.custom_commands);
    }

    /// Load a persisted configuration and merge it into this one.
    ///
    /// Any failure leaves the in-memory configuration untouched.
    pub fn try_load(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = fs::read_to_string(path)?;
        let overlay = StyleOverlay::from_toml_str(&text)?;
        self.merge(overlay);
        Ok(())
    }

    /// Boolean-returning variant of [`try_load`](Self::try_load); logs
    /// the failure to stderr.
    pub fn load(&mut self, path: &Path) -> bool {
        match self.try_load(path) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Error loading configuration: {e}");
                false
            }
        }
    }

    /// Serialize the full configuration to a TOML file.
    pub fn try_save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Boolean-returning variant of [`try_save`](Self::try_save); logs
    /// the failure to stderr.
    pub fn save(&self, path: &Path) -> bool {
        match self.try_save(path) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Error saving configuration: {e}");
                false
            }
        }
    }

    /// Restore built-in defaults, discarding all overrides.
    pub fn reset(&mut self) {
        *self = StyleConfig::default();
    }
}
