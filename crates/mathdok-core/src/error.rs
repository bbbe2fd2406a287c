//! Error types for configuration, skeleton generation, and templates

use thiserror::Error;

/// Errors from loading or saving a persisted style configuration
///
/// These never cross the `StyleConfig::load`/`save` boundary; those
/// operations report failure as a boolean and log the message instead.
/// The `try_load`/`try_save` variants expose the full error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors from document skeleton generation
///
/// Malformed scale fields are fatal to the generation call rather than
/// silently defaulted: a skeleton built from a guessed scale would not
/// match what the user believes they configured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkeletonError {
    #[error("scale value for {field} is not a number: {value:?}")]
    MalformedScale {
        /// Configuration field, e.g. `fonts.global_scale`
        field: &'static str,
        /// The offending value as found in the configuration
        value: String,
    },
}

/// Errors from template instantiation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("the {name} field is required")]
    MissingRequiredSlot {
        /// Display name of the unfilled slot
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_message_names_the_slot() {
        let err = TemplateError::MissingRequiredSlot {
            name: "Question".to_string(),
        };
        assert_eq!(err.to_string(), "the Question field is required");
    }

    #[test]
    fn test_malformed_scale_message() {
        let err = SkeletonError::MalformedScale {
            field: "fonts.global_scale",
            value: "big".to_string(),
        };
        assert!(err.to_string().contains("fonts.global_scale"));
        assert!(err.to_string().contains("big"));
    }
}
