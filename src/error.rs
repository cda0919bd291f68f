//! Errors for the few editor inputs that arrive as untyped strings.
//!
//! History navigation and updates against unknown ids are not errors: they
//! are silent no-ops. Only parsing can fail (select-option values and
//! configuration JSON).

/// Errors produced while parsing editor input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// A font size outside the supported option set.
    #[error("unknown font size: {0}")]
    UnknownFontSize(String),

    /// A font family outside the supported option set.
    #[error("unknown font family: {0}")]
    UnknownFontFamily(String),

    /// Any other style attribute value that has no typed counterpart.
    #[error("unknown {attribute} value: {value}")]
    UnknownStyleValue { attribute: &'static str, value: String },

    /// Configuration JSON could not be deserialized.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// Configuration deserialized but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl EditorError {
    /// Stable machine-readable code for the host UI.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFontSize(_) => "E_UNKNOWN_FONT_SIZE",
            Self::UnknownFontFamily(_) => "E_UNKNOWN_FONT_FAMILY",
            Self::UnknownStyleValue { .. } => "E_UNKNOWN_STYLE_VALUE",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
