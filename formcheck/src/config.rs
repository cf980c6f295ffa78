//! Field and form configuration.
//!
//! Configuration is plain data that can be loaded from JSON. Rules are tagged
//! by `type`; a tag this version does not know becomes [`RuleConfig::Unknown`]
//! and passes at evaluation time. Predicate rules can only be built in code;
//! a `function` rule in configuration is rejected when the field is built.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rule::Rule;

/// Per-field configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Name used in logs and validation reports.
    pub name: Option<String>,

    /// Rules, in evaluation order.
    pub rules: Vec<RuleConfig>,

    /// Validate on every change from creation, instead of once the field is
    /// dirty.
    #[serde(alias = "immediateValidation", alias = "isValidateImmediate")]
    pub immediate_validation: bool,
}

impl FieldConfig {
    /// Parse a field configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-form configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Focus the first invalid field after validating the form.
    #[serde(alias = "focusFirstInvalid", alias = "isFocusErrorInput")]
    pub focus_first_invalid: bool,
}

impl FormConfig {
    /// Parse a form configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A rule as written in configuration.
///
/// Field names follow the Rust API; the camel-case names used by existing
/// JSON form definitions are accepted as aliases.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleConfig {
    MinLength {
        min_length: i64,
        message: String,
        placeholder: Option<String>,
    },
    MaxLength {
        max_length: i64,
        message: String,
        placeholder: Option<String>,
    },
    Match {
        message: String,
        target: String,
    },
    Pattern {
        message: String,
        pattern: String,
    },
    Email {
        message: String,
    },
    /// Any other `type` tag.
    Unknown { kind: String },
}

/// Known rule tags, deserialized strictly.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KnownRule {
    #[serde(rename = "minlength")]
    MinLength {
        #[serde(alias = "minLength", alias = "minlength")]
        min_length: i64,
        #[serde(default, alias = "errorMessage")]
        message: String,
        #[serde(default, alias = "errorMessagePlaceHolder")]
        placeholder: Option<String>,
    },
    #[serde(rename = "maxlength")]
    MaxLength {
        #[serde(alias = "maxLength", alias = "maxlength")]
        max_length: i64,
        #[serde(default, alias = "errorMessage")]
        message: String,
        #[serde(default, alias = "errorMessagePlaceHolder")]
        placeholder: Option<String>,
    },
    Match {
        #[serde(default, alias = "errorMessage")]
        message: String,
        #[serde(alias = "matchValue")]
        target: String,
    },
    Pattern {
        #[serde(default, alias = "errorMessage")]
        message: String,
        pattern: String,
    },
    Email {
        #[serde(default, alias = "errorMessage")]
        message: String,
    },
}

const KNOWN_TAGS: &[&str] = &["minlength", "maxlength", "match", "pattern", "email"];

/// Tag of closure-backed rules in existing form definitions.
const PREDICATE_TAG: &str = "function";

impl<'de> Deserialize<'de> for RuleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?
            .to_string();

        if !KNOWN_TAGS.contains(&kind.as_str()) {
            return Ok(Self::Unknown { kind });
        }

        let known = KnownRule::deserialize(value).map_err(<D::Error as de::Error>::custom)?;
        Ok(match known {
            KnownRule::MinLength {
                min_length,
                message,
                placeholder,
            } => Self::MinLength {
                min_length,
                message,
                placeholder,
            },
            KnownRule::MaxLength {
                max_length,
                message,
                placeholder,
            } => Self::MaxLength {
                max_length,
                message,
                placeholder,
            },
            KnownRule::Match { message, target } => Self::Match { message, target },
            KnownRule::Pattern { message, pattern } => Self::Pattern { message, pattern },
            KnownRule::Email { message } => Self::Email { message },
        })
    }
}

impl TryFrom<RuleConfig> for Rule {
    type Error = ConfigError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        Ok(match config {
            RuleConfig::MinLength {
                min_length,
                message,
                placeholder,
            } => Rule::MinLength {
                min_length,
                message,
                placeholder,
            },
            RuleConfig::MaxLength {
                max_length,
                message,
                placeholder,
            } => Rule::MaxLength {
                max_length,
                message,
                placeholder,
            },
            RuleConfig::Match { message, target } => Rule::Match { message, target },
            RuleConfig::Pattern { message, pattern } => Rule::pattern(&pattern, message)
                .map_err(|source| ConfigError::InvalidPattern { pattern, source })?,
            RuleConfig::Email { message } => Rule::email(message),
            RuleConfig::Unknown { kind } if kind == PREDICATE_TAG => {
                return Err(ConfigError::CodeOnlyRule { kind });
            }
            RuleConfig::Unknown { kind } => Rule::Unknown { kind },
        })
    }
}
