//! Validation rules and the ordered evaluation of a rule list.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use regex::Regex;

use crate::message::resolve;

/// Predicate closure used by [`Rule::Predicate`].
pub type PredicateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single validation check.
///
/// A rule list is evaluated in order and the first failing rule's message is
/// reported. Length bounds of zero or less are treated as `1`.
#[derive(Clone)]
pub enum Rule {
    /// Fails when the value has fewer characters than `min_length`.
    MinLength {
        min_length: i64,
        message: String,
        /// Token in `message` replaced by the bound.
        placeholder: Option<String>,
    },
    /// Fails when the value has more characters than `max_length`.
    MaxLength {
        max_length: i64,
        message: String,
        /// Token in `message` replaced by the bound.
        placeholder: Option<String>,
    },
    /// Fails when `test` returns false for the value.
    Predicate { message: String, test: PredicateFn },
    /// Fails when the value differs from `target`.
    Match { message: String, target: String },
    /// A rule kind this version does not understand. Always passes.
    Unknown { kind: String },
}

/// Discriminant of a [`Rule`], used to look up default messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    MinLength,
    MaxLength,
    Predicate,
    Match,
    Unknown,
}

impl Rule {
    /// Require at least `min` characters.
    pub fn min_length(min: i64, message: impl Into<String>) -> Self {
        Self::MinLength {
            min_length: min,
            message: message.into(),
            placeholder: None,
        }
    }

    /// Require at most `max` characters.
    pub fn max_length(max: i64, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max_length: max,
            message: message.into(),
            placeholder: None,
        }
    }

    /// Require `test` to accept the value.
    pub fn predicate<F>(test: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate {
            message: message.into(),
            test: Arc::new(test),
        }
    }

    /// Require the value to equal `target` exactly.
    pub fn matches(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Match {
            message: message.into(),
            target: target.into(),
        }
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        Ok(Self::predicate(move |v| re.is_match(v), message))
    }

    /// Require a valid email address. An empty value passes.
    pub fn email(message: impl Into<String>) -> Self {
        Self::predicate(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            message,
        )
    }

    /// Set the placeholder token substituted with the bound in the message.
    ///
    /// Only length rules carry a bound; other rules are returned unchanged.
    pub fn with_placeholder(mut self, token: impl Into<String>) -> Self {
        match &mut self {
            Self::MinLength { placeholder, .. } | Self::MaxLength { placeholder, .. } => {
                *placeholder = Some(token.into());
            }
            _ => {}
        }
        self
    }

    /// Get the kind of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::MinLength { .. } => RuleKind::MinLength,
            Self::MaxLength { .. } => RuleKind::MaxLength,
            Self::Predicate { .. } => RuleKind::Predicate,
            Self::Match { .. } => RuleKind::Match,
            Self::Unknown { .. } => RuleKind::Unknown,
        }
    }

    /// The effective length bound, after coercing non-positive values to 1.
    pub fn bound(&self) -> Option<usize> {
        match self {
            Self::MinLength { min_length, .. } => Some(coerce_bound(*min_length)),
            Self::MaxLength { max_length, .. } => Some(coerce_bound(*max_length)),
            _ => None,
        }
    }

    /// Check `value` against this rule, returning the resolved failure message.
    pub fn check(&self, value: &str) -> Option<String> {
        let failed = match self {
            Self::MinLength { min_length, .. } => value.chars().count() < coerce_bound(*min_length),
            Self::MaxLength { max_length, .. } => value.chars().count() > coerce_bound(*max_length),
            Self::Predicate { test, .. } => !test(value),
            Self::Match { target, .. } => value != target.as_str(),
            Self::Unknown { kind } => {
                debug!("Skipping unknown rule kind '{}'", kind);
                false
            }
        };

        if !failed {
            return None;
        }

        let resolved = match self {
            Self::MinLength {
                message,
                placeholder,
                ..
            }
            | Self::MaxLength {
                message,
                placeholder,
                ..
            } => resolve(self.kind(), message, placeholder.as_deref(), self.bound()),
            Self::Predicate { message, .. } | Self::Match { message, .. } => {
                resolve(self.kind(), message, None, None)
            }
            Self::Unknown { .. } => return None,
        };
        Some(resolved)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength {
                min_length,
                message,
                placeholder,
            } => f
                .debug_struct("MinLength")
                .field("min_length", min_length)
                .field("message", message)
                .field("placeholder", placeholder)
                .finish(),
            Self::MaxLength {
                max_length,
                message,
                placeholder,
            } => f
                .debug_struct("MaxLength")
                .field("max_length", max_length)
                .field("message", message)
                .field("placeholder", placeholder)
                .finish(),
            Self::Predicate { message, .. } => f
                .debug_struct("Predicate")
                .field("message", message)
                .finish_non_exhaustive(),
            Self::Match { message, target } => f
                .debug_struct("Match")
                .field("message", message)
                .field("target", target)
                .finish(),
            Self::Unknown { kind } => f.debug_struct("Unknown").field("kind", kind).finish(),
        }
    }
}

/// Evaluate `rules` in order against `value`.
///
/// Returns the first failing rule's message, or an empty string if every
/// rule passes.
pub fn evaluate(rules: &[Rule], value: &str) -> String {
    for (idx, rule) in rules.iter().enumerate() {
        if let Some(message) = rule.check(value) {
            trace!("Rule {} ({:?}) failed: {}", idx, rule.kind(), message);
            return message;
        }
    }
    String::new()
}

fn coerce_bound(bound: i64) -> usize {
    if bound <= 0 {
        1
    } else {
        usize::try_from(bound).unwrap_or(usize::MAX)
    }
}
