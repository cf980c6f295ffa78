//! Field validator - one text input's value, dirtiness and error message.

use std::fmt;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::focus::FocusHandle;
use crate::rule::{self, Rule};

/// Change callback handed to the input widget.
pub type OnChangeText = Arc<dyn Fn(String) + Send + Sync>;

/// Internal state for a field
#[derive(Debug, Default)]
struct FieldInner {
    /// Name used in logs and validation reports
    name: Option<String>,
    /// Rules, in evaluation order
    rules: Vec<Rule>,
    /// Current text value
    value: String,
    /// Set once the value is first non-empty
    dirty: bool,
    /// Current error message, empty when there is none
    error_message: String,
    /// Validate on every change regardless of dirtiness
    immediate: bool,
    /// Bumped whenever the value or rules change
    revision: u64,
}

/// A validated text field.
///
/// `Field` owns the state of one input: its value, whether the user has
/// typed into it yet, and the message of the first failing rule. It is a
/// cheap handle, so clones share the same state and a [`Form`](crate::Form)
/// can hold a field alongside the UI code that edits it.
///
/// Until the field is dirty, changes do not update the error message unless
/// the field was created in immediate mode. [`Field::validate`] always
/// evaluates.
///
/// # Example
///
/// ```
/// use formcheck::{Field, Rule};
///
/// let password = Field::new(vec![
///     Rule::min_length(8, "Min {N}").with_placeholder("{N}"),
/// ]);
///
/// password.set_value("abc");
/// assert_eq!(password.error_message(), "Min 8");
/// assert!(!password.is_valid());
///
/// password.set_value("abcdefgh");
/// assert!(password.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    inner: Arc<RwLock<FieldInner>>,
    focus: FocusHandle,
}

/// Result of forcing a field to validate.
#[derive(Debug, Clone)]
pub struct FieldValidation {
    /// Handle the caller may use to focus the field.
    pub focus: FocusHandle,
    /// Whether the field has no error message.
    pub is_valid: bool,
}

/// Point-in-time view of a field.
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub value: String,
    pub error_message: String,
    /// `true` only when there is no error and the value is non-empty.
    pub is_valid: bool,
    pub focus: FocusHandle,
}

/// Properties consumed by an input widget.
#[derive(Clone)]
pub struct InputProps {
    pub value: String,
    pub error_message: String,
    /// Call with the new text on every edit.
    pub on_change_text: OnChangeText,
}

impl fmt::Debug for InputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProps")
            .field("value", &self.value)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Create a field that validates once it becomes dirty.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self::with_mode(rules, false)
    }

    /// Create a field that validates on every change, starting now.
    pub fn immediate(rules: Vec<Rule>) -> Self {
        Self::with_mode(rules, true)
    }

    /// Create a field with an explicit validation mode.
    pub fn with_mode(rules: Vec<Rule>, immediate: bool) -> Self {
        let field = Self {
            inner: Arc::new(RwLock::new(FieldInner {
                rules,
                immediate,
                ..Default::default()
            })),
            focus: FocusHandle::new(),
        };
        field.refresh();
        field
    }

    /// Create a field from deserialized configuration.
    pub fn from_config(config: FieldConfig) -> Result<Self, ConfigError> {
        let rules = config
            .rules
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let field = Self::with_mode(rules, config.immediate_validation);
        Ok(match config.name {
            Some(name) => field.named(name),
            None => field,
        })
    }

    /// Set the field name used in logs and validation reports.
    pub fn named(self, name: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.name = Some(name.into());
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the field name, if one was set
    pub fn name(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.name.clone())
            .unwrap_or(None)
    }

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the current error message (empty when there is none)
    pub fn error_message(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.error_message.clone())
            .unwrap_or_default()
    }

    /// Check if the field currently shows an error
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !guard.error_message.is_empty())
            .unwrap_or(false)
    }

    /// Check if the field has ever held a non-empty value
    pub fn is_dirty(&self) -> bool {
        self.inner.read().map(|guard| guard.dirty).unwrap_or(false)
    }

    /// Check if the field validates on every change from creation
    pub fn is_immediate(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.immediate)
            .unwrap_or(false)
    }

    /// Check if the field is valid.
    ///
    /// An empty value is never valid, even with no rules and no error.
    pub fn is_valid(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error_message.is_empty() && !guard.value.is_empty())
            .unwrap_or(false)
    }

    /// Get a copy of the rule list
    pub fn rules(&self) -> Vec<Rule> {
        self.inner
            .read()
            .map(|guard| guard.rules.clone())
            .unwrap_or_default()
    }

    /// Get the handle the UI binds its focus target into.
    pub fn focus_handle(&self) -> FocusHandle {
        self.focus.clone()
    }

    /// Get the value, error message and validity in one read
    pub fn snapshot(&self) -> FieldSnapshot {
        let (value, error_message) = self
            .inner
            .read()
            .map(|guard| (guard.value.clone(), guard.error_message.clone()))
            .unwrap_or_default();

        FieldSnapshot {
            is_valid: error_message.is_empty() && !value.is_empty(),
            value,
            error_message,
            focus: self.focus.clone(),
        }
    }

    /// Get the properties an input widget renders from.
    pub fn props(&self) -> InputProps {
        let field = self.clone();
        InputProps {
            value: self.value(),
            error_message: self.error_message(),
            on_change_text: Arc::new(move |text| field.set_value(text)),
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value.
    ///
    /// The first non-empty value marks the field dirty.
    pub fn set_value(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if !guard.dirty && !text.is_empty() {
                guard.dirty = true;
                debug!("Field '{}' is now dirty", label(&guard));
            }
            guard.value = text;
            guard.revision += 1;
        }
        self.refresh();
    }

    /// Replace the rule list.
    pub fn set_rules(&self, rules: Vec<Rule>) {
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.rules = rules;
            guard.revision += 1;
        }
        self.refresh();
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Evaluate the rules against the current value without storing the result.
    pub fn evaluate(&self) -> String {
        let Some((rules, value, _)) = self.evaluation_input() else {
            return String::new();
        };
        rule::evaluate(&rules, &value)
    }

    /// Evaluate now and store the error message, ignoring dirtiness.
    ///
    /// If the value or rules change while the rules run, evaluation is
    /// repeated so the stored message always matches the current state.
    pub fn validate(&self) -> FieldValidation {
        let is_valid = loop {
            let Some((rules, value, revision)) = self.evaluation_input() else {
                break false;
            };
            let message = rule::evaluate(&rules, &value);
            let Ok(mut guard) = self.inner.write() else {
                break false;
            };
            if guard.revision != revision {
                continue;
            }

            let is_valid = message.is_empty();
            debug!(
                "Validated field '{}': {}",
                label(&guard),
                if is_valid { "ok" } else { message.as_str() }
            );
            guard.error_message = message;
            break is_valid;
        };

        FieldValidation {
            focus: self.focus.clone(),
            is_valid,
        }
    }

    /// Recompute the error message if the field is immediate or dirty.
    fn refresh(&self) {
        let live = self
            .inner
            .read()
            .map(|guard| guard.immediate || guard.dirty)
            .unwrap_or(false);
        if !live {
            return;
        }

        let Some((rules, value, revision)) = self.evaluation_input() else {
            return;
        };
        let message = rule::evaluate(&rules, &value);

        // A newer change runs its own refresh; dirtiness never reverts, so
        // that refresh is live too and its result must not be overwritten.
        if let Ok(mut guard) = self.inner.write()
            && guard.revision == revision
        {
            guard.error_message = message;
        }
    }

    /// Copy out what evaluation needs so no lock is held while predicates run.
    fn evaluation_input(&self) -> Option<(Vec<Rule>, String, u64)> {
        self.inner
            .read()
            .ok()
            .map(|guard| (guard.rules.clone(), guard.value.clone(), guard.revision))
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn label(inner: &FieldInner) -> &str {
    inner.name.as_deref().unwrap_or("<unnamed>")
}
