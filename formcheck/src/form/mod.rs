//! Form validator - aggregates the fields of a form.

mod result;

pub use result::{InvalidField, ValidationResult};

use log::debug;

use crate::config::FormConfig;
use crate::field::Field;
use crate::focus::FocusHandle;

/// A set of fields validated together.
///
/// The form holds handles to fields created by the caller; it never creates
/// fields itself and never looks at why a field failed, only whether it did.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use formcheck::{Field, FocusRequest, Form, Rule};
///
/// let email = Field::new(vec![Rule::email("Invalid email")]).named("email");
/// let password = Field::new(vec![Rule::min_length(8, "")]).named("password");
///
/// let password_focus = FocusRequest::new();
/// password.focus_handle().bind(Arc::new(password_focus.clone()));
///
/// let form = Form::new(vec![email.clone(), password.clone()]).focus_first_invalid(true);
///
/// email.set_value("user@example.com");
/// password.set_value("short");
///
/// let result = form.validate();
/// assert!(result.is_invalid());
/// assert_eq!(password.error_message(), "Min length is 8 characters");
/// assert!(password_focus.take_focus_request());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<Field>,
    focus_first_invalid: bool,
}

impl Form {
    /// Create a form over `fields`, in display order.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focus_first_invalid: false,
        }
    }

    /// Create a form using deserialized configuration.
    pub fn from_config(fields: Vec<Field>, config: &FormConfig) -> Self {
        Self::new(fields).focus_first_invalid(config.focus_first_invalid)
    }

    /// Focus the first invalid field after [`Form::validate`].
    pub fn focus_first_invalid(mut self, enabled: bool) -> Self {
        self.focus_first_invalid = enabled;
        self
    }

    /// Check if the first invalid field is focused after validation.
    pub fn focuses_first_invalid(&self) -> bool {
        self.focus_first_invalid
    }

    /// Get the fields, in form order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a field.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Replace the field list.
    pub fn set_fields(&mut self, fields: Vec<Field>) {
        self.fields = fields;
    }

    /// Check if every field is valid. A form without fields is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Validate every field, in order, then focus the first one that failed.
    ///
    /// Every field is validated even after a failure so each shows its own
    /// error. At most one focus request is issued, and only when
    /// `focus_first_invalid` is enabled.
    pub fn validate(&self) -> ValidationResult {
        let mut invalid = Vec::new();
        let mut first_focus: Option<FocusHandle> = None;

        for (index, field) in self.fields.iter().enumerate() {
            let outcome = field.validate();
            if outcome.is_valid {
                continue;
            }

            if self.focus_first_invalid && first_focus.is_none() {
                first_focus = Some(outcome.focus);
            }
            invalid.push(InvalidField {
                index,
                name: field.name(),
            });
        }

        if let Some(handle) = first_focus {
            debug!("Focusing first invalid field");
            handle.focus();
        }

        if invalid.is_empty() {
            ValidationResult::Valid
        } else {
            debug!("Form validation failed for {} field(s)", invalid.len());
            ValidationResult::Invalid(invalid)
        }
    }
}
