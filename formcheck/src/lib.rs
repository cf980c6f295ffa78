//! Declarative validation for text inputs and forms.
//!
//! A [`Field`] evaluates an ordered list of [`Rule`]s against its current
//! value and keeps the first failing rule's message. A [`Form`] combines
//! fields into a single validity flag and, when asked to validate, focuses the
//! first field that failed.
//!
//! # Example
//!
//! ```
//! use formcheck::prelude::*;
//!
//! let password = Field::new(vec![
//!     Rule::min_length(8, "Min {N}").with_placeholder("{N}"),
//!     Rule::matches("secret123", "Passwords do not match"),
//! ])
//! .named("password");
//!
//! let form = Form::new(vec![password.clone()]).focus_first_invalid(true);
//!
//! password.set_value("a");
//! assert_eq!(password.error_message(), "Min 8");
//!
//! password.set_value("secret12");
//! assert_eq!(password.error_message(), "Passwords do not match");
//!
//! password.set_value("secret123");
//! assert!(form.is_valid());
//! assert!(form.validate().is_valid());
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod focus;
pub mod form;
pub mod message;
pub mod rule;

pub use config::{FieldConfig, FormConfig, RuleConfig};
pub use error::ConfigError;
pub use field::{Field, FieldSnapshot, FieldValidation, InputProps};
pub use focus::{FocusHandle, FocusRequest, Focusable};
pub use form::{Form, InvalidField, ValidationResult};
pub use rule::{Rule, RuleKind};

pub mod prelude {
    pub use crate::config::{FieldConfig, FormConfig, RuleConfig};
    pub use crate::error::ConfigError;
    pub use crate::field::{Field, FieldSnapshot, FieldValidation, InputProps};
    pub use crate::focus::{FocusHandle, FocusRequest, Focusable};
    pub use crate::form::{Form, InvalidField, ValidationResult};
    pub use crate::rule::{Rule, RuleKind};
}
