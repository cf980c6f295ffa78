/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    /// Position of the field in the form.
    pub index: usize,
    /// Field name, if one was set.
    pub name: Option<String>,
}

/// Result of validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in form order.
    Invalid(Vec<InvalidField>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all failed fields.
    pub fn invalid_fields(&self) -> &[InvalidField] {
        match self {
            Self::Valid => &[],
            Self::Invalid(fields) => fields,
        }
    }

    /// Get the first failed field (if any).
    pub fn first_invalid(&self) -> Option<&InvalidField> {
        self.invalid_fields().first()
    }

    /// Get the index of the first failed field.
    pub fn first_invalid_index(&self) -> Option<usize> {
        self.first_invalid().map(|f| f.index)
    }
}
