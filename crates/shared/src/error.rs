use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::VisitorField;

/// Per-field validation messages, in form order.
///
/// A field is present iff it failed the last validation pass; the whole set
/// is replaced wholesale on every pass, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    messages: BTreeMap<VisitorField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: VisitorField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn get(&self, field: VisitorField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = VisitorField> + '_ {
        self.messages.keys().copied()
    }
}

/// Failure of the submit path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} required field(s) missing", .0.len())]
    Validation(FieldErrors),
}

impl SubmitError {
    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            SubmitError::Validation(errors) => errors,
        }
    }
}
