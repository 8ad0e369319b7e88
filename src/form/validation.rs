//! Field-level validation rules for the identity & address step

use std::collections::BTreeMap;

use thiserror::Error;

use super::cnic::is_valid_cnic;
use crate::data::{DocumentType, RegistrationForm};

/// Fields validated on blur
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Cnic,
    Passport,
    CompleteAddress,
}

impl FieldName {
    /// The field's current value in the record
    pub fn value_in(self, form: &RegistrationForm) -> &str {
        match self {
            FieldName::Cnic => &form.cnic,
            FieldName::Passport => &form.passport,
            FieldName::CompleteAddress => &form.complete_address,
        }
    }
}

/// A user-correctable validation failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("CNIC is required")]
    CnicRequired,
    #[error("Invalid CNIC format")]
    InvalidCnic,
    #[error("Passport number is required")]
    PassportRequired,
    #[error("Complete address is required")]
    AddressRequired,
}

/// Validate one field's value.
///
/// `document_type` only matters for the passport rule: a passport number is
/// required only while Passport is the active document.
pub fn validate_field(
    field: FieldName,
    value: &str,
    document_type: DocumentType,
) -> Result<(), FieldError> {
    match field {
        FieldName::Cnic => {
            if value.is_empty() {
                Err(FieldError::CnicRequired)
            } else if !is_valid_cnic(value) {
                Err(FieldError::InvalidCnic)
            } else {
                Ok(())
            }
        }
        FieldName::Passport => {
            if value.is_empty() && document_type == DocumentType::Passport {
                Err(FieldError::PassportRequired)
            } else {
                Ok(())
            }
        }
        FieldName::CompleteAddress => {
            if value.trim().is_empty() {
                Err(FieldError::AddressRequired)
            } else {
                Ok(())
            }
        }
    }
}

/// Current validation errors, keyed by field. A missing entry means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Record a validation outcome for `field`
    pub fn record(&mut self, field: FieldName, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    pub fn clear(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        self.errors.iter().map(|(k, v)| (*k, *v))
    }
}
