//! The shared registration record and its transitions
//!
//! Every transition consumes the record and returns a new one. Callers never
//! reach into a field and mutate it in place; see [`super::FormStore`].

use std::fmt;

use super::attachment::{FileAttachment, UploadSlot};
use super::country::Country;

/// Identity document the registrant verifies with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentType {
    #[default]
    Cnic,
    Passport,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Cnic => "CNIC",
            DocumentType::Passport => "Passport",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DocumentType::Cnic => DocumentType::Passport,
            DocumentType::Passport => DocumentType::Cnic,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Data collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub complete_address: String,
    pub country: Country,
    /// Empty, or one of `country.provinces()`
    pub province: String,
    pub document_type: DocumentType,
    /// Formatted as `DDDDD-DDDDDDD-D` while being typed
    pub cnic: String,
    pub passport: String,
    pub cnic_front: Option<FileAttachment>,
    pub cnic_back: Option<FileAttachment>,
    pub passport_photo: Option<FileAttachment>,
}

impl RegistrationForm {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            ..Self::default()
        }
    }

    pub fn with_address(self, complete_address: impl Into<String>) -> Self {
        Self {
            complete_address: complete_address.into(),
            ..self
        }
    }

    /// Selecting a country always clears the province, even when re-selecting
    /// the current country.
    pub fn with_country(self, country: Country) -> Self {
        Self {
            country,
            province: String::new(),
            ..self
        }
    }

    pub fn with_province(self, province: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            ..self
        }
    }

    /// Switch the active document.
    ///
    /// The newly selected document's number starts empty; the departing one
    /// keeps its stored value but is no longer validated. Re-selecting the
    /// current type leaves both numbers alone.
    pub fn with_document_type(self, document_type: DocumentType) -> Self {
        if document_type == self.document_type {
            return self;
        }
        match document_type {
            DocumentType::Cnic => Self {
                document_type,
                cnic: String::new(),
                ..self
            },
            DocumentType::Passport => Self {
                document_type,
                passport: String::new(),
                ..self
            },
        }
    }

    pub fn with_cnic(self, cnic: impl Into<String>) -> Self {
        Self {
            cnic: cnic.into(),
            ..self
        }
    }

    pub fn with_passport(self, passport: impl Into<String>) -> Self {
        Self {
            passport: passport.into(),
            ..self
        }
    }

    pub fn with_attachment(self, slot: UploadSlot, file: FileAttachment) -> Self {
        match slot {
            UploadSlot::CnicFront => Self {
                cnic_front: Some(file),
                ..self
            },
            UploadSlot::CnicBack => Self {
                cnic_back: Some(file),
                ..self
            },
            UploadSlot::PassportPhoto => Self {
                passport_photo: Some(file),
                ..self
            },
        }
    }

    pub fn attachment(&self, slot: UploadSlot) -> Option<&FileAttachment> {
        match slot {
            UploadSlot::CnicFront => self.cnic_front.as_ref(),
            UploadSlot::CnicBack => self.cnic_back.as_ref(),
            UploadSlot::PassportPhoto => self.passport_photo.as_ref(),
        }
    }

    /// Number of the currently active document
    pub fn document_number(&self) -> &str {
        match self.document_type {
            DocumentType::Cnic => &self.cnic,
            DocumentType::Passport => &self.passport,
        }
    }
}
