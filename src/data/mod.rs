//! Registration data model
//!
//! The form record, its dependent lookup tables, and the cell that owns it.

mod attachment;
mod country;
mod form;
mod store;

pub use attachment::{AttachmentError, FileAttachment, UploadSlot};
pub use country::{Country, UnknownCountry};
pub use form::{DocumentType, RegistrationForm};
pub use store::FormStore;
