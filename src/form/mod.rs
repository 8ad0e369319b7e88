//! Identity & Address step logic: CNIC formatting, field rules, and the step
//! form state that writes through to the shared record.

pub mod cnic;
mod identity;
mod text_cursor;
mod validation;

pub use cnic::{format_cnic, is_valid_cnic, CNIC_FORMATTED_LEN, CNIC_PLACEHOLDER};
pub use identity::{Focus, IdentityStep, StepRequest};
pub use text_cursor::TextCursor;
pub use validation::{validate_field, FieldError, FieldErrors, FieldName};
