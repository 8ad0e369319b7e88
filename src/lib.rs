pub mod cli;
pub mod config;
pub mod data;
pub mod form;
pub mod ui;
pub mod util;
pub mod wizard;

pub use config::Config;
pub use data::{Country, DocumentType, FileAttachment, FormStore, RegistrationForm, UploadSlot};
pub use form::{format_cnic, is_valid_cnic, FieldError, IdentityStep};
pub use ui::App;
pub use wizard::{Notification, NotificationSink, WizardController, WizardStep};
