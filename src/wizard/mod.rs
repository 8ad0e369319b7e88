//! The wizard: step list, navigation state machine, progress model, and the
//! notifications it emits.

mod controller;
mod notification;
mod progress;
mod steps;

pub use controller::{
    NotificationTimings, StepBody, WizardController, SKIP_MESSAGE, SUBMIT_MESSAGE,
};
pub use notification::{Notification, NotificationSink, Severity, SKIP_ICON, SUCCESS_ICON};
pub use progress::{Progress, StepStatus, COMPLETED_MARKER};
pub use steps::{default_steps, validate_steps, WizardError, WizardStep};
