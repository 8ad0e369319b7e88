//! Wizard controller: step navigation and ownership of the shared record

use std::time::Duration;

use super::notification::{Notification, NotificationSink, SKIP_ICON};
use super::progress::Progress;
use super::steps::{default_steps, validate_steps, WizardError, WizardStep};
use crate::data::{FormStore, RegistrationForm};
use crate::form::IdentityStep;

pub const SKIP_MESSAGE: &str = "Registration skipped for UI review only";
pub const SUBMIT_MESSAGE: &str = "Registration submitted successfully!";

/// How long notifications stay on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub default: Duration,
    pub skip: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            default: Duration::from_millis(2000),
            skip: Duration::from_millis(3000),
        }
    }
}

/// Body of the active step
#[derive(Debug, Clone)]
pub enum StepBody {
    IdentityAddress(IdentityStep),
    /// A step with no business logic yet
    Placeholder { title: String, text: String },
}

impl StepBody {
    /// Fresh body for `step`. Step-local state (such as field errors) does not
    /// survive navigating away and back.
    fn for_step(step: &WizardStep) -> Self {
        if step.id == 1 {
            StepBody::IdentityAddress(IdentityStep::new())
        } else {
            StepBody::Placeholder {
                title: step.name.clone(),
                text: format!("This is step {} - {}", step.id, step.name),
            }
        }
    }
}

pub struct WizardController {
    steps: Vec<WizardStep>,
    /// 1-based, always within `1..=steps.len()`
    current: usize,
    skip_visible: bool,
    store: FormStore,
    body: StepBody,
    timings: NotificationTimings,
}

impl WizardController {
    pub fn new(steps: Vec<WizardStep>, form: RegistrationForm) -> Result<Self, WizardError> {
        validate_steps(&steps)?;
        let body = StepBody::for_step(&steps[0]);
        Ok(Self {
            steps,
            current: 1,
            skip_visible: true,
            store: FormStore::new(form),
            body,
            timings: NotificationTimings::default(),
        })
    }

    /// The four-step registration flow over `form`
    pub fn registration(form: RegistrationForm) -> Self {
        let steps = default_steps();
        let body = StepBody::for_step(&steps[0]);
        Self {
            steps,
            current: 1,
            skip_visible: true,
            store: FormStore::new(form),
            body,
            timings: NotificationTimings::default(),
        }
    }

    pub fn with_timings(mut self, timings: NotificationTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Start with the skip affordance already hidden
    pub fn without_skip(mut self) -> Self {
        self.skip_visible = false;
        self
    }

    // ========== Accessors ==========

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &WizardStep {
        &self.steps[self.current - 1]
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.steps.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.current > 1
    }

    pub fn skip_visible(&self) -> bool {
        self.skip_visible
    }

    pub fn progress(&self) -> Progress<'_> {
        Progress::new(&self.steps, self.current)
    }

    pub fn form(&self) -> &RegistrationForm {
        self.store.get()
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Mutable access to the shared record for hosts that edit it directly
    pub fn form_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    pub fn active_body(&self) -> &StepBody {
        &self.body
    }

    /// The identity step together with the store it writes to, when it is
    /// the active step
    pub fn identity_mut(&mut self) -> Option<(&mut IdentityStep, &mut FormStore)> {
        match &mut self.body {
            StepBody::IdentityAddress(step) => Some((step, &mut self.store)),
            StepBody::Placeholder { .. } => None,
        }
    }

    // ========== Navigation ==========

    /// Move to the next step. No-op on the last step.
    ///
    /// The outgoing step is not validated; invalid input never blocks
    /// navigation.
    pub fn advance(&mut self) -> bool {
        if self.current >= self.steps.len() {
            return false;
        }
        self.go_to(self.current + 1);
        true
    }

    /// Move to the previous step. No-op on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.current <= 1 {
            return false;
        }
        self.go_to(self.current - 1);
        true
    }

    fn go_to(&mut self, step: usize) {
        tracing::debug!(from = self.current, to = step, "Wizard step changed");
        self.current = step;
        self.body = StepBody::for_step(&self.steps[step - 1]);
    }

    /// Advance, or submit when already on the last step
    pub fn proceed(&mut self, sink: &mut dyn NotificationSink) -> bool {
        if self.is_last_step() {
            self.submit(sink)
        } else {
            self.advance()
        }
    }

    /// Hide the skip affordance for the rest of the session.
    ///
    /// Only the first call notifies; the step and the record are untouched.
    pub fn skip(&mut self, sink: &mut dyn NotificationSink) -> bool {
        if !self.skip_visible {
            return false;
        }
        self.skip_visible = false;
        tracing::info!(step = self.current, "Registration skipped");
        sink.notify(Notification::success(SKIP_MESSAGE, self.timings.skip).with_icon(SKIP_ICON));
        true
    }

    /// Submit the registration. Only available on the last step.
    ///
    /// Submission is terminal for the user but not a state: nothing is sent
    /// and the wizard stays on the last step.
    pub fn submit(&mut self, sink: &mut dyn NotificationSink) -> bool {
        if !self.is_last_step() {
            tracing::debug!(step = self.current, "Submit ignored before last step");
            return false;
        }
        let form = self.store.get();
        tracing::info!(
            country = %form.country,
            document_type = %form.document_type,
            "Registration submitted"
        );
        sink.notify(Notification::success(SUBMIT_MESSAGE, self.timings.default));
        true
    }
}
