//! Wizard step definitions

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("A wizard needs at least one step")]
    NoSteps,
    #[error("Step ids must run 1..=n in order; position {position} has id {id}")]
    NonSequentialId { position: usize, id: usize },
}

/// One screen of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStep {
    /// 1-based ordinal, unique and sequential
    pub id: usize,
    pub name: String,
}

impl WizardStep {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The registration flow's four steps
pub fn default_steps() -> Vec<WizardStep> {
    vec![
        WizardStep::new(1, "Identity & Address"),
        WizardStep::new(2, "Personal Details"),
        WizardStep::new(3, "Verification"),
        WizardStep::new(4, "Confirmation"),
    ]
}

/// Check that a step list is non-empty and numbered `1..=n`
pub fn validate_steps(steps: &[WizardStep]) -> Result<(), WizardError> {
    if steps.is_empty() {
        return Err(WizardError::NoSteps);
    }
    for (i, step) in steps.iter().enumerate() {
        if step.id != i + 1 {
            return Err(WizardError::NonSequentialId {
                position: i + 1,
                id: step.id,
            });
        }
    }
    Ok(())
}
