//! Progress indicator model: a pure function of the step list and current step

use super::steps::WizardStep;

/// Glyph shown in place of a completed step's ordinal
pub const COMPLETED_MARKER: &str = "✓";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

/// Visual state of the wizard's progress
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    steps: &'a [WizardStep],
    current: usize,
}

impl<'a> Progress<'a> {
    pub fn new(steps: &'a [WizardStep], current: usize) -> Self {
        Self { steps, current }
    }

    pub fn steps(&self) -> &'a [WizardStep] {
        self.steps
    }

    /// Completed share of the bar, in `[0.0, 1.0]`.
    ///
    /// A single-step wizard is always on its last step, so it reads as full.
    pub fn fill_ratio(&self) -> f64 {
        let len = self.steps.len();
        if len <= 1 {
            return 1.0;
        }
        let done = self.current.clamp(1, len) - 1;
        done as f64 / (len - 1) as f64
    }

    /// [`Self::fill_ratio`] as a rounded percentage
    pub fn fill_percent(&self) -> u16 {
        (self.fill_ratio() * 100.0).round() as u16
    }

    /// Status of the step at 1-based `index`
    pub fn status(&self, index: usize) -> StepStatus {
        if index < self.current {
            StepStatus::Completed
        } else if index == self.current {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// Marker for the step at 1-based `index`: a check for completed steps,
    /// otherwise its ordinal
    pub fn marker(&self, index: usize) -> String {
        match self.status(index) {
            StepStatus::Completed => COMPLETED_MARKER.to_string(),
            _ => index.to_string(),
        }
    }

    /// `(index, step, status)` for every step, in order
    pub fn entries(&self) -> impl Iterator<Item = (usize, &'a WizardStep, StepStatus)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(move |(i, step)| (i + 1, step, self.status(i + 1)))
    }
}
