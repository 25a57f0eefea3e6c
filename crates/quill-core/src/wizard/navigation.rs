//! Step navigation for the Wizard.

use log::debug;
use serde::Serialize;

use super::Wizard;
use crate::error::{Result, WizardError};

/// What a navigation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum StepChange {
    /// The current step changed
    Moved { from: usize, to: usize },
    /// Nothing to do: already at the boundary or already there
    Stayed,
    /// The current step has failing fields; they are in the errors map
    Blocked { errors: usize },
    /// A jump skipped a step that has not passed validation yet
    Refused { unpassed: usize },
    /// The wizard is submitted and no longer navigates
    Locked,
}

impl StepChange {
    /// Whether the call moved to a different step.
    pub fn moved(&self) -> bool {
        matches!(self, StepChange::Moved { .. })
    }
}

impl Wizard {
    /// Validate the current step and move forward one step.
    ///
    /// Only the current step's fields are checked. On failure every failing
    /// field is recorded, not just the first, and the step does not change.
    /// On the last step a successful check marks it passed and stays put.
    pub fn advance(&mut self) -> StepChange {
        if self.is_submitted() {
            return StepChange::Locked;
        }

        let from = self.state.current_step;
        let failures = self.step_failures(self.current_definition());
        self.record_step_errors(from, &failures);

        if !failures.is_empty() {
            debug!(
                "{} step {from} blocked by {} field(s)",
                self.definition.flow,
                failures.len()
            );
            return StepChange::Blocked {
                errors: failures.len(),
            };
        }

        self.state.passed[from - 1] = true;
        if from == self.total_steps() {
            return StepChange::Stayed;
        }

        self.state.current_step = from + 1;
        debug!("{} step {from} -> {}", self.definition.flow, from + 1);
        StepChange::Moved { from, to: from + 1 }
    }

    /// Move back one step. Never validates.
    pub fn retreat(&mut self) -> StepChange {
        if self.is_submitted() {
            return StepChange::Locked;
        }

        let from = self.state.current_step;
        if from == 1 {
            return StepChange::Stayed;
        }

        self.state.current_step = from - 1;
        debug!("{} step {from} -> {}", self.definition.flow, from - 1);
        StepChange::Moved { from, to: from - 1 }
    }

    /// Jump directly to `target`, as a step badge would.
    ///
    /// Every step before `target` must have passed validation earlier;
    /// otherwise the wizard stays where it is.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepOutOfRange` if `target` is not a step of
    /// this wizard.
    pub fn jump_to(&mut self, target: usize) -> Result<StepChange> {
        if target == 0 || target > self.total_steps() {
            return Err(WizardError::StepOutOfRange {
                step: target,
                total: self.total_steps(),
            });
        }
        if self.is_submitted() {
            return Ok(StepChange::Locked);
        }

        let from = self.state.current_step;
        if target == from {
            return Ok(StepChange::Stayed);
        }

        if let Some(unpassed) = (1..target).find(|&step| !self.state.has_passed(step)) {
            debug!(
                "{} jump to {target} refused, step {unpassed} not passed",
                self.definition.flow
            );
            return Ok(StepChange::Refused { unpassed });
        }

        self.state.current_step = target;
        debug!("{} step {from} -> {target} (jump)", self.definition.flow);
        Ok(StepChange::Moved { from, to: target })
    }

    /// Advance repeatedly until a step blocks or the last step is reached.
    ///
    /// The last step itself is not validated here; `submit` does that.
    pub fn advance_through(&mut self) -> StepChange {
        if self.is_submitted() {
            return StepChange::Locked;
        }

        let from = self.state.current_step;
        while self.state.current_step < self.total_steps() {
            let change = self.advance();
            if !change.moved() {
                return change;
            }
        }

        if self.state.current_step == from {
            StepChange::Stayed
        } else {
            StepChange::Moved {
                from,
                to: self.state.current_step,
            }
        }
    }
}
