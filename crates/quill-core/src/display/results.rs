//! Display for navigation and submission outcomes.

use std::fmt;

use crate::wizard::{StepChange, SubmitOutcome};

impl fmt::Display for StepChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepChange::Moved { from, to } => writeln!(f, "Moved from step {from} to step {to}"),
            StepChange::Stayed => writeln!(f, "Stayed on the current step"),
            StepChange::Blocked { errors } => {
                writeln!(f, "Blocked: {errors} field(s) need attention")
            }
            StepChange::Refused { unpassed } => {
                writeln!(f, "Refused: step {unpassed} has not been completed")
            }
            StepChange::Locked => writeln!(f, "Already submitted, nothing to change"),
        }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::NotReady {
                current_step,
                total,
            } => writeln!(
                f,
                "Not ready to submit: on step {current_step} of {total}"
            ),
            SubmitOutcome::Invalid { errors, first_step } => writeln!(
                f,
                "Not submitted: {errors} field(s) need attention, starting at step {first_step}"
            ),
            SubmitOutcome::Submitted(receipt) => {
                writeln!(f, "# Submitted")?;
                writeln!(f)?;
                write!(f, "{receipt}")
            }
            SubmitOutcome::Failed { reason } => {
                writeln!(f, "Submission failed: {reason}")?;
                writeln!(f)?;
                writeln!(f, "Your answers have been kept. Please try again.")
            }
            SubmitOutcome::AlreadySubmitted => writeln!(f, "Already submitted"),
        }
    }
}
