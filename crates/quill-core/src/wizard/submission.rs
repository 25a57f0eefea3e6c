//! Final submission for the Wizard.

use log::{info, warn};
use tokio::time;

use super::Wizard;
use crate::{
    models::{Receipt, Submission, WizardStatus},
    sink::SubmissionSink,
};

/// Result of a `submit` call. Failures are data, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Not on the last step; the sink was not called
    NotReady { current_step: usize, total: usize },
    /// Some step no longer validates; its errors are recorded
    Invalid { errors: usize, first_step: usize },
    /// The sink accepted the payload; the wizard is now terminal
    Submitted(Receipt),
    /// The sink failed or timed out; the data is kept and `submit` may be
    /// called again
    Failed { reason: String },
    /// Already submitted earlier; the sink was not called again
    AlreadySubmitted,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

impl Wizard {
    /// Re-validate every step and hand the payload to `sink`.
    ///
    /// Only allowed on the last step. All steps are checked again, since
    /// earlier answers may have changed after their step was passed. The
    /// sink call is bounded by the wizard's submit timeout; a timeout counts
    /// as a failed submission.
    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> SubmitOutcome {
        if self.is_submitted() {
            return SubmitOutcome::AlreadySubmitted;
        }

        let total = self.total_steps();
        if self.state.current_step != total {
            return SubmitOutcome::NotReady {
                current_step: self.state.current_step,
                total,
            };
        }

        let failures = self.validate_all();
        if let Some(first) = failures.first() {
            let first_step = first.step;
            self.state.errors.clear();
            self.record_errors(&failures);
            self.state.status = WizardStatus::Editing;
            warn!(
                "{} submission blocked by {} field(s), first on step {first_step}",
                self.definition.flow,
                failures.len()
            );
            return SubmitOutcome::Invalid {
                errors: failures.len(),
                first_step,
            };
        }

        self.state.errors.clear();
        self.state.passed.iter_mut().for_each(|p| *p = true);
        self.state.status = WizardStatus::Submitting;

        let submission = Submission {
            flow: self.definition.flow.clone(),
            title: self.definition.title.clone(),
            values: self.state.values.clone(),
        };

        let reason = match time::timeout(self.submit_timeout, sink.submit(&submission)).await {
            Ok(Ok(receipt)) => {
                info!(
                    "{} submitted, reference {}",
                    self.definition.flow, receipt.reference
                );
                self.state.status = WizardStatus::Submitted;
                return SubmitOutcome::Submitted(receipt);
            }
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!(
                "Submission timed out after {}s",
                self.submit_timeout.as_secs_f64()
            ),
        };

        warn!("{} submission failed: {reason}", self.definition.flow);
        self.state.status = WizardStatus::SubmissionFailed {
            reason: reason.clone(),
        };
        SubmitOutcome::Failed { reason }
    }
}
