//! Status enumerations for wizards and their steps.

use serde::{Deserialize, Serialize};

/// Lifecycle of a wizard instance.
///
/// ```text
/// Editing ──submit──▶ Submitting ──ok──▶ Submitted
///    ▲                    │
///    │ edit               └──err/timeout──▶ SubmissionFailed ──submit──▶ Submitting
///    └───────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WizardStatus {
    /// Fields are being filled in; the current step is on the form state
    #[default]
    Editing,

    /// The sink call is in flight
    Submitting,

    /// The sink accepted the submission; no further edits apply
    Submitted,

    /// The sink rejected or timed out; the data is intact and the user may
    /// retry
    SubmissionFailed { reason: String },
}

impl WizardStatus {
    /// Convert to a stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStatus::Editing => "editing",
            WizardStatus::Submitting => "submitting",
            WizardStatus::Submitted => "submitted",
            WizardStatus::SubmissionFailed { .. } => "submission_failed",
        }
    }

    /// Whether the wizard has reached its terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStatus::Submitted)
    }
}

/// Where a step stands relative to the wizard's progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// Step has passed validation at least once
    Passed,

    /// Step is the one being edited
    Current,

    /// Step has not been validated yet
    Pending,
}

impl StepState {
    /// Get state with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quill_core::models::StepState;
    ///
    /// assert_eq!(StepState::Passed.with_icon(), "✓ Passed");
    /// assert_eq!(StepState::Current.with_icon(), "➤ Current");
    /// assert_eq!(StepState::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepState::Passed => "✓ Passed",
            StepState::Current => "➤ Current",
            StepState::Pending => "○ Pending",
        }
    }
}
