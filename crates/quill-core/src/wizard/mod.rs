//! The wizard controller.
//!
//! A [`Wizard`] owns the form state of one flow instance and is the only
//! thing allowed to move between steps. It validates the current step
//! before moving forward, never validates when moving back, and hands the
//! final payload to an injected [`SubmissionSink`](crate::sink::SubmissionSink).
//!
//! ```text
//! editing(k) ──advance(valid)──▶ editing(k+1)
//! editing(k) ──advance(invalid)─▶ editing(k) + errors
//! editing(N) ──submit()────────▶ submitting ──ok──▶ submitted
//!                                    └──err──▶ submission_failed ──submit()──▶ submitting
//! ```
//!
//! # Submodules
//!
//! - [`builder`]: configuration (definition, timeout, initial values)
//! - [`navigation`]: `advance`, `retreat`, `jump_to`
//! - [`submission`]: `submit`
//!
//! # Example
//!
//! ```rust
//! use quill_core::{FlowKind, StepChange, WizardBuilder};
//!
//! # fn example() -> quill_core::Result<()> {
//! let mut wizard = WizardBuilder::for_flow(FlowKind::NetworkApplication)?.build()?;
//!
//! // Nothing filled in yet: every required field of step 1 is reported.
//! assert!(matches!(wizard.advance(), StepChange::Blocked { errors: 4 }));
//! assert_eq!(wizard.current_step(), 1);
//! # Ok(())
//! # }
//! ```

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use log::debug;

use crate::{
    error::{Result, WizardError},
    models::{FieldValue, FormValues, StepState, WizardStatus},
    rules::validate_field,
    steps::{FieldSpec, StepDefinition, WizardDefinition},
};

pub mod builder;
pub mod navigation;
pub mod submission;


pub use builder::{WizardBuilder, DEFAULT_SUBMIT_TIMEOUT};
pub use navigation::StepChange;
pub use submission::SubmitOutcome;

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Step owning the field
    pub step: usize,
    /// Field name
    pub field: String,
    /// Human label of the field
    pub label: String,
    /// Rule message
    pub message: String,
}

/// Everything that changes while a wizard is being filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: FormValues,
    current_step: usize,
    errors: BTreeMap<String, String>,
    passed: Vec<bool>,
    status: WizardStatus,
}

impl FormState {
    fn new(definition: &WizardDefinition) -> Self {
        Self {
            values: definition.default_values(),
            current_step: 1,
            errors: BTreeMap::new(),
            passed: vec![false; definition.len()],
            status: WizardStatus::Editing,
        }
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current 1-based step, always within `1..=N`.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Field name to message, for every field currently failing.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Lifecycle status.
    pub fn status(&self) -> &WizardStatus {
        &self.status
    }

    /// Whether `step` has passed validation at least once.
    pub fn has_passed(&self, step: usize) -> bool {
        step.checked_sub(1)
            .and_then(|i| self.passed.get(i))
            .copied()
            .unwrap_or(false)
    }
}

/// Controller for one instance of a multi-step form.
#[derive(Debug, Clone)]
pub struct Wizard {
    definition: Arc<WizardDefinition>,
    state: FormState,
    submit_timeout: Duration,
}

impl Wizard {
    pub(crate) fn new(definition: Arc<WizardDefinition>, submit_timeout: Duration) -> Self {
        let state = FormState::new(&definition);
        Self {
            definition,
            state,
            submit_timeout,
        }
    }

    /// The step table this wizard runs.
    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    /// Read-only view of the form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.definition.len()
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.state.errors
    }

    pub fn status(&self) -> &WizardStatus {
        &self.state.status
    }

    /// Whether the submission has been accepted. Terminal.
    pub fn is_submitted(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Timeout applied to each sink call.
    pub fn submit_timeout(&self) -> Duration {
        self.submit_timeout
    }

    /// Definition of the step currently being edited.
    pub fn current_definition(&self) -> &StepDefinition {
        &self.definition.steps()[self.state.current_step - 1]
    }

    /// State of every step, in order.
    pub fn step_states(&self) -> Vec<StepState> {
        (1..=self.total_steps())
            .map(|position| {
                if position == self.state.current_step && !self.is_submitted() {
                    StepState::Current
                } else if self.state.has_passed(position) {
                    StepState::Passed
                } else {
                    StepState::Pending
                }
            })
            .collect()
    }

    /// Set one field.
    ///
    /// Fields that currently carry an error are re-checked, so an error
    /// disappears as soon as its field passes. Editing after a failed or
    /// abandoned submission puts the wizard back into `Editing`. Ignored
    /// once the wizard is submitted.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::UnknownField` if no step owns `name` and
    /// `WizardError::InvalidInput` if the field has a default of a different
    /// shape (text for a checkbox, say).
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        if self.is_submitted() {
            debug!("Ignoring edit of '{name}' on submitted {}", self.definition.flow);
            return Ok(());
        }
        let value = value.into();
        self.ensure_accepts(name, &value)?;

        self.state.values.insert(name, value);
        self.recheck_errors();
        self.resume_editing();
        Ok(())
    }

    /// Set many fields at once. Nothing is applied if any value is refused.
    ///
    /// # Errors
    ///
    /// Same as [`Wizard::set_field`], for the first refused value.
    pub fn set_values(&mut self, values: FormValues) -> Result<()> {
        for (name, value) in values.iter() {
            self.ensure_accepts(name, value)?;
        }
        for (name, value) in values {
            self.set_field(&name, value)?;
        }
        Ok(())
    }

    /// Unset a field, e.g. when a conditional field no longer applies.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::UnknownField` if no step owns `name`.
    pub fn clear_field(&mut self, name: &str) -> Result<()> {
        if self.is_submitted() {
            return Ok(());
        }
        self.ensure_known(name)?;
        self.state.values.remove(name);
        self.recheck_errors();
        self.resume_editing();
        Ok(())
    }

    /// Validate one step without touching the form state.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepOutOfRange` for an invalid position.
    pub fn validate_step(&self, position: usize) -> Result<Vec<FieldError>> {
        let step = self.definition.step(position)?;
        Ok(self.step_failures(step))
    }

    /// Validate every step without touching the form state.
    pub fn validate_all(&self) -> Vec<FieldError> {
        self.definition
            .steps()
            .iter()
            .flat_map(|step| self.step_failures(step))
            .collect()
    }

    /// Throw away all input and start again from step 1.
    pub fn reset(&mut self) {
        debug!("Resetting {}", self.definition.flow);
        self.state = FormState::new(&self.definition);
    }

    fn ensure_known(&self, name: &str) -> Result<&FieldSpec> {
        self.definition
            .owner_of(name)
            .map(|(_, field)| field)
            .ok_or_else(|| WizardError::UnknownField {
                flow: self.definition.flow.clone(),
                name: name.to_string(),
            })
    }

    fn ensure_accepts(&self, name: &str, value: &FieldValue) -> Result<()> {
        let field = self.ensure_known(name)?;
        match &field.default {
            Some(default) if std::mem::discriminant(default) != std::mem::discriminant(value) => {
                Err(WizardError::invalid_input(name)
                    .with_reason(format!("expected {}, got {}", default.kind(), value.kind())))
            }
            _ => Ok(()),
        }
    }

    fn step_failures(&self, step: &StepDefinition) -> Vec<FieldError> {
        step.fields
            .iter()
            .filter_map(|field| {
                validate_field(field, &self.state.values)
                    .message()
                    .map(|message| FieldError {
                        step: step.position,
                        field: field.name.clone(),
                        label: field.label.clone(),
                        message: message.to_string(),
                    })
            })
            .collect()
    }

    /// Replace the errors of `step`'s fields with `failures`.
    fn record_step_errors(&mut self, step: usize, failures: &[FieldError]) {
        let owned: Vec<String> = self.definition.steps()[step - 1]
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect();
        self.state.errors.retain(|name, _| !owned.contains(name));
        self.record_errors(failures);
    }

    fn record_errors(&mut self, failures: &[FieldError]) {
        for failure in failures {
            self.state
                .errors
                .insert(failure.field.clone(), failure.message.clone());
        }
    }

    /// An edit needs `&mut self`, so no submission can be in flight. A
    /// `Submitting` status here means the submit future was dropped.
    fn resume_editing(&mut self) {
        if matches!(
            self.state.status,
            WizardStatus::Submitting | WizardStatus::SubmissionFailed { .. }
        ) {
            self.state.status = WizardStatus::Editing;
        }
    }

    fn recheck_errors(&mut self) {
        let flagged: Vec<String> = self.state.errors.keys().cloned().collect();
        for name in flagged {
            let Some((_, spec)) = self.definition.owner_of(&name) else {
                continue;
            };
            match validate_field(spec, &self.state.values).message() {
                None => {
                    self.state.errors.remove(&name);
                }
                Some(message) => {
                    self.state.errors.insert(name, message.to_string());
                }
            }
        }
    }
}
