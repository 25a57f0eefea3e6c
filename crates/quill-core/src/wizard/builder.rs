//! Builder for creating and configuring Wizard instances.

use std::{sync::Arc, time::Duration};

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    flows::FlowKind,
    models::FormValues,
    steps::WizardDefinition,
};

/// Default bound on a single sink call.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating and configuring Wizard instances.
#[derive(Debug, Clone)]
pub struct WizardBuilder {
    definition: Arc<WizardDefinition>,
    submit_timeout: Duration,
    initial_values: Option<FormValues>,
}

impl WizardBuilder {
    /// Creates a new builder for the given step table.
    pub fn new(definition: impl Into<Arc<WizardDefinition>>) -> Self {
        Self {
            definition: definition.into(),
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            initial_values: None,
        }
    }

    /// Creates a builder for one of the built-in flows.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MalformedDefinition` if the flow's table does
    /// not build.
    pub fn for_flow(kind: FlowKind) -> Result<Self> {
        Ok(Self::new(kind.definition()?))
    }

    /// Sets how long `submit` waits for the sink before giving up.
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// Pre-fills fields, e.g. from an answer file. Defaults still apply to
    /// fields not listed.
    pub fn with_values(mut self, values: FormValues) -> Self {
        self.initial_values = Some(values);
        self
    }

    /// Builds the configured wizard.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` for a zero timeout and
    /// `WizardError::UnknownField` if an initial value names a field no step
    /// owns.
    pub fn build(self) -> Result<Wizard> {
        if self.submit_timeout.is_zero() {
            return Err(WizardError::Configuration {
                message: "submit timeout must be greater than zero".to_string(),
            });
        }

        let mut wizard = Wizard::new(self.definition, self.submit_timeout);
        if let Some(values) = self.initial_values {
            wizard.set_values(values)?;
        }
        Ok(wizard)
    }
}
