//! Display implementations for domain models.
//!
//! All output is markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Receipt, StepState, WizardStatus},
    steps::{FieldSpec, StepDefinition, WizardDefinition},
};

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStatus::SubmissionFailed { reason } => {
                write!(f, "{} ({reason})", self.as_str())
            }
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_icon())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Reference: {}", self.reference)?;
        writeln!(f, "- Flow: {}", self.flow)?;
        writeln!(f, "- Submitted: {}", LocalDateTime(&self.submitted_at))
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** ({})", self.name, self.label)?;
        if self.rules.is_empty() {
            return writeln!(f, ": optional");
        }
        let rules: Vec<String> = self.rules.iter().map(|r| r.describe()).collect();
        writeln!(f, ": {}", rules.join("; "))
    }
}

impl fmt::Display for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.position, self.label)?;
        writeln!(f)?;
        if self.fields.is_empty() {
            writeln!(f, "No fields.")?;
        }
        for field in &self.fields {
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WizardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.flow)?;
        writeln!(f)?;
        writeln!(f, "{} steps", self.len())?;

        for step in self.steps() {
            writeln!(f)?;
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
