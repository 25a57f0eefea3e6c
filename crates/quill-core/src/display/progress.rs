//! Progress view of a live wizard.

use std::fmt;

use crate::wizard::Wizard;

/// Renders where a wizard stands: current step, every step's state, and
/// the errors currently recorded.
pub struct Progress<'a>(pub &'a Wizard);

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wizard = self.0;
        let definition = wizard.definition();

        writeln!(f, "# {}", definition.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "Step {} of {}: {}",
            wizard.current_step(),
            wizard.total_steps(),
            wizard.current_definition().label
        )?;
        writeln!(f, "- Status: {}", wizard.status())?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (step, state) in definition.steps().iter().zip(wizard.step_states()) {
            writeln!(f, "{}. {} ({})", step.position, step.label, state)?;
        }

        if !wizard.errors().is_empty() {
            writeln!(f, "\n## Errors")?;
            writeln!(f)?;
            for (name, message) in wizard.errors() {
                writeln!(f, "- **{name}**: {message}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flows::FlowKind, wizard::WizardBuilder};

    #[test]
    fn test_progress_lists_steps_and_errors() {
        let mut wizard = WizardBuilder::for_flow(FlowKind::AdvisoryRequest)
            .unwrap()
            .build()
            .unwrap();
        wizard.set_field("fullName", "Jo").unwrap();
        wizard.set_field("email", "bad").unwrap();
        wizard.advance();

        let output = Progress(&wizard).to_string();
        assert!(output.contains("Step 1 of 4: Contact details"));
        assert!(output.contains("- Status: editing"));
        assert!(output.contains("1. Contact details (➤ Current)"));
        assert!(output.contains("4. Review & consent (○ Pending)"));
        assert!(output.contains("- **email**: Please enter a valid email address"));
        assert!(!output.contains("**fullName**"));
    }

    #[test]
    fn test_progress_without_errors_has_no_error_section() {
        let wizard = WizardBuilder::for_flow(FlowKind::NetworkApplication)
            .unwrap()
            .build()
            .unwrap();
        let output = Progress(&wizard).to_string();
        assert!(!output.contains("## Errors"));
    }
}
