//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{steps::WizardDefinition, wizard::FieldError};

/// Newtype wrapper for listing flows, one line each.
///
/// # Examples
///
/// ```rust
/// use quill_core::{display::FlowList, FlowKind};
///
/// let defs = FlowKind::ALL
///     .iter()
///     .map(|k| k.definition())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// let output = FlowList(defs).to_string();
/// assert!(output.contains("- **manuscript-submission**: Manuscript Submission (7 steps)"));
/// ```
pub struct FlowList(pub Vec<WizardDefinition>);

impl FlowList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WizardDefinition> {
        self.0.iter()
    }
}

impl fmt::Display for FlowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No flows found.");
        }
        writeln!(f, "# Flows")?;
        writeln!(f)?;
        for def in &self.0 {
            writeln!(f, "- **{}**: {} ({} steps)", def.flow, def.title, def.len())?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying validation failures.
///
/// Failures are listed in the order given, each tagged with its step.
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&FieldError> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl Index<usize> for FieldErrors {
    type Output = FieldError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No errors found.");
        }
        writeln!(f, "## Errors")?;
        writeln!(f)?;
        for error in &self.0 {
            writeln!(
                f,
                "- Step {}, **{}** ({}): {}",
                error.step, error.field, error.label, error.message
            )?;
        }
        Ok(())
    }
}
