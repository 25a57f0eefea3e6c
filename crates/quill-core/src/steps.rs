//! Step definition tables.
//!
//! A [`WizardDefinition`] is static configuration: an ordered list of steps,
//! each owning the fields it validates before the wizard may move past it.
//! Definitions are checked once at build time and never change afterwards.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    error::{Result, WizardError},
    models::{FieldValue, FormValues},
    rules::Rule,
};

/// One field owned by a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Key in the form value map
    pub name: String,

    /// Human label
    pub label: String,

    /// Value the field starts with, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,

    /// Rules checked in order; empty means optional
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    /// Create an optional field with no default.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default: None,
            rules: Vec::new(),
        }
    }

    /// Append a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the initial value.
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether any rule may block advancement.
    pub fn is_required(&self) -> bool {
        !self.rules.is_empty()
    }
}

/// One step of a wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDefinition {
    /// 1-based position within the wizard
    pub position: usize,

    /// Human label
    pub label: String,

    /// Icon identifier used by front-ends
    pub icon: String,

    /// Fields this step owns
    pub fields: Vec<FieldSpec>,
}

impl StepDefinition {
    /// Look up a field owned by this step.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The ordered step table of one flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardDefinition {
    /// Stable flow identifier
    pub flow: String,

    /// Human title
    pub title: String,

    steps: Vec<StepDefinition>,
}

impl WizardDefinition {
    /// Start building a definition.
    pub fn builder(flow: impl Into<String>, title: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder {
            flow: flow.into(),
            title: title.into(),
            steps: Vec::new(),
        }
    }

    /// Number of steps, always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: building rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Step at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepOutOfRange` if `position` is not in
    /// `1..=len()`.
    pub fn step(&self, position: usize) -> Result<&StepDefinition> {
        position
            .checked_sub(1)
            .and_then(|i| self.steps.get(i))
            .ok_or(WizardError::StepOutOfRange {
                step: position,
                total: self.steps.len(),
            })
    }

    /// Find the step owning a field, with the field's spec.
    pub fn owner_of(&self, name: &str) -> Option<(&StepDefinition, &FieldSpec)> {
        self.steps
            .iter()
            .find_map(|step| step.field(name).map(|field| (step, field)))
    }

    /// Every field across all steps, in step order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    /// Initial value map built from the field defaults.
    pub fn default_values(&self) -> FormValues {
        self.fields()
            .filter_map(|f| f.default.clone().map(|v| (f.name.clone(), v)))
            .collect()
    }
}

/// Builder for [`WizardDefinition`].
#[derive(Debug, Clone)]
pub struct DefinitionBuilder {
    flow: String,
    title: String,
    steps: Vec<StepDefinition>,
}

impl DefinitionBuilder {
    /// Append a step. Positions are assigned in call order starting at 1.
    pub fn step(
        mut self,
        label: impl Into<String>,
        icon: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        let position = self.steps.len() + 1;
        self.steps.push(StepDefinition {
            position,
            label: label.into(),
            icon: icon.into(),
            fields,
        });
        self
    }

    /// Check the table and freeze it.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MalformedDefinition` if the table has no steps,
    /// a step has a blank label, a field has a blank name, or two fields
    /// share a name.
    pub fn build(self) -> Result<WizardDefinition> {
        if self.flow.trim().is_empty() {
            return Err(WizardError::malformed(&self.flow).with_reason("flow id is blank"));
        }
        if self.steps.is_empty() {
            return Err(WizardError::malformed(&self.flow).with_reason("no steps defined"));
        }

        let mut seen = BTreeSet::new();
        for step in &self.steps {
            if step.label.trim().is_empty() {
                return Err(WizardError::malformed(&self.flow)
                    .with_reason(format!("step {} has no label", step.position)));
            }
            for field in &step.fields {
                if field.name.trim().is_empty() {
                    return Err(WizardError::malformed(&self.flow).with_reason(format!(
                        "step {} has a field with a blank name",
                        step.position
                    )));
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(WizardError::malformed(&self.flow)
                        .with_reason(format!("field '{}' is owned by two steps", field.name)));
                }
            }
        }

        Ok(WizardDefinition {
            flow: self.flow,
            title: self.title,
            steps: self.steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step() -> WizardDefinition {
        WizardDefinition::builder("demo", "Demo")
            .step(
                "First",
                "one",
                vec![FieldSpec::new("a", "A").rule(Rule::required("A is required"))],
            )
            .step(
                "Second",
                "two",
                vec![FieldSpec::new("b", "B").default_value(false)],
            )
            .build()
            .expect("Failed to build definition")
    }

    #[test]
    fn test_positions_are_one_based() {
        let def = two_step();
        assert_eq!(def.len(), 2);
        assert_eq!(def.step(1).unwrap().label, "First");
        assert_eq!(def.step(2).unwrap().position, 2);
    }

    #[test]
    fn test_step_out_of_range() {
        let def = two_step();
        assert!(matches!(
            def.step(0),
            Err(WizardError::StepOutOfRange { step: 0, total: 2 })
        ));
        assert!(matches!(
            def.step(3),
            Err(WizardError::StepOutOfRange { step: 3, total: 2 })
        ));
    }

    #[test]
    fn test_owner_of() {
        let def = two_step();
        let (step, field) = def.owner_of("b").expect("b should be owned");
        assert_eq!(step.position, 2);
        assert!(!field.is_required());
        assert!(def.owner_of("missing").is_none());
    }

    #[test]
    fn test_default_values() {
        let values = two_step().default_values();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("b"), Some(&FieldValue::Flag(false)));
    }

    #[test]
    fn test_empty_definition_rejected() {
        let err = WizardDefinition::builder("empty", "Empty").build().unwrap_err();
        assert!(matches!(err, WizardError::MalformedDefinition { .. }));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = WizardDefinition::builder("dup", "Dup")
            .step("One", "x", vec![FieldSpec::new("email", "Email")])
            .step("Two", "y", vec![FieldSpec::new("email", "Email again")])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("'email' is owned by two steps"));
    }

    #[test]
    fn test_blank_label_rejected() {
        let err = WizardDefinition::builder("blank", "Blank")
            .step("  ", "x", vec![])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("step 1 has no label"));
    }
}
