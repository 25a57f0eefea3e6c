//! Advisory request: four steps, with fields that depend on the advisory
//! type picked in step two.

use crate::{
    error::Result,
    rules::Rule,
    steps::{FieldSpec, WizardDefinition},
};

pub const ADVISORY_TYPES: &[&str] = &[
    "journal-development",
    "editorial-strategy",
    "indexing",
    "open-access",
];

pub fn definition() -> Result<WizardDefinition> {
    WizardDefinition::builder("advisory-request", "Advisory Request")
        .step(
            "Contact details",
            "user",
            vec![
                FieldSpec::new("fullName", "Full name")
                    .rule(Rule::min_length(2, "Full name must be at least 2 characters")),
                FieldSpec::new("email", "Email")
                    .rule(Rule::email("Please enter a valid email address")),
                FieldSpec::new("phone", "Phone")
                    .rule(Rule::phone("Phone number must be at least 10 digits")),
                FieldSpec::new("country", "Country").rule(Rule::required("Country is required")),
                FieldSpec::new("organization", "Organization"),
            ],
        )
        .step(
            "Advisory type",
            "compass",
            vec![
                FieldSpec::new("advisoryType", "Advisory type")
                    .rule(Rule::one_of(ADVISORY_TYPES, "Please select an advisory type")),
                FieldSpec::new("journalName", "Journal name").rule(Rule::when(
                    "advisoryType",
                    "journal-development",
                    Rule::required("Journal name is required for journal development advice"),
                )),
                FieldSpec::new("currentIndexing", "Current indexing").rule(Rule::when(
                    "advisoryType",
                    "indexing",
                    Rule::required("Please describe the journal's current indexing"),
                )),
            ],
        )
        .step(
            "Project details",
            "file-text",
            vec![
                FieldSpec::new("projectDescription", "Project description").rule(Rule::min_length(
                    50,
                    "Project description must be at least 50 characters",
                )),
                FieldSpec::new("timeline", "Timeline").rule(Rule::required("Timeline is required")),
                FieldSpec::new("budget", "Budget"),
            ],
        )
        .step(
            "Review & consent",
            "check-circle",
            vec![FieldSpec::new("agreeTerms", "Terms and conditions")
                .default_value(false)
                .rule(Rule::accepted("You must accept the terms and conditions"))],
        )
        .build()
}
