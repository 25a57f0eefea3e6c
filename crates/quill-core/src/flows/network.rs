//! Network application: four steps ending in a motivation statement.

use crate::{
    error::Result,
    rules::Rule,
    steps::{FieldSpec, WizardDefinition},
};

pub const MEMBERSHIP_TYPES: &[&str] = &["individual", "institutional"];

/// Minimum motivation statement length.
pub const MIN_MOTIVATION_LENGTH: usize = 50;

pub fn definition() -> Result<WizardDefinition> {
    WizardDefinition::builder("network-application", "Network Application")
        .step(
            "Personal details",
            "user",
            vec![
                FieldSpec::new("fullName", "Full name")
                    .rule(Rule::min_length(2, "Full name must be at least 2 characters")),
                FieldSpec::new("email", "Email")
                    .rule(Rule::email("Please enter a valid email address")),
                FieldSpec::new("phone", "Phone")
                    .rule(Rule::phone("Phone number must be at least 10 digits")),
                FieldSpec::new("institution", "Institution")
                    .rule(Rule::required("Institution is required")),
            ],
        )
        .step(
            "Academic profile",
            "graduation-cap",
            vec![
                FieldSpec::new("position", "Position").rule(Rule::required("Position is required")),
                FieldSpec::new("fieldOfStudy", "Field of study")
                    .rule(Rule::required("Field of study is required")),
                FieldSpec::new("orcid", "ORCID iD"),
            ],
        )
        .step(
            "Membership",
            "users",
            vec![
                FieldSpec::new("membershipType", "Membership type")
                    .rule(Rule::one_of(MEMBERSHIP_TYPES, "Please select a membership type")),
                FieldSpec::new("institutionSize", "Institution size").rule(Rule::when(
                    "membershipType",
                    "institutional",
                    Rule::required("Institution size is required for institutional membership"),
                )),
            ],
        )
        .step(
            "Motivation",
            "message-square",
            vec![
                FieldSpec::new("motivation", "Motivation").rule(Rule::min_length(
                    MIN_MOTIVATION_LENGTH,
                    "Motivation must be at least 50 characters",
                )),
                FieldSpec::new("agreeTerms", "Terms and conditions")
                    .default_value(false)
                    .rule(Rule::accepted("You must accept the terms and conditions")),
            ],
        )
        .build()
}
