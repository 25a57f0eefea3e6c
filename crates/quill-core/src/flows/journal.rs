//! Journal proposal: six steps spread over several pages, backed by a
//! [`ProposalSession`](crate::session::ProposalSession).
//!
//! Field names match [`Proposal::to_values`](crate::models::Proposal::to_values).

use crate::{
    error::Result,
    rules::Rule,
    steps::{FieldSpec, WizardDefinition},
};

pub const FREQUENCIES: &[&str] = &["monthly", "quarterly", "biannual", "annual", "continuous"];
pub const PEER_REVIEW_MODELS: &[&str] = &["single-blind", "double-blind", "open"];
pub const PLATFORMS: &[&str] = &["ojs", "hosted", "custom"];

/// Minimum number of named editorial board members.
pub const MIN_BOARD_MEMBERS: usize = 3;

pub fn definition() -> Result<WizardDefinition> {
    WizardDefinition::builder("journal-proposal", "Journal Proposal")
        .step(
            "Journal identity",
            "book",
            vec![
                FieldSpec::new("journalTitle", "Journal title")
                    .rule(Rule::min_length(3, "Journal title must be at least 3 characters")),
                FieldSpec::new("discipline", "Discipline")
                    .rule(Rule::required("Discipline is required")),
                FieldSpec::new("scope", "Aims and scope")
                    .rule(Rule::min_length(50, "Aims and scope must be at least 50 characters")),
                FieldSpec::new("frequency", "Publication frequency")
                    .rule(Rule::one_of(FREQUENCIES, "Please select a publication frequency")),
            ],
        )
        .step(
            "Proposer",
            "user",
            vec![
                FieldSpec::new("proposerName", "Proposer name")
                    .rule(Rule::min_length(2, "Name must be at least 2 characters")),
                FieldSpec::new("proposerEmail", "Proposer email")
                    .rule(Rule::email("Please enter a valid email address")),
                FieldSpec::new("institution", "Institution")
                    .rule(Rule::required("Institution is required")),
            ],
        )
        .step(
            "Governance",
            "users",
            vec![
                FieldSpec::new("editorInChief", "Editor-in-chief")
                    .rule(Rule::required("Editor-in-chief is required")),
                FieldSpec::new("boardMembers", "Editorial board").rule(Rule::min_filled(
                    MIN_BOARD_MEMBERS,
                    "At least 3 editorial board members are required",
                )),
            ],
        )
        .step(
            "Editorial policies",
            "shield",
            vec![
                FieldSpec::new("peerReviewModel", "Peer review model")
                    .rule(Rule::one_of(PEER_REVIEW_MODELS, "Please select a peer review model")),
                FieldSpec::new("openAccessPolicy", "Open access policy")
                    .rule(Rule::required("Open access policy is required")),
                FieldSpec::new("ethicsPolicy", "Publication ethics policy")
                    .rule(Rule::required("Publication ethics policy is required")),
            ],
        )
        .step(
            "Technical setup",
            "server",
            vec![
                FieldSpec::new("platform", "Publishing platform")
                    .rule(Rule::one_of(PLATFORMS, "Please select a publishing platform")),
                FieldSpec::new("customDomain", "Custom domain").rule(Rule::when(
                    "platform",
                    "custom",
                    Rule::required("A domain is required for a custom platform"),
                )),
                FieldSpec::new("issnStatus", "ISSN status")
                    .rule(Rule::required("ISSN status is required")),
            ],
        )
        .step(
            "Review",
            "check-circle",
            vec![FieldSpec::new("agreeTerms", "Terms and conditions")
                .default_value(false)
                .rule(Rule::accepted("You must accept the terms and conditions"))],
        )
        .build()
}
