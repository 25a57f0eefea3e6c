//! Manuscript submission: the longest flow, seven steps.

use crate::{
    error::Result,
    rules::Rule,
    steps::{FieldSpec, WizardDefinition},
};

pub const ARTICLE_TYPES: &[&str] = &["research", "review", "case-study", "commentary"];

pub fn definition() -> Result<WizardDefinition> {
    WizardDefinition::builder("manuscript-submission", "Manuscript Submission")
        .step(
            "Author information",
            "user",
            vec![
                FieldSpec::new("authorName", "Corresponding author")
                    .rule(Rule::min_length(2, "Author name must be at least 2 characters")),
                FieldSpec::new("authorEmail", "Email")
                    .rule(Rule::email("Please enter a valid email address")),
                FieldSpec::new("affiliation", "Affiliation")
                    .rule(Rule::required("Affiliation is required")),
            ],
        )
        .step(
            "Co-authors",
            "users",
            vec![FieldSpec::new("coAuthors", "Co-authors").default_value(Vec::<String>::new())],
        )
        .step(
            "Manuscript details",
            "file-text",
            vec![
                FieldSpec::new("title", "Title")
                    .rule(Rule::min_length(10, "Title must be at least 10 characters")),
                FieldSpec::new("abstract", "Abstract")
                    .rule(Rule::min_length(100, "Abstract must be at least 100 characters")),
                FieldSpec::new("keywords", "Keywords")
                    .rule(Rule::required("At least one keyword is required")),
            ],
        )
        .step(
            "Journal selection",
            "book-open",
            vec![
                FieldSpec::new("journal", "Journal").rule(Rule::required("Please select a journal")),
                FieldSpec::new("articleType", "Article type")
                    .rule(Rule::one_of(ARTICLE_TYPES, "Please select an article type")),
            ],
        )
        .step(
            "Files",
            "upload",
            vec![
                FieldSpec::new("manuscriptFile", "Manuscript file")
                    .rule(Rule::required("Manuscript file is required")),
                FieldSpec::new("coverLetter", "Cover letter"),
            ],
        )
        .step(
            "Declarations",
            "shield",
            vec![
                FieldSpec::new("conflictOfInterest", "Conflict of interest")
                    .rule(Rule::required("Please declare any conflicts of interest")),
                FieldSpec::new("ethicsStatement", "Ethics statement").rule(Rule::when(
                    "articleType",
                    "research",
                    Rule::required("An ethics statement is required for research articles"),
                )),
                FieldSpec::new("fundingStatement", "Funding statement"),
            ],
        )
        .step(
            "Review & submit",
            "check-circle",
            vec![
                FieldSpec::new("originalityConfirmed", "Originality")
                    .default_value(false)
                    .rule(Rule::accepted("Please confirm the manuscript is original work")),
                FieldSpec::new("agreeTerms", "Terms and conditions")
                    .default_value(false)
                    .rule(Rule::accepted("You must accept the terms and conditions")),
            ],
        )
        .build()
}
