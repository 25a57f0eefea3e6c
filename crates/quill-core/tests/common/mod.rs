#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jiff::Timestamp;
use quill_core::{
    BoardMember, FlowKind, FormValues, ProposalUpdate, Receipt, SinkError, Submission,
    SubmissionSink, Wizard, WizardBuilder,
};

/// Helper function to create a wizard for a built-in flow
pub fn create_wizard(kind: FlowKind) -> Wizard {
    WizardBuilder::for_flow(kind)
        .expect("Failed to load flow")
        .build()
        .expect("Failed to build wizard")
}

/// Text of exactly `len` characters
pub fn text_of_len(len: usize) -> String {
    "a".repeat(len)
}

pub fn advisory_answers() -> FormValues {
    FormValues::new()
        .with("fullName", "Ada Lovelace")
        .with("email", "ada@example.org")
        .with("phone", "+44 20 7946 0958")
        .with("country", "United Kingdom")
        .with("advisoryType", "indexing")
        .with("currentIndexing", "Listed in DOAJ, applying to Scopus")
        .with(
            "projectDescription",
            "We want to move our quarterly journal into the major indexes within two years.",
        )
        .with("timeline", "Six months")
        .with("agreeTerms", true)
}

pub fn network_answers() -> FormValues {
    FormValues::new()
        .with("fullName", "Grace Hopper")
        .with("email", "grace@example.edu")
        .with("phone", "+1 202 555 0147")
        .with("institution", "Yale University")
        .with("position", "Research Fellow")
        .with("fieldOfStudy", "Mathematics")
        .with("membershipType", "individual")
        .with(
            "motivation",
            "I would like to connect with editors working on open access computing journals.",
        )
        .with("agreeTerms", true)
}

pub fn manuscript_answers() -> FormValues {
    FormValues::new()
        .with("authorName", "Ada Lovelace")
        .with("authorEmail", "ada@example.org")
        .with("affiliation", "Analytical Society")
        .with("coAuthors", vec!["Charles Babbage".to_string()])
        .with("title", "Notes on the Analytical Engine")
        .with(
            "abstract",
            "We describe the Analytical Engine and show how it could compute Bernoulli numbers \
             using a sequence of operations prepared on punched cards.",
        )
        .with("keywords", "computing, engines, history")
        .with("journal", "Journal of Computing History")
        .with("articleType", "research")
        .with("manuscriptFile", "notes.pdf")
        .with("conflictOfInterest", "None declared")
        .with("ethicsStatement", "No human participants were involved")
        .with("originalityConfirmed", true)
        .with("agreeTerms", true)
}

pub fn full_board() -> Vec<BoardMember> {
    vec![
        BoardMember {
            name: "Grace Hopper".to_string(),
            title: "Professor".to_string(),
            affiliation: "Yale University".to_string(),
        },
        BoardMember::named("Alan Turing"),
        BoardMember::named("Katherine Johnson"),
    ]
}

/// One update per journal proposal page, in page order
pub fn proposal_pages() -> Vec<ProposalUpdate> {
    vec![
        ProposalUpdate {
            journal_title: Some("Annals of Open Computing".to_string()),
            discipline: Some("Computer Science".to_string()),
            scope: Some(
                "Peer reviewed research on open source computing, its history and its practice."
                    .to_string(),
            ),
            frequency: Some("quarterly".to_string()),
            ..ProposalUpdate::default()
        },
        ProposalUpdate {
            proposer_name: Some("Ada Lovelace".to_string()),
            proposer_email: Some("ada@example.org".to_string()),
            institution: Some("Analytical Society".to_string()),
            ..ProposalUpdate::default()
        },
        ProposalUpdate {
            editor_in_chief: Some("Dr. Ada Lovelace".to_string()),
            board_members: Some(full_board()),
            ..ProposalUpdate::default()
        },
        ProposalUpdate {
            peer_review_model: Some("double-blind".to_string()),
            open_access_policy: Some("CC BY 4.0, no article charges".to_string()),
            ethics_policy: Some("COPE guidelines".to_string()),
            ..ProposalUpdate::default()
        },
        ProposalUpdate {
            platform: Some("ojs".to_string()),
            issn_status: Some("Applied".to_string()),
            ..ProposalUpdate::default()
        },
        ProposalUpdate {
            agree_terms: Some(true),
            ..ProposalUpdate::default()
        },
    ]
}

/// Sink that records every submission it accepts
#[derive(Default)]
pub struct RecordingSink {
    calls: AtomicUsize,
    pub accepted: std::sync::Mutex<Vec<Submission>>,
}

impl RecordingSink {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, SinkError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.accepted
            .lock()
            .expect("Recording sink lock poisoned")
            .push(submission.clone());
        Ok(Receipt {
            reference: format!("recorded-{n}"),
            flow: submission.flow.clone(),
            submitted_at: Timestamp::now(),
        })
    }
}

/// Sink that never answers
pub struct HangingSink;

#[async_trait]
impl SubmissionSink for HangingSink {
    async fn submit(&self, _submission: &Submission) -> Result<Receipt, SinkError> {
        std::future::pending().await
    }
}

/// Sink that always refuses
pub struct RejectingSink;

#[async_trait]
impl SubmissionSink for RejectingSink {
    async fn submit(&self, _submission: &Submission) -> Result<Receipt, SinkError> {
        Err(SinkError::Rejected {
            reason: "service unavailable".to_string(),
        })
    }
}
