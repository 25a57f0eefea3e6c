//! Core library for Quill, multi-step submission wizards.
//!
//! A wizard is an ordered list of steps. Each step owns a few fields and
//! checks them before the user may move on; the last step hands the whole
//! form to a submission sink. This crate provides the pieces:
//!
//! - [`rules`]: pure per-field validation rules
//! - [`steps`]: step definition tables
//! - [`flows`]: the built-in tables (advisory request, network
//!   application, manuscript submission, journal proposal)
//! - [`wizard`]: the controller that owns the current step and the form data
//! - [`sink`]: where completed forms go
//! - [`session`]: the proposal object shared across the journal proposal
//!   pages
//! - [`display`]: markdown rendering of all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use quill_core::{FlowKind, LogSink, StepChange, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::for_flow(FlowKind::NetworkApplication)?
//!     .with_submit_timeout(Duration::from_secs(5))
//!     .build()?;
//!
//! wizard.set_field("fullName", "Ada Lovelace")?;
//! wizard.set_field("email", "ada@example.org")?;
//! wizard.set_field("phone", "+44 20 7946 0958")?;
//! wizard.set_field("institution", "Analytical Society")?;
//! assert_eq!(wizard.advance(), StepChange::Moved { from: 1, to: 2 });
//!
//! // ... fill in the remaining steps, then:
//! let outcome = wizard.submit(&LogSink::default()).await;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod display;
pub mod error;
pub mod flows;
pub mod models;
pub mod rules;
pub mod session;
pub mod sink;
pub mod steps;
pub mod wizard;

// Re-export commonly used types
pub use display::{FieldErrors, FlowList, OperationStatus, Progress};
pub use error::{Result, WizardError};
pub use flows::FlowKind;
pub use models::{
    BoardMember, FieldValue, FormValues, Proposal, ProposalUpdate, Receipt, StepState,
    Submission, WizardStatus,
};
pub use rules::{validate_field, Rule, Validation};
pub use session::{JournalProposalFlow, ProposalSession};
pub use sink::{FileSink, LogSink, SinkError, SubmissionSink};
pub use steps::{FieldSpec, StepDefinition, WizardDefinition};
pub use wizard::{FieldError, FormState, StepChange, SubmitOutcome, Wizard, WizardBuilder};
