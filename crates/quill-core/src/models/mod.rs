//! Data models for wizard state, proposals and submissions.
//!
//! Display implementations for these models live in
//! [`crate::display`], keeping presentation apart from the data.
//!
//! - [`FieldValue`] / [`FormValues`]: what the user typed
//! - [`WizardStatus`] / [`StepState`]: where a wizard stands
//! - [`Proposal`] / [`ProposalUpdate`]: the journal proposal carried
//!   across pages
//! - [`Submission`] / [`Receipt`]: what sinks receive and return

pub mod proposal;
pub mod status;
pub mod submission;
pub mod value;

#[cfg(test)]
mod tests;

pub use proposal::{BoardMember, Proposal, ProposalUpdate, SEEDED_BOARD_SLOTS};
pub use status::{StepState, WizardStatus};
pub use submission::{Receipt, Submission};
pub use value::{FieldValue, FormValues};
