//! Built-in wizard flows.
//!
//! Each flow is a step definition table; the controller in
//! [`crate::wizard`] is the same for all of them.
//!
//! | Flow | Steps |
//! |---|---|
//! | [`FlowKind::AdvisoryRequest`] | 4 |
//! | [`FlowKind::NetworkApplication`] | 4 |
//! | [`FlowKind::ManuscriptSubmission`] | 7 |
//! | [`FlowKind::JournalProposal`] | 6 |

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::Result, steps::WizardDefinition};

pub mod advisory;
pub mod journal;
pub mod manuscript;
pub mod network;

/// Type-safe enumeration of the built-in flows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FlowKind {
    AdvisoryRequest,
    NetworkApplication,
    ManuscriptSubmission,
    JournalProposal,
}

impl FlowKind {
    /// Every built-in flow, in listing order.
    pub const ALL: [FlowKind; 4] = [
        FlowKind::AdvisoryRequest,
        FlowKind::NetworkApplication,
        FlowKind::ManuscriptSubmission,
        FlowKind::JournalProposal,
    ];

    /// Stable identifier, also used as the definition's flow id.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::AdvisoryRequest => "advisory-request",
            FlowKind::NetworkApplication => "network-application",
            FlowKind::ManuscriptSubmission => "manuscript-submission",
            FlowKind::JournalProposal => "journal-proposal",
        }
    }

    /// Build this flow's step definition table.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MalformedDefinition` if the table is invalid,
    /// which the tests in this module rule out for the built-in flows.
    pub fn definition(&self) -> Result<WizardDefinition> {
        match self {
            FlowKind::AdvisoryRequest => advisory::definition(),
            FlowKind::NetworkApplication => network::definition(),
            FlowKind::ManuscriptSubmission => manuscript::definition(),
            FlowKind::JournalProposal => journal::definition(),
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlowKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FlowKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid flow: {s}"))
    }
}
