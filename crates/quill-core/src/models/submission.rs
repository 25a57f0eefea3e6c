//! Payloads handed to submission sinks and the receipts they return.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::FormValues;

/// The validated payload of a completed wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    /// Flow identifier, e.g. `advisory-request`
    pub flow: String,

    /// Human title of the flow
    pub title: String,

    /// Every field value at the time of submission
    pub values: FormValues,
}

/// Acknowledgement returned by a sink that accepted a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Sink-specific reference (a file name, a log tag, a backend id)
    pub reference: String,

    /// Flow the submission belonged to
    pub flow: String,

    /// When the sink accepted the submission (UTC)
    pub submitted_at: Timestamp,
}
