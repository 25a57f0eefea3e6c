//! Journal proposal model shared across the proposal pages.

use serde::{Deserialize, Serialize};

use super::{FieldValue, FormValues};

/// Number of blank board member slots a fresh proposal starts with.
pub const SEEDED_BOARD_SLOTS: usize = 3;

/// One editorial board member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardMember {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub affiliation: String,
}

impl BoardMember {
    /// Create a member with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Everything a journal proposal collects across its pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    // Journal identity
    pub journal_title: String,
    pub discipline: String,
    pub scope: String,
    pub frequency: String,

    // Proposer
    pub proposer_name: String,
    pub proposer_email: String,
    pub institution: String,

    // Governance
    pub editor_in_chief: String,
    pub board_members: Vec<BoardMember>,

    // Editorial policies
    pub peer_review_model: String,
    pub open_access_policy: String,
    pub ethics_policy: String,

    // Technical setup
    pub platform: String,
    pub custom_domain: String,
    pub issn_status: String,

    // Review
    pub agree_terms: bool,
}

impl Default for Proposal {
    fn default() -> Self {
        Self {
            journal_title: String::new(),
            discipline: String::new(),
            scope: String::new(),
            frequency: String::new(),
            proposer_name: String::new(),
            proposer_email: String::new(),
            institution: String::new(),
            editor_in_chief: String::new(),
            board_members: vec![BoardMember::default(); SEEDED_BOARD_SLOTS],
            peer_review_model: String::new(),
            open_access_policy: String::new(),
            ethics_policy: String::new(),
            platform: String::new(),
            custom_domain: String::new(),
            issn_status: String::new(),
            agree_terms: false,
        }
    }
}

impl Proposal {
    /// Apply a partial update. Present scalar fields overwrite, the board
    /// member list is replaced wholesale.
    pub fn merge(&mut self, update: ProposalUpdate) {
        fn set(slot: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut self.journal_title, update.journal_title);
        set(&mut self.discipline, update.discipline);
        set(&mut self.scope, update.scope);
        set(&mut self.frequency, update.frequency);
        set(&mut self.proposer_name, update.proposer_name);
        set(&mut self.proposer_email, update.proposer_email);
        set(&mut self.institution, update.institution);
        set(&mut self.editor_in_chief, update.editor_in_chief);
        set(&mut self.peer_review_model, update.peer_review_model);
        set(&mut self.open_access_policy, update.open_access_policy);
        set(&mut self.ethics_policy, update.ethics_policy);
        set(&mut self.platform, update.platform);
        set(&mut self.custom_domain, update.custom_domain);
        set(&mut self.issn_status, update.issn_status);

        if let Some(members) = update.board_members {
            self.board_members = members;
        }
        if let Some(agree) = update.agree_terms {
            self.agree_terms = agree;
        }
    }

    /// Members whose name is not blank. Only these count toward the board
    /// minimum.
    pub fn named_board_members(&self) -> usize {
        self.board_members
            .iter()
            .filter(|m| !m.name.trim().is_empty())
            .count()
    }

    /// Flatten into the field map the `journal-proposal` wizard validates.
    pub fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("journalTitle", self.journal_title.as_str())
            .with("discipline", self.discipline.as_str())
            .with("scope", self.scope.as_str())
            .with("frequency", self.frequency.as_str())
            .with("proposerName", self.proposer_name.as_str())
            .with("proposerEmail", self.proposer_email.as_str())
            .with("institution", self.institution.as_str())
            .with("editorInChief", self.editor_in_chief.as_str())
            .with(
                "boardMembers",
                FieldValue::List(self.board_members.iter().map(|m| m.name.clone()).collect()),
            )
            .with("peerReviewModel", self.peer_review_model.as_str())
            .with("openAccessPolicy", self.open_access_policy.as_str())
            .with("ethicsPolicy", self.ethics_policy.as_str())
            .with("platform", self.platform.as_str())
            .with("customDomain", self.custom_domain.as_str())
            .with("issnStatus", self.issn_status.as_str())
            .with("agreeTerms", self.agree_terms)
    }
}

/// Partial proposal update submitted by one page.
///
/// Absent fields leave the proposal untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalUpdate {
    pub journal_title: Option<String>,
    pub discipline: Option<String>,
    pub scope: Option<String>,
    pub frequency: Option<String>,
    pub proposer_name: Option<String>,
    pub proposer_email: Option<String>,
    pub institution: Option<String>,
    pub editor_in_chief: Option<String>,
    pub board_members: Option<Vec<BoardMember>>,
    pub peer_review_model: Option<String>,
    pub open_access_policy: Option<String>,
    pub ethics_policy: Option<String>,
    pub platform: Option<String>,
    pub custom_domain: Option<String>,
    pub issn_status: Option<String>,
    pub agree_terms: Option<bool>,
}

impl ProposalUpdate {
    /// An update that only replaces the board member list.
    pub fn board_members(members: Vec<BoardMember>) -> Self {
        Self {
            board_members: Some(members),
            ..Self::default()
        }
    }
}
