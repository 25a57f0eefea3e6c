//! Proposal session shared across the journal proposal pages.
//!
//! The journal proposal is filled in over several pages rather than one
//! form with internal steps. [`ProposalSession`] is the object those pages
//! share. It is passed explicitly and has an explicit [`reset`]
//! (`ProposalSession::reset`) so a finished or abandoned proposal does not
//! leak into the next one.
//!
//! [`JournalProposalFlow`] ties a session to the `journal-proposal` wizard:
//! every page update goes into the session first and the wizard's values
//! are refreshed from the session snapshot.
//!
//! [`reset`]: ProposalSession::reset

use log::debug;

use crate::{
    error::{Result, WizardError},
    flows::FlowKind,
    models::{Proposal, ProposalUpdate},
    sink::SubmissionSink,
    wizard::{StepChange, SubmitOutcome, Wizard, WizardBuilder},
};

/// One in-progress journal proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalSession {
    proposal: Proposal,
}

impl ProposalSession {
    /// Start a session with empty defaults and three blank board members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current proposal.
    pub fn read(&self) -> Proposal {
        self.proposal.clone()
    }

    /// Borrow the current proposal without copying it.
    pub fn proposal(&self) -> &Proposal {
        &self.proposal
    }

    /// Shallow-merge a page's fields into the proposal. The board member
    /// list, when present, replaces the existing one.
    pub fn update(&mut self, update: ProposalUpdate) {
        self.proposal.merge(update);
    }

    /// Discard everything and return to the seeded defaults.
    pub fn reset(&mut self) {
        debug!("Resetting proposal session");
        self.proposal = Proposal::default();
    }
}

/// The journal proposal wizard driven through a [`ProposalSession`].
#[derive(Debug, Clone)]
pub struct JournalProposalFlow {
    session: ProposalSession,
    wizard: Wizard,
}

impl JournalProposalFlow {
    /// Create a flow over `session` with default wizard settings.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MalformedDefinition` if the journal proposal
    /// table does not build.
    pub fn new(session: ProposalSession) -> Result<Self> {
        let wizard = WizardBuilder::for_flow(FlowKind::JournalProposal)?.build()?;
        Self::with_wizard(session, wizard)
    }

    /// Create a flow over `session` using a preconfigured wizard.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` if `wizard` does not run the
    /// journal proposal flow.
    pub fn with_wizard(session: ProposalSession, wizard: Wizard) -> Result<Self> {
        if wizard.definition().flow != FlowKind::JournalProposal.as_str() {
            return Err(WizardError::Configuration {
                message: format!(
                    "proposal session needs a {} wizard, got {}",
                    FlowKind::JournalProposal,
                    wizard.definition().flow
                ),
            });
        }

        let mut flow = Self { session, wizard };
        flow.sync()?;
        Ok(flow)
    }

    pub fn session(&self) -> &ProposalSession {
        &self.session
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Snapshot of the proposal.
    pub fn read(&self) -> Proposal {
        self.session.read()
    }

    /// Apply a page's fields without moving.
    ///
    /// # Errors
    ///
    /// Propagates `WizardError::UnknownField` from the sync, which would
    /// mean the proposal and the step table disagree.
    pub fn update(&mut self, update: ProposalUpdate) -> Result<()> {
        self.session.update(update);
        self.sync()
    }

    /// Apply a page's fields, then try to move to the next page.
    ///
    /// # Errors
    ///
    /// See [`JournalProposalFlow::update`].
    pub fn commit_page(&mut self, update: ProposalUpdate) -> Result<StepChange> {
        self.update(update)?;
        Ok(self.wizard.advance())
    }

    pub fn retreat(&mut self) -> StepChange {
        self.wizard.retreat()
    }

    /// # Errors
    ///
    /// Returns `WizardError::StepOutOfRange` for an invalid page.
    pub fn jump_to(&mut self, step: usize) -> Result<StepChange> {
        self.wizard.jump_to(step)
    }

    /// Submit the proposal.
    ///
    /// On success the session and the wizard both start over on the first
    /// page, so the flow is ready for the next proposal; the receipt is
    /// carried by the returned outcome. On any other outcome the proposal is
    /// kept as is.
    ///
    /// # Errors
    ///
    /// See [`JournalProposalFlow::update`].
    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<SubmitOutcome> {
        let outcome = self.wizard.submit(sink).await;
        if outcome.is_submitted() {
            self.abandon()?;
        }
        Ok(outcome)
    }

    /// Drop the proposal and restart from the first page.
    ///
    /// # Errors
    ///
    /// See [`JournalProposalFlow::update`].
    pub fn abandon(&mut self) -> Result<()> {
        self.session.reset();
        self.wizard.reset();
        self.sync()
    }

    fn sync(&mut self) -> Result<()> {
        self.wizard.set_values(self.session.proposal().to_values())
    }
}
