mod common;

use common::*;
use quill_core::{
    BoardMember, FlowKind, JournalProposalFlow, ProposalSession, ProposalUpdate, StepChange,
    SubmitOutcome, WizardBuilder, WizardError, WizardStatus,
};

fn flow_on_last_page() -> JournalProposalFlow {
    let mut flow = JournalProposalFlow::new(ProposalSession::new()).unwrap();
    for page in proposal_pages() {
        flow.commit_page(page).unwrap();
    }
    assert_eq!(flow.wizard().current_step(), 6);
    flow
}

#[test]
fn test_new_session_seeds_blank_board() {
    let session = ProposalSession::new();
    let proposal = session.read();
    assert_eq!(proposal.board_members.len(), 3);
    assert_eq!(proposal.named_board_members(), 0);
    assert!(!proposal.agree_terms);
}

#[test]
fn test_session_update_merges_and_reset_clears() {
    let mut session = ProposalSession::new();
    session.update(ProposalUpdate {
        journal_title: Some("Annals of Open Computing".to_string()),
        ..ProposalUpdate::default()
    });
    session.update(ProposalUpdate {
        discipline: Some("Computer Science".to_string()),
        ..ProposalUpdate::default()
    });

    let proposal = session.read();
    assert_eq!(proposal.journal_title, "Annals of Open Computing");
    assert_eq!(proposal.discipline, "Computer Science");

    session.reset();
    assert_eq!(session, ProposalSession::new());
}

#[test]
fn test_pages_commit_through_the_flow() {
    let mut flow = JournalProposalFlow::new(ProposalSession::new()).unwrap();
    let pages = proposal_pages();

    let change = flow.commit_page(pages[0].clone()).unwrap();
    assert_eq!(change, StepChange::Moved { from: 1, to: 2 });
    assert_eq!(
        flow.wizard().values().text("journalTitle"),
        Some("Annals of Open Computing")
    );

    let change = flow.commit_page(pages[1].clone()).unwrap();
    assert_eq!(change, StepChange::Moved { from: 2, to: 3 });
}

#[test]
fn test_governance_page_needs_three_members() {
    let mut flow = JournalProposalFlow::new(ProposalSession::new()).unwrap();
    let pages = proposal_pages();
    flow.commit_page(pages[0].clone()).unwrap();
    flow.commit_page(pages[1].clone()).unwrap();

    let change = flow
        .commit_page(ProposalUpdate {
            editor_in_chief: Some("Dr. Ada Lovelace".to_string()),
            board_members: Some(vec![
                BoardMember::named("Alan Turing"),
                BoardMember::named("Katherine Johnson"),
                BoardMember::default(),
            ]),
            ..ProposalUpdate::default()
        })
        .unwrap();
    assert_eq!(change, StepChange::Blocked { errors: 1 });
    assert_eq!(
        flow.wizard().errors().get("boardMembers").map(String::as_str),
        Some("At least 3 editorial board members are required")
    );

    let change = flow
        .commit_page(ProposalUpdate::board_members(full_board()))
        .unwrap();
    assert_eq!(change, StepChange::Moved { from: 3, to: 4 });
}

#[tokio::test]
async fn test_successful_submit_resets_session() {
    let mut flow = flow_on_last_page();
    let sink = RecordingSink::default();

    let outcome = flow.submit(&sink).await.unwrap();
    assert!(outcome.is_submitted());
    assert_eq!(flow.session(), &ProposalSession::new());
    assert_eq!(flow.wizard().status(), &WizardStatus::Editing);
    assert_eq!(flow.wizard().current_step(), 1);
    assert_eq!(flow.wizard().values().text("journalTitle"), Some(""));

    let accepted = sink.accepted.lock().unwrap();
    assert_eq!(
        accepted[0].values.text("journalTitle"),
        Some("Annals of Open Computing")
    );
}

#[tokio::test]
async fn test_shrunk_board_fails_revalidation() {
    let mut flow = flow_on_last_page();
    flow.update(ProposalUpdate::board_members(vec![
        BoardMember::named("Alan Turing"),
        BoardMember::named("Katherine Johnson"),
    ]))
    .unwrap();

    let sink = RecordingSink::default();
    let outcome = flow.submit(&sink).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Invalid {
            errors: 1,
            first_step: 3
        }
    );
    assert_eq!(sink.calls(), 0);
    assert_eq!(flow.wizard().current_step(), 6);
    assert_eq!(flow.read().named_board_members(), 2);
    assert_eq!(flow.read().journal_title, "Annals of Open Computing");
}

#[tokio::test]
async fn test_failed_submit_keeps_session() {
    let mut flow = flow_on_last_page();

    let outcome = flow.submit(&RejectingSink).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    assert_eq!(flow.read().journal_title, "Annals of Open Computing");

    let outcome = flow.submit(&RecordingSink::default()).await.unwrap();
    assert!(outcome.is_submitted());
}

#[tokio::test]
async fn test_next_proposal_after_submit_stays_in_sync() {
    let mut flow = flow_on_last_page();
    assert!(flow.submit(&RecordingSink::default()).await.unwrap().is_submitted());

    flow.update(ProposalUpdate {
        journal_title: Some("Second Journal".to_string()),
        ..ProposalUpdate::default()
    })
    .unwrap();
    assert_eq!(flow.read().journal_title, "Second Journal");
    assert_eq!(
        flow.wizard().values().text("journalTitle"),
        Some("Second Journal")
    );

    let sink = RecordingSink::default();
    for page in proposal_pages() {
        flow.commit_page(page).unwrap();
    }
    assert!(flow.submit(&sink).await.unwrap().is_submitted());
    assert_eq!(sink.calls(), 1);
}

#[test]
fn test_abandon_restarts_from_first_page() {
    let mut flow = flow_on_last_page();
    flow.abandon().unwrap();

    assert_eq!(flow.wizard().current_step(), 1);
    assert_eq!(flow.session(), &ProposalSession::new());
    assert_eq!(flow.wizard().values().text("journalTitle"), Some(""));
}

#[test]
fn test_retreat_and_jump_between_pages() {
    let mut flow = flow_on_last_page();
    assert_eq!(flow.retreat(), StepChange::Moved { from: 6, to: 5 });
    assert_eq!(
        flow.jump_to(2).unwrap(),
        StepChange::Moved { from: 5, to: 2 }
    );
    assert!(matches!(
        flow.jump_to(7),
        Err(WizardError::StepOutOfRange { .. })
    ));
}

#[test]
fn test_flow_rejects_other_wizards() {
    let wizard = WizardBuilder::for_flow(FlowKind::NetworkApplication)
        .unwrap()
        .build()
        .unwrap();
    let err = JournalProposalFlow::with_wizard(ProposalSession::new(), wizard).unwrap_err();
    assert!(matches!(err, WizardError::Configuration { .. }));
}
