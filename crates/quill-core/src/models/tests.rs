#[cfg(test)]
mod model_tests {
    use crate::models::{
        BoardMember, FieldValue, FormValues, Proposal, ProposalUpdate, StepState, WizardStatus,
        SEEDED_BOARD_SLOTS,
    };

    #[test]
    fn test_field_value_blankness() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(FieldValue::List(vec![" ".to_string(), String::new()]).is_blank());
        assert!(!FieldValue::List(vec![String::new(), "Ada".to_string()]).is_blank());
    }

    #[test]
    fn test_field_value_deserializes_untagged() {
        let values: FormValues = serde_json::from_str(
            r#"{"fullName": "Ada Lovelace", "agreeTerms": true, "coAuthors": ["Grace", "Alan"]}"#,
        )
        .expect("Failed to parse values");

        assert_eq!(values.text("fullName"), Some("Ada Lovelace"));
        assert_eq!(
            values.get("agreeTerms").and_then(FieldValue::as_flag),
            Some(true)
        );
        assert_eq!(
            values.get("coAuthors").and_then(FieldValue::as_list).map(<[String]>::len),
            Some(2)
        );
    }

    #[test]
    fn test_form_values_insert_and_remove() {
        let mut values = FormValues::new().with("email", "a@b.co");
        assert_eq!(values.len(), 1);

        let previous = values.insert("email", "c@d.co");
        assert_eq!(previous, Some(FieldValue::text("a@b.co")));

        values.remove("email");
        assert!(values.is_empty());
        assert_eq!(values.get("email"), None);
    }

    #[test]
    fn test_default_proposal_seeds_board_slots() {
        let proposal = Proposal::default();
        assert_eq!(proposal.board_members.len(), SEEDED_BOARD_SLOTS);
        assert_eq!(proposal.named_board_members(), 0);
        assert!(!proposal.agree_terms);
    }

    #[test]
    fn test_proposal_merge_is_shallow() {
        let mut proposal = Proposal::default();
        proposal.merge(ProposalUpdate {
            journal_title: Some("Journal of Tests".to_string()),
            discipline: Some("Computing".to_string()),
            ..ProposalUpdate::default()
        });
        proposal.merge(ProposalUpdate {
            discipline: Some("Mathematics".to_string()),
            ..ProposalUpdate::default()
        });

        assert_eq!(proposal.journal_title, "Journal of Tests");
        assert_eq!(proposal.discipline, "Mathematics");
        assert_eq!(proposal.board_members.len(), SEEDED_BOARD_SLOTS);
    }

    #[test]
    fn test_proposal_merge_replaces_board_members() {
        let mut proposal = Proposal::default();
        proposal.merge(ProposalUpdate::board_members(vec![
            BoardMember::named("Ada"),
            BoardMember::named(""),
        ]));

        assert_eq!(proposal.board_members.len(), 2);
        assert_eq!(proposal.named_board_members(), 1);
    }

    #[test]
    fn test_proposal_to_values_lists_member_names() {
        let mut proposal = Proposal::default();
        proposal.merge(ProposalUpdate::board_members(vec![
            BoardMember::named("Ada"),
            BoardMember::named("Grace"),
        ]));

        let values = proposal.to_values();
        assert_eq!(
            values.get("boardMembers"),
            Some(&FieldValue::List(vec!["Ada".to_string(), "Grace".to_string()]))
        );
        assert_eq!(values.get("agreeTerms"), Some(&FieldValue::Flag(false)));
    }

    #[test]
    fn test_proposal_update_from_json_pages() {
        let update: ProposalUpdate = serde_json::from_str(
            r#"{"editorInChief": "Dr. Ada", "boardMembers": [{"name": "Grace"}]}"#,
        )
        .expect("Failed to parse update");

        assert_eq!(update.editor_in_chief.as_deref(), Some("Dr. Ada"));
        assert_eq!(update.board_members.map(|m| m.len()), Some(1));
        assert_eq!(update.journal_title, None);
    }

    #[test]
    fn test_step_state_with_icon() {
        assert_eq!(StepState::Passed.with_icon(), "✓ Passed");
        assert_eq!(StepState::Current.with_icon(), "➤ Current");
        assert_eq!(StepState::Pending.with_icon(), "○ Pending");
    }

    #[test]
    fn test_wizard_status_strings() {
        assert_eq!(WizardStatus::default(), WizardStatus::Editing);
        assert_eq!(WizardStatus::Submitted.as_str(), "submitted");
        assert!(WizardStatus::Submitted.is_terminal());
        let failed = WizardStatus::SubmissionFailed {
            reason: "timeout".to_string(),
        };
        assert_eq!(failed.as_str(), "submission_failed");
        assert!(!failed.is_terminal());
    }
}
