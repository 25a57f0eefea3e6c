//! Answer files used to drive wizards without a UI.
//!
//! An answer sheet is a flat JSON object of field values:
//!
//! ```json
//! { "fullName": "Ada Lovelace", "agreeTerms": true, "coAuthors": ["Grace Hopper"] }
//! ```
//!
//! Values are text, `true`/`false`, or arrays of text. Numbers are refused,
//! so a phone number must be quoted: `"phone": "5551234567"`.
//!
//! Proposal pages are a JSON array of partial proposal updates, applied in
//! order as if each page had been submitted:
//!
//! ```json
//! [ { "journalTitle": "Annals of Testing" }, { "editorInChief": "Dr. Ada" } ]
//! ```

use std::{collections::BTreeMap, path::Path};

use crate::{
    error::{Result, ResultExt, WizardError},
    models::{FieldValue, FormValues, ProposalUpdate},
};

/// Parse an answer sheet from JSON text.
///
/// # Errors
///
/// Returns `WizardError::Serialization` if the text is not a JSON object and
/// `WizardError::InvalidInput` naming the field whose value is not a string,
/// a boolean or an array of strings.
pub fn parse_answers(json: &str) -> Result<FormValues> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(name, value)| match serde_json::from_value::<FieldValue>(value) {
            Ok(value) => Ok((name, value)),
            Err(_) => Err(WizardError::invalid_input(name)
                .with_reason("expected text, true or false, or a list of text")),
        })
        .collect()
}

/// Parse proposal pages from JSON text.
///
/// # Errors
///
/// Returns `WizardError::Serialization` if the text is not a JSON array of
/// proposal updates.
pub fn parse_pages(json: &str) -> Result<Vec<ProposalUpdate>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an answer sheet file.
///
/// # Errors
///
/// Returns `WizardError::FileSystem` if the file cannot be read and
/// `WizardError::Configuration` naming the file if it does not parse.
pub fn load_answers(path: &Path) -> Result<FormValues> {
    let text = read(path)?;
    parse_answers(&text).with_context(format!("Parsing answers in {}", path.display()))
}

/// Read and parse a proposal pages file.
///
/// # Errors
///
/// Returns `WizardError::FileSystem` if the file cannot be read and
/// `WizardError::Configuration` naming the file if it does not parse.
pub fn load_pages(path: &Path) -> Result<Vec<ProposalUpdate>> {
    let text = read(path)?;
    serde_json::from_str(&text)
        .with_context(format!("Parsing proposal pages in {}", path.display()))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| WizardError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_answers() {
        let values = parse_answers(r#"{"fullName": "Ada", "agreeTerms": true}"#).unwrap();
        assert_eq!(values.text("fullName"), Some("Ada"));
        assert_eq!(values.get("agreeTerms"), Some(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_parse_answers_names_numeric_field() {
        let err = parse_answers(r#"{"fullName": "Ada", "phone": 5551234567}"#).unwrap_err();
        assert!(matches!(err, WizardError::InvalidInput { .. }));
        assert!(err.to_string().contains("'phone'"));
    }

    #[test]
    fn test_parse_answers_rejects_non_object() {
        let err = parse_answers(r#"["fullName"]"#).unwrap_err();
        assert!(matches!(err, WizardError::Serialization { .. }));
    }

    #[test]
    fn test_load_answers_names_numeric_field() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("answers.json");
        std::fs::write(&path, r#"{"phone": 5551234567}"#).unwrap();

        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("answers.json"));
        assert!(err.to_string().contains("'phone'"));
    }

    #[test]
    fn test_parse_pages() {
        let pages =
            parse_pages(r#"[{"journalTitle": "Annals"}, {"boardMembers": [{"name": "Ada"}]}]"#)
                .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].journal_title.as_deref(), Some("Annals"));
    }

    #[test]
    fn test_load_answers_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = load_answers(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, WizardError::FileSystem { .. }));
    }

    #[test]
    fn test_load_answers_names_bad_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("answers.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("answers.json"));
    }
}
