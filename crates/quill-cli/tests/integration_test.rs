//! Integration tests comparing CLI output with the core Display
//! implementations it is meant to print verbatim in plain mode.

use std::process::Command;

use quill_core::{FlowKind, FlowList, WizardDefinition};

/// Run a CLI command in plain mode and capture its stdout
fn run_cli_command(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_quill"))
        .arg("--no-color")
        .args(args)
        .output()
        .expect("Failed to run quill");

    assert!(
        output.status.success(),
        "quill {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Output is not UTF-8")
}

#[test]
fn test_flows_output_matches_display() {
    let definitions = FlowKind::ALL
        .iter()
        .map(|kind| kind.definition().unwrap())
        .collect::<Vec<WizardDefinition>>();

    assert_eq!(run_cli_command(&["flows"]), FlowList(definitions).to_string());
}

#[test]
fn test_show_output_matches_display() {
    for kind in FlowKind::ALL {
        let expected = kind.definition().unwrap().to_string();
        assert_eq!(run_cli_command(&["show", kind.as_str()]), expected);
    }
}
