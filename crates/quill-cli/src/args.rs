use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use quill_core::FlowKind;

/// Main command-line interface for the Quill submission wizards
///
/// Quill drives the multi-step forms of an academic publishing site
/// (advisory requests, network applications, manuscript submissions and
/// journal proposals) from JSON answer files. Completed forms are written
/// to an outbox directory.
#[derive(Parser)]
#[command(version, about, name = "quill")]
pub struct Args {
    /// Directory completed submissions are written to. Defaults to
    /// $XDG_DATA_HOME/quill/outbox
    #[arg(long, global = true)]
    pub outbox_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in flows
    #[command(alias = "ls")]
    Flows,
    /// Show the steps, fields and rules of a flow
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Validate an answer file against every step of a flow
    #[command(alias = "c")]
    Check(AnswersArgs),
    /// Drive a flow from an answer file and submit it
    #[command(alias = "f")]
    Fill(FillArgs),
    /// Replay journal proposal pages and submit the proposal
    #[command(alias = "p")]
    Propose(ProposeArgs),
}

/// Built-in flow names as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FlowArg {
    /// Publishing advisory request (4 steps)
    AdvisoryRequest,
    /// Researcher network membership application (4 steps)
    NetworkApplication,
    /// Manuscript submission (7 steps)
    ManuscriptSubmission,
    /// New journal proposal (6 steps)
    JournalProposal,
}

impl From<FlowArg> for FlowKind {
    fn from(val: FlowArg) -> Self {
        match val {
            FlowArg::AdvisoryRequest => FlowKind::AdvisoryRequest,
            FlowArg::NetworkApplication => FlowKind::NetworkApplication,
            FlowArg::ManuscriptSubmission => FlowKind::ManuscriptSubmission,
            FlowArg::JournalProposal => FlowKind::JournalProposal,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(value_enum, help = "Flow to describe")]
    pub flow: FlowArg,
}

#[derive(ClapArgs)]
pub struct AnswersArgs {
    #[arg(value_enum, help = "Flow the answers belong to")]
    pub flow: FlowArg,
    /// JSON object mapping field names to answers
    #[arg(short, long, help = "Path to a JSON answer file")]
    pub answers: PathBuf,
}

/// Fill a flow and submit it
///
/// Answers are applied all at once, then the wizard advances step by step.
/// It stops at the first step that does not validate and exits with status
/// 1. With `--dry-run` the completed form is logged instead of written to
/// the outbox.
#[derive(ClapArgs)]
pub struct FillArgs {
    #[command(flatten)]
    pub answers: AnswersArgs,
    #[arg(long, help = "Log the submission instead of writing it to the outbox")]
    pub dry_run: bool,
    #[arg(long, help = "Seconds to wait for the submission before giving up")]
    pub timeout_secs: Option<u64>,
}

/// Replay proposal pages
///
/// Each element of the pages file is a partial proposal, applied as if the
/// corresponding page had been submitted.
#[derive(ClapArgs)]
pub struct ProposeArgs {
    #[arg(long, help = "Path to a JSON array of proposal page updates")]
    pub pages: PathBuf,
    #[arg(long, help = "Log the submission instead of writing it to the outbox")]
    pub dry_run: bool,
}
