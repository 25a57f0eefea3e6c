//! Command handlers for the quill binary.
//!
//! Each handler loads its inputs, drives `quill_core`, and renders the core
//! display types through the [`TerminalRenderer`]. A form that cannot be
//! completed is reported on stdout and then returned as an error, which
//! makes the process exit with status 1.

use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use quill_core::{
    answers::{load_answers, load_pages},
    FieldErrors, FileSink, FlowKind, FlowList, JournalProposalFlow, LogSink, OperationStatus,
    Progress, ProposalSession, StepChange, SubmissionSink, SubmitOutcome, Wizard, WizardBuilder,
    WizardDefinition,
};

use crate::{
    args::{AnswersArgs, FillArgs, ProposeArgs, ShowArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    renderer: TerminalRenderer,
    outbox_dir: Option<PathBuf>,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, outbox_dir: Option<PathBuf>) -> Self {
        Self {
            renderer,
            outbox_dir,
        }
    }

    pub fn list_flows(&self) -> Result<()> {
        let definitions = FlowKind::ALL
            .iter()
            .map(|kind| kind.definition())
            .collect::<quill_core::Result<Vec<WizardDefinition>>>()
            .context("Failed to load built-in flows")?;

        self.renderer.render(&FlowList(definitions).to_string())
    }

    pub fn show_flow(&self, args: ShowArgs) -> Result<()> {
        let kind = FlowKind::from(args.flow);
        let definition = kind
            .definition()
            .with_context(|| format!("Failed to load flow {kind}"))?;

        self.renderer.render(&definition.to_string())
    }

    pub fn check_answers(&self, args: AnswersArgs) -> Result<()> {
        let wizard = self.wizard_with_answers(&args, None)?;
        let failures = wizard.validate_all();

        if failures.is_empty() {
            return self.renderer.render(
                &OperationStatus::success(format!(
                    "All {} steps of {} are valid",
                    wizard.total_steps(),
                    wizard.definition().flow
                ))
                .to_string(),
            );
        }

        let count = failures.len();
        self.renderer.render(&FieldErrors(failures).to_string())?;
        self.renderer.render(
            &OperationStatus::failure(format!("{count} field(s) need attention")).to_string(),
        )?;
        bail!("{count} field(s) failed validation")
    }

    pub async fn fill(&self, args: FillArgs) -> Result<()> {
        let timeout = args.timeout_secs.map(Duration::from_secs);
        let mut wizard = self.wizard_with_answers(&args.answers, timeout)?;

        let change = wizard.advance_through();
        debug!("Advanced {}: {change:?}", wizard.definition().flow);
        if let StepChange::Blocked { errors } = change {
            self.renderer.render(&Progress(&wizard).to_string())?;
            bail!(
                "Stopped at step {} of {} with {errors} field(s) to fix",
                wizard.current_step(),
                wizard.total_steps()
            );
        }

        let sink = self.sink(args.dry_run)?;
        let outcome = wizard.submit(sink.as_ref()).await;
        self.report(&wizard, outcome)
    }

    pub async fn propose(&self, args: ProposeArgs) -> Result<()> {
        let pages = load_pages(&args.pages).context("Failed to load proposal pages")?;
        let mut flow = JournalProposalFlow::new(ProposalSession::new())
            .context("Failed to start journal proposal")?;

        for (index, page) in pages.into_iter().enumerate() {
            let change = flow
                .commit_page(page)
                .with_context(|| format!("Failed to apply page {}", index + 1))?;
            debug!("Page {}: {change:?}", index + 1);

            if let StepChange::Blocked { errors } = change {
                self.renderer.render(&Progress(flow.wizard()).to_string())?;
                bail!("Page {} has {errors} field(s) to fix", index + 1);
            }
        }

        let sink = self.sink(args.dry_run)?;
        let outcome = flow
            .submit(sink.as_ref())
            .await
            .context("Failed to restart proposal after submission")?;
        self.report(flow.wizard(), outcome)
    }

    fn wizard_with_answers(
        &self,
        args: &AnswersArgs,
        timeout: Option<Duration>,
    ) -> Result<Wizard> {
        let values = load_answers(&args.answers).context("Failed to load answers")?;

        let mut builder = WizardBuilder::for_flow(args.flow.into())?.with_values(values);
        if let Some(timeout) = timeout {
            builder = builder.with_submit_timeout(timeout);
        }

        builder.build().context("Failed to apply answers")
    }

    fn sink(&self, dry_run: bool) -> Result<Box<dyn SubmissionSink>> {
        if dry_run {
            return Ok(Box::new(LogSink::default()));
        }

        let dir = match &self.outbox_dir {
            Some(dir) => dir.clone(),
            None => FileSink::default_dir().context("Failed to resolve outbox directory")?,
        };
        info!("Writing submissions to {}", dir.display());
        Ok(Box::new(FileSink::new(dir)))
    }

    fn report(&self, wizard: &Wizard, outcome: SubmitOutcome) -> Result<()> {
        self.renderer.render(&outcome.to_string())?;

        match outcome {
            SubmitOutcome::Submitted(_) => Ok(()),
            SubmitOutcome::Invalid { .. } => {
                self.renderer.render("\n")?;
                self.renderer.render(&Progress(wizard).to_string())?;
                bail!("Submission blocked by validation errors")
            }
            SubmitOutcome::NotReady { current_step, total } => {
                bail!("Answers end on step {current_step} of {total}")
            }
            SubmitOutcome::Failed { reason } => bail!("Submission failed: {reason}"),
            SubmitOutcome::AlreadySubmitted => bail!("Already submitted"),
        }
    }
}
