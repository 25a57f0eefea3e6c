//! Display formatting for wizards, definitions and outcomes.
//!
//! Domain types implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers give context-specific formatting where one type needs
//! more than one rendering. Everything renders as markdown so the CLI can
//! pass it straight to its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Wizard, Flows  │    │ Wrappers        │    │   Markdown      │
//! │  Outcomes       │───▶│ (Progress, ...) │───▶│   Output        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`FlowList`], [`FieldErrors`]
//! - [`progress`]: [`Progress`], the step list of a live wizard
//! - [`results`]: navigation and submission outcomes
//! - [`status`]: [`OperationStatus`] confirmation messages
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for domain models
//!
//! ## Example
//!
//! ```rust
//! use quill_core::{display::Progress, FlowKind, WizardBuilder};
//!
//! # fn example() -> quill_core::Result<()> {
//! let wizard = WizardBuilder::for_flow(FlowKind::AdvisoryRequest)?.build()?;
//! let output = Progress(&wizard).to_string();
//! assert!(output.contains("# Advisory Request"));
//! assert!(output.contains("Step 1 of 4: Contact details"));
//! # Ok(())
//! # }
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod progress;
pub mod results;
pub mod status;

pub use collections::{FieldErrors, FlowList};
pub use datetime::LocalDateTime;
pub use progress::Progress;
pub use status::OperationStatus;
