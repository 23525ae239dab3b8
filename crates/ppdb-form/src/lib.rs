//! Five-step PPDB registration wizard.
//!
//! [`WizardController`] owns the current step and the per-step completion
//! map; `ppdb-schema` supplies the validation rules it dispatches to, and
//! `ppdb-wilayah` resolves the address region codes. Rendering layers only
//! read controller state and call its transition methods.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod cmd;
pub mod draft;
pub mod steps;
pub mod summary;
pub mod wizard;

pub use ppdb_wilayah as wilayah;

pub use draft::{DraftError, DraftStore, MemoryDraftStore};
pub use steps::{Step, validate_step};
pub use summary::render_text;
pub use wizard::{Completion, LogSink, SubmissionSink, SubmitOutcome, WizardController};
