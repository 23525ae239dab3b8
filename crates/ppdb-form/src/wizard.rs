//! The wizard controller: step navigation, completion tracking, and
//! submission.

use std::collections::BTreeMap;

use ppdb_schema::{RegistrationRecord, ValidationResult, validate_record};

use crate::steps::{Step, validate_step};

/// Validation status of a step as shown on its chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Completion {
    #[default]
    Pending,
    Valid,
    Invalid,
}

/// Receives the validated record on a successful submission.
pub trait SubmissionSink {
    fn submitted(&mut self, record: &RegistrationRecord);
}

/// Sink that only logs the submission event.
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submitted(&mut self, record: &RegistrationRecord) {
        tracing::info!(siswa = %record.siswa.nama, "pendaftaran terkirim");
    }
}

/// Outcome of [`WizardController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected {
        first_invalid: Option<Step>,
        result: ValidationResult,
    },
}

/// Owns the current step and the per-step completion map.
///
/// Leaving a step forward validates that step and records the result, but
/// never blocks the move: users may walk ahead and come back. Only
/// [`WizardController::submit`] gates on the full schema.
#[derive(Debug)]
pub struct WizardController {
    current: Step,
    completion: BTreeMap<Step, Completion>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            current: Step::Siswa,
            completion: Step::ALL
                .into_iter()
                .map(|step| (step, Completion::Pending))
                .collect(),
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn completion(&self, step: Step) -> Completion {
        self.completion
            .get(&step)
            .copied()
            .unwrap_or(Completion::Pending)
    }

    /// Move to the next step, validating the one being left.
    pub fn advance(&mut self, record: &RegistrationRecord) -> Step {
        if let Some(next) = self.current.next() {
            self.leave_step(record, next);
        }
        self.current
    }

    /// Move to the previous step. Backward navigation never validates.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
        self.current
    }

    /// Jump to an arbitrary step. A forward jump validates the step being
    /// left; a backward or same-step jump just moves.
    pub fn jump_to(&mut self, record: &RegistrationRecord, target: Step) -> Step {
        self.leave_step(record, target);
        self.current
    }

    fn leave_step(&mut self, record: &RegistrationRecord, target: Step) {
        if target > self.current {
            let result = validate_step(self.current, record);
            let status = if result.valid {
                Completion::Valid
            } else {
                Completion::Invalid
            };
            self.completion.insert(self.current, status);
        }
        self.current = target;
    }

    /// Run the full aggregate schema. On success the record goes to the
    /// sink and every step reads valid; on failure every step is
    /// re-scored with its own rule and the controller lands on the
    /// lowest-numbered failing step. No partial submission occurs.
    pub fn submit(
        &mut self,
        record: &RegistrationRecord,
        sink: &mut dyn SubmissionSink,
    ) -> SubmitOutcome {
        let result = validate_record(record);
        if result.valid {
            for step in Step::ALL {
                self.completion.insert(step, Completion::Valid);
            }
            sink.submitted(record);
            return SubmitOutcome::Submitted;
        }

        let mut first_invalid = None;
        for step in Step::ALL {
            let step_result = validate_step(step, record);
            let status = if step_result.valid {
                Completion::Valid
            } else {
                Completion::Invalid
            };
            if status == Completion::Invalid && first_invalid.is_none() {
                first_invalid = Some(step);
            }
            self.completion.insert(step, status);
        }
        if let Some(step) = first_invalid {
            self.current = step;
        }
        tracing::warn!(
            errors = result.errors.len(),
            missing = result.missing_required.len(),
            "pendaftaran ditolak oleh validasi"
        );
        SubmitOutcome::Rejected {
            first_invalid,
            result,
        }
    }
}
