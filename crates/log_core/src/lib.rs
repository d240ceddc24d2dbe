use shared::{
    domain::{VisitorDraft, VisitorField, VisitorRecord},
    error::{FieldErrors, SubmitError},
};
use tracing::{debug, warn};

pub mod clock;
pub mod validator;

pub use clock::{ClockReading, ClockSampler, SystemClock, WallClock};

use crate::clock::{short_date, time_of_day};

/// One user interaction with the visitor log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogAction {
    ShowModal,
    HideModal,
    UpdateField { field: VisitorField, value: String },
    /// Append the current draft as a record. Callers gate this on a clean
    /// validation pass; the machine itself does not validate.
    Commit,
    LogOut { index: usize },
    SetErrors(FieldErrors),
}

/// The visitor log: committed records, the open draft, and the modal state.
///
/// All mutation goes through [`LogState::apply`], a total transition over
/// [`LogAction`]. The record list is append-only except for the single
/// permitted in-place set of `log_out_time`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogState {
    pub visitors: Vec<VisitorRecord>,
    pub modal_visible: bool,
    pub draft: VisitorDraft,
    pub errors: FieldErrors,
}

impl LogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action. Time and date stamps are read from `clock` at
    /// dispatch time.
    pub fn apply(&mut self, action: LogAction, clock: &dyn WallClock) {
        match action {
            LogAction::ShowModal => {
                self.modal_visible = true;
            }
            LogAction::HideModal => {
                self.modal_visible = false;
                self.draft.clear();
                self.errors = FieldErrors::new();
            }
            LogAction::UpdateField { field, value } => {
                *self.draft.field_mut(field) = value;
            }
            LogAction::Commit => {
                let now = clock.now();
                let record =
                    VisitorRecord::from_draft(&self.draft, short_date(&now), time_of_day(&now));
                debug!(
                    visitor = %record.full_name(),
                    log_in_time = %record.log_in_time,
                    "visitor signed in"
                );
                self.visitors.push(record);
                self.draft.clear();
                self.modal_visible = false;
            }
            LogAction::LogOut { index } => {
                let Some(record) = self.visitors.get_mut(index) else {
                    warn!(index, len = self.visitors.len(), "log-out index out of range");
                    return;
                };
                // Set-once: a duplicate dispatch must not overwrite the
                // recorded departure time.
                if record.is_logged_out() {
                    debug!(index, "visitor already logged out");
                    return;
                }
                record.log_out_time = time_of_day(&clock.now());
                debug!(
                    visitor = %record.full_name(),
                    log_out_time = %record.log_out_time,
                    "visitor logged out"
                );
            }
            LogAction::SetErrors(errors) => {
                self.errors = errors;
            }
        }
    }

    /// The submit-handler contract: validate the draft, publish the result
    /// wholesale, and commit only when the error set is empty.
    pub fn submit(&mut self, clock: &dyn WallClock) -> Result<(), SubmitError> {
        let errors = validator::validate(&self.draft);
        self.apply(LogAction::SetErrors(errors.clone()), clock);
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }
        self.apply(LogAction::Commit, clock);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
