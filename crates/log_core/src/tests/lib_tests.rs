use super::*;
use chrono::{DateTime, Local, TimeZone};

struct FixedClock(DateTime<Local>);

impl WallClock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

fn clock_at(hour: u32, min: u32, sec: u32) -> FixedClock {
    FixedClock(
        Local
            .with_ymd_and_hms(2026, 8, 31, hour, min, sec)
            .single()
            .expect("unambiguous local time"),
    )
}

fn filled_draft() -> VisitorDraft {
    VisitorDraft {
        first_name: "Ana".to_string(),
        last_name: "Cruz".to_string(),
        email: "a@x.com".to_string(),
        phone: "123".to_string(),
        purpose: "meeting".to_string(),
        company: "Acme".to_string(),
    }
}

fn state_with_one_visitor(clock: &dyn WallClock) -> LogState {
    let mut state = LogState::new();
    state.draft = filled_draft();
    state.apply(LogAction::Commit, clock);
    state
}

#[test]
fn show_modal_changes_no_data() {
    let clock = clock_at(9, 0, 0);
    let mut state = LogState::new();
    state.apply(LogAction::ShowModal, &clock);

    assert!(state.modal_visible);
    assert!(state.visitors.is_empty());
    assert_eq!(state.draft, VisitorDraft::default());
    assert!(state.errors.is_empty());
}

#[test]
fn hide_modal_resets_draft_and_errors() {
    let clock = clock_at(9, 0, 0);
    let mut state = LogState::new();
    state.apply(LogAction::ShowModal, &clock);
    state.apply(
        LogAction::UpdateField {
            field: VisitorField::FirstName,
            value: "Ana".to_string(),
        },
        &clock,
    );
    let mut errors = FieldErrors::new();
    errors.insert(VisitorField::Email, "Email is required");
    state.apply(LogAction::SetErrors(errors), &clock);

    state.apply(LogAction::HideModal, &clock);

    assert!(!state.modal_visible);
    assert_eq!(state.draft, VisitorDraft::default());
    assert!(state.errors.is_empty());
}

#[test]
fn update_field_writes_only_that_field() {
    let clock = clock_at(9, 0, 0);
    let mut state = LogState::new();
    state.apply(
        LogAction::UpdateField {
            field: VisitorField::Company,
            value: "Acme".to_string(),
        },
        &clock,
    );

    assert_eq!(state.draft.company, "Acme");
    assert_eq!(state.draft.first_name, "");
}

#[test]
fn commit_appends_snapshot_with_stamps_and_resets_draft() {
    let clock = clock_at(15, 4, 5);
    let mut state = LogState::new();
    state.apply(LogAction::ShowModal, &clock);
    state.draft = filled_draft();

    state.apply(LogAction::Commit, &clock);

    assert_eq!(state.visitors.len(), 1);
    let record = &state.visitors[0];
    assert_eq!(record.first_name, "Ana");
    assert_eq!(record.last_name, "Cruz");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.phone, "123");
    assert_eq!(record.purpose, "meeting");
    assert_eq!(record.company, "Acme");
    assert_eq!(record.log_in_time, "3:04:05 PM");
    assert_eq!(record.date, "8/31/2026");
    assert_eq!(record.log_out_time, "");
    assert!(!record.is_logged_out());

    assert_eq!(state.draft, VisitorDraft::default());
    assert!(!state.modal_visible);
}

#[test]
fn commit_stamps_morning_times_without_hour_padding() {
    let clock = clock_at(8, 30, 9);
    let state = state_with_one_visitor(&clock);
    assert_eq!(state.visitors[0].log_in_time, "8:30:09 AM");
}

#[test]
fn log_out_sets_departure_time_and_leaves_other_records_alone() {
    let morning = clock_at(9, 0, 0);
    let mut state = state_with_one_visitor(&morning);
    state.draft = VisitorDraft {
        first_name: "Ben".to_string(),
        ..filled_draft()
    };
    state.apply(LogAction::Commit, &morning);

    let afternoon = clock_at(17, 30, 0);
    state.apply(LogAction::LogOut { index: 0 }, &afternoon);

    assert_eq!(state.visitors[0].log_out_time, "5:30:00 PM");
    assert!(state.visitors[0].is_logged_out());
    assert_eq!(state.visitors[1].log_out_time, "");
}

#[test]
fn duplicate_log_out_does_not_overwrite_departure_time() {
    let morning = clock_at(9, 0, 0);
    let mut state = state_with_one_visitor(&morning);

    state.apply(LogAction::LogOut { index: 0 }, &clock_at(12, 0, 0));
    let first_stamp = state.visitors[0].log_out_time.clone();
    assert!(!first_stamp.is_empty());

    state.apply(LogAction::LogOut { index: 0 }, &clock_at(18, 0, 0));
    assert_eq!(state.visitors[0].log_out_time, first_stamp);
}

#[test]
fn out_of_range_log_out_leaves_state_unchanged() {
    let clock = clock_at(9, 0, 0);
    let mut state = state_with_one_visitor(&clock);
    let before = state.clone();

    state.apply(LogAction::LogOut { index: 1 }, &clock);

    assert_eq!(state, before);
}

#[test]
fn set_errors_replaces_the_set_wholesale() {
    let clock = clock_at(9, 0, 0);
    let mut state = LogState::new();

    let mut first = FieldErrors::new();
    first.insert(VisitorField::FirstName, "First name is required");
    first.insert(VisitorField::Email, "Email is required");
    state.apply(LogAction::SetErrors(first), &clock);

    let mut second = FieldErrors::new();
    second.insert(VisitorField::Phone, "Phone number is required");
    state.apply(LogAction::SetErrors(second), &clock);

    assert_eq!(state.errors.len(), 1);
    assert_eq!(state.errors.get(VisitorField::FirstName), None);
    assert_eq!(
        state.errors.get(VisitorField::Phone),
        Some("Phone number is required")
    );
}

#[test]
fn submit_with_valid_draft_commits_one_record() {
    let clock = clock_at(10, 15, 0);
    let mut state = LogState::new();
    state.apply(LogAction::ShowModal, &clock);
    state.draft = filled_draft();

    state.submit(&clock).expect("valid draft commits");

    assert_eq!(state.visitors.len(), 1);
    assert_eq!(state.visitors[0].log_out_time, "");
    assert!(state.errors.is_empty());
    assert!(!state.modal_visible);
}

#[test]
fn submit_with_missing_field_reports_it_and_commits_nothing() {
    let clock = clock_at(10, 15, 0);
    let mut state = LogState::new();
    state.apply(LogAction::ShowModal, &clock);
    state.draft = VisitorDraft {
        first_name: String::new(),
        ..filled_draft()
    };

    let err = state.submit(&clock).expect_err("empty first name rejected");

    let errors = err.field_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(VisitorField::FirstName),
        Some("First name is required")
    );
    assert_eq!(state.errors, *errors);
    assert!(state.visitors.is_empty());
    assert!(state.modal_visible);
}

#[test]
fn submit_after_correction_clears_stale_errors() {
    let clock = clock_at(10, 15, 0);
    let mut state = LogState::new();
    state.draft = VisitorDraft {
        email: String::new(),
        ..filled_draft()
    };
    state.submit(&clock).expect_err("missing email rejected");
    assert!(!state.errors.is_empty());

    state.apply(
        LogAction::UpdateField {
            field: VisitorField::Email,
            value: "a@x.com".to_string(),
        },
        &clock,
    );
    state.submit(&clock).expect("corrected draft commits");

    assert!(state.errors.is_empty());
    assert_eq!(state.visitors.len(), 1);
}
