use shared::{
    domain::{VisitorDraft, VisitorField},
    error::FieldErrors,
};

/// Checks every form field independently and reports all failures at once.
///
/// A field fails iff its value is the empty string; whitespace-only values
/// pass. No trimming, no format rules, no cross-field rules.
pub fn validate(draft: &VisitorDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in VisitorField::ALL {
        if draft.field(field).is_empty() {
            errors.insert(field, field.required_message());
        }
    }
    errors
}
