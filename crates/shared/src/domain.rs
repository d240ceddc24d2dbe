use serde::{Deserialize, Serialize};

/// The form fields of a visitor sign-in, in the order they appear on the form.
///
/// `Ord` follows declaration order, so ordered collections keyed by field
/// iterate in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorField {
    FirstName,
    LastName,
    Email,
    Phone,
    Purpose,
    Company,
}

impl VisitorField {
    pub const ALL: [VisitorField; 6] = [
        VisitorField::FirstName,
        VisitorField::LastName,
        VisitorField::Email,
        VisitorField::Phone,
        VisitorField::Purpose,
        VisitorField::Company,
    ];

    /// Display label, also used as the input placeholder.
    pub fn label(self) -> &'static str {
        match self {
            VisitorField::FirstName => "First name",
            VisitorField::LastName => "Last name",
            VisitorField::Email => "Email",
            VisitorField::Phone => "Phone",
            VisitorField::Purpose => "Purpose",
            VisitorField::Company => "Company",
        }
    }

    /// Message attached to this field when it is left empty.
    pub fn required_message(self) -> &'static str {
        match self {
            VisitorField::FirstName => "First name is required",
            VisitorField::LastName => "Last name is required",
            VisitorField::Email => "Email is required",
            VisitorField::Phone => "Phone number is required",
            VisitorField::Purpose => "Purpose is required",
            VisitorField::Company => "Company name is required",
        }
    }
}

/// In-progress, not-yet-committed form data for a new visitor.
///
/// All fields are free text with no format constraints; the only rule
/// enforced anywhere is non-empty, and that lives in the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub purpose: String,
    pub company: String,
}

impl VisitorDraft {
    pub fn field(&self, field: VisitorField) -> &str {
        match field {
            VisitorField::FirstName => &self.first_name,
            VisitorField::LastName => &self.last_name,
            VisitorField::Email => &self.email,
            VisitorField::Phone => &self.phone,
            VisitorField::Purpose => &self.purpose,
            VisitorField::Company => &self.company,
        }
    }

    pub fn field_mut(&mut self, field: VisitorField) -> &mut String {
        match field {
            VisitorField::FirstName => &mut self.first_name,
            VisitorField::LastName => &mut self.last_name,
            VisitorField::Email => &mut self.email,
            VisitorField::Phone => &mut self.phone,
            VisitorField::Purpose => &mut self.purpose,
            VisitorField::Company => &mut self.company,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A committed visitor entry.
///
/// Snapshot of the draft at commit time plus the log-in stamps. Records are
/// addressed by their position in the visitor list; the only mutation ever
/// applied after creation is setting `log_out_time`, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub purpose: String,
    pub company: String,
    /// Calendar date of the visit, captured at commit (e.g. "8/31/2026").
    pub date: String,
    /// Time of day the visitor signed in (e.g. "3:04:05 PM").
    pub log_in_time: String,
    /// Empty until the visitor is logged out; set exactly once.
    pub log_out_time: String,
}

impl VisitorRecord {
    pub fn from_draft(draft: &VisitorDraft, date: String, log_in_time: String) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            purpose: draft.purpose.clone(),
            company: draft.company.clone(),
            date,
            log_in_time,
            log_out_time: String::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_logged_out(&self) -> bool {
        !self.log_out_time.is_empty()
    }
}
