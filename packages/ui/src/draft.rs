//! Registration form drafts and client-side shape validation.
//!
//! A draft is scoped to one form instance and discarded on success or
//! navigation away. Validation here is local-only; the backend re-validates
//! independently and its error, when present, is surfaced verbatim.

use thiserror::Error;

/// Department picker state on the field worker and authority forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentChoice {
    /// Nothing picked yet.
    #[default]
    None,
    /// An existing department id from the fetched list.
    Existing(u32),
    /// "Other": the user supplies a new department name instead.
    Other,
}

/// Local validation failures, detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
}

/// Mutable record of one registration form's field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub department: DepartmentChoice,
    pub new_department_name: String,
}

/// Whether a proposed value is acceptable for a name-like field:
/// letters and whitespace only.
pub fn is_name_input(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

impl RegistrationDraft {
    /// Name fields reject values containing anything but letters and
    /// whitespace; the offending keystroke is silently ignored and the field
    /// keeps its previous value.
    pub fn set_first_name(&mut self, value: &str) {
        if is_name_input(value) {
            self.first_name = value.to_string();
        }
    }

    pub fn set_last_name(&mut self, value: &str) {
        if is_name_input(value) {
            self.last_name = value.to_string();
        }
    }

    /// Apply a department `<select>` value. `"other"` switches the form into
    /// freeform-name mode and drops any previously chosen id; any concrete id
    /// clears the freeform name.
    pub fn select_department(&mut self, value: &str) {
        if value == "other" {
            self.department = DepartmentChoice::Other;
        } else if value.is_empty() {
            self.department = DepartmentChoice::None;
            self.new_department_name.clear();
        } else if let Ok(id) = value.parse() {
            self.department = DepartmentChoice::Existing(id);
            self.new_department_name.clear();
        }
    }

    /// The `<select>` value corresponding to the current choice.
    pub fn department_value(&self) -> String {
        match self.department {
            DepartmentChoice::None => String::new(),
            DepartmentChoice::Existing(id) => id.to_string(),
            DepartmentChoice::Other => "other".to_string(),
        }
    }

    /// Shape checks that must pass before a submission is attempted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.len() < 6 {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}
