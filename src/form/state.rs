//! State for the registration form.

use crate::mvi::UiState;

/// Visual state of a text field's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderState {
    /// Nothing to report.
    #[default]
    Neutral,
    /// Field needs the user's attention (validation error).
    Attention,
}

/// The five independent password rules, evaluated per keystroke.
///
/// Each predicate is stored on its own so the view can render a live
/// checklist; the aggregate validity is the AND of all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecklist {
    /// At least [`MIN_PASSWORD_LENGTH`](super::validate::MIN_PASSWORD_LENGTH) characters.
    pub min_length: bool,
    /// At least one upper case letter.
    pub has_uppercase: bool,
    /// At least one lower case letter.
    pub has_lowercase: bool,
    /// At least one digit.
    pub has_digit: bool,
    /// At least one special character.
    pub has_special: bool,
}

impl PasswordChecklist {
    /// True iff every rule passes.
    pub fn all_passed(&self) -> bool {
        self.min_length
            && self.has_uppercase
            && self.has_lowercase
            && self.has_digit
            && self.has_special
    }
}

/// Cumulative field-level state of the signup form.
///
/// Owned exclusively by the form store; replaced wholesale on each update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationForm {
    /// Normalized mobile number (leading-zero prefix applied once).
    pub mobile_number: String,
    /// One-time password as entered.
    pub otp: String,

    pub first_name: String,
    pub is_first_name_valid: bool,
    pub first_name_error: Option<String>,

    pub last_name: String,
    pub is_last_name_valid: bool,
    pub last_name_error: Option<String>,

    pub password: String,
    pub confirm_password: String,
    /// AND of the checklist; kept in sync by the reducer.
    pub is_password_valid: bool,
    pub password_error: Option<String>,
    pub checklist: PasswordChecklist,

    pub is_mobile_number_valid: bool,
    pub mobile_number_error: Option<String>,

    pub is_first_name_focused: bool,
    pub is_last_name_focused: bool,
    pub first_name_border: BorderState,
    pub last_name_border: BorderState,
    pub password_border: BorderState,

    pub is_policy_box_checked: bool,
    pub is_bottom_sheet_shown: bool,

    pub is_registration_success: bool,
    /// Last raw server response, diagnostic only.
    pub last_response: Option<String>,
}

impl UiState for RegistrationForm {}

impl RegistrationForm {
    /// Whether the final registration submit may be enabled.
    ///
    /// Names valid, checklist fully passed, no outstanding password error,
    /// and a non-empty confirmation that matches the password.
    pub fn can_submit(&self) -> bool {
        self.is_first_name_valid
            && self.is_last_name_valid
            && self.is_password_valid
            && self.password_error.is_none()
            && !self.confirm_password.is_empty()
            && self.password == self.confirm_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_cannot_submit() {
        assert!(!RegistrationForm::default().can_submit());
    }

    #[test]
    fn checklist_all_passed_requires_every_rule() {
        let mut checklist = PasswordChecklist {
            min_length: true,
            has_uppercase: true,
            has_lowercase: true,
            has_digit: true,
            has_special: true,
        };
        assert!(checklist.all_passed());
        checklist.has_digit = false;
        assert!(!checklist.all_passed());
    }
}
