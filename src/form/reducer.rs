//! Reducer for the registration form.

use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{BorderState, RegistrationForm};
use super::validate;

/// Reducer for form field transitions.
///
/// Total over the intent set; malformed input degrades to an invalid field
/// with an error string, never a failure of the reduction itself.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = RegistrationForm;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::MobileNumberChanged(raw) => set_mobile_number(state, &raw),
            FormIntent::FirstNameChanged(raw) => set_first_name(state, &raw),
            FormIntent::LastNameChanged(raw) => set_last_name(state, &raw),
            FormIntent::PasswordChanged(raw) => set_password(state, raw),
            FormIntent::ConfirmPasswordChanged(raw) => set_confirm_password(state, raw),
            FormIntent::OtpChanged(otp) => RegistrationForm { otp, ..state },
            FormIntent::FocusChanged { field, focused } => set_focus(state, &field, focused),
            FormIntent::PolicyChanged(checked) => RegistrationForm {
                is_policy_box_checked: checked,
                ..state
            },
            FormIntent::ValidationSucceeded => RegistrationForm {
                is_policy_box_checked: false,
                is_bottom_sheet_shown: false,
                is_registration_success: false,
                ..state
            },
            FormIntent::ValidationFailed => RegistrationForm {
                is_bottom_sheet_shown: true,
                ..state
            },
            FormIntent::CredentialsReset => RegistrationForm {
                is_policy_box_checked: false,
                is_bottom_sheet_shown: false,
                ..state
            },
            FormIntent::MobileNumberRejected => RegistrationForm {
                is_mobile_number_valid: false,
                mobile_number_error: Some("Number Already Used".to_string()),
                ..state
            },
            FormIntent::RegistrationSucceeded { raw_response } => RegistrationForm {
                is_registration_success: true,
                last_response: Some(raw_response),
                ..state
            },
            FormIntent::PhoneNumberHydrated(number) => RegistrationForm {
                mobile_number: number,
                ..state
            },
        }
    }
}

fn set_mobile_number(mut form: RegistrationForm, raw: &str) -> RegistrationForm {
    form.mobile_number = validate::normalize_mobile_number(raw);
    if raw.is_empty() {
        form.is_mobile_number_valid = false;
        form.mobile_number_error = None;
    } else if !validate::is_valid_mobile_number(&form.mobile_number) {
        form.is_mobile_number_valid = false;
        form.mobile_number_error = Some("Please enter a valid mobile number".to_string());
    } else {
        form.is_mobile_number_valid = true;
        form.mobile_number_error = None;
    }
    form
}

fn set_first_name(mut form: RegistrationForm, raw: &str) -> RegistrationForm {
    form.first_name = validate::title_case(raw);
    if form.first_name.is_empty() {
        form.is_first_name_valid = false;
        form.first_name_error = Some("First name can't be empty.".to_string());
        form.first_name_border = BorderState::Attention;
    } else {
        form.is_first_name_valid = true;
        form.first_name_error = None;
        form.first_name_border = BorderState::Neutral;
    }
    form
}

fn set_last_name(mut form: RegistrationForm, raw: &str) -> RegistrationForm {
    form.last_name = validate::title_case(raw);
    if form.last_name.is_empty() {
        form.is_last_name_valid = false;
        form.last_name_error = Some("Last name can't be empty.".to_string());
        form.last_name_border = BorderState::Attention;
    } else {
        form.is_last_name_valid = true;
        form.last_name_error = None;
        form.last_name_border = BorderState::Neutral;
    }
    form
}

fn set_password(mut form: RegistrationForm, raw: String) -> RegistrationForm {
    form.password = raw;
    form.checklist = validate::password_checklist(&form.password);
    form.is_password_valid = form.checklist.all_passed();
    form.password_error = if form.is_password_valid {
        None
    } else {
        Some("Fulfill password requirements".to_string())
    };
    form
}

fn set_confirm_password(mut form: RegistrationForm, raw: String) -> RegistrationForm {
    form.confirm_password = raw;
    if form.confirm_password == form.password {
        form.password_error = None;
        form.password_border = BorderState::Neutral;
    } else if !form.is_password_valid {
        form.password_error = Some("Fulfill password requirements".to_string());
        form.password_border = BorderState::Attention;
    } else {
        form.password_error = Some("Password not matched".to_string());
        form.password_border = BorderState::Attention;
    }
    form
}

fn set_focus(mut form: RegistrationForm, field: &str, focused: bool) -> RegistrationForm {
    match field.to_lowercase().as_str() {
        "firstname" => form.is_first_name_focused = focused,
        "lastname" => form.is_last_name_focused = focused,
        // Unknown field names are a no-op, not an error.
        _ => {}
    }
    form
}
