//! The closed set of intents the presentation layer can dispatch.

use crate::api::RegistrationRequest;
use crate::mvi::Intent;

/// One user- or system-triggered event routed into the orchestrator.
///
/// The set is closed: every variant maps to exactly one handler, so an
/// unsupported intent is a compile-time impossibility rather than a
/// runtime error.
#[derive(Debug, Clone)]
pub enum RegisterIntent {
    /// Raw mobile-number keystrokes from the number screen.
    EnterMobileNumber { mobile_number: String },

    /// Ask the service to send an OTP to this number.
    RequestOtp { mobile_number: String },

    /// Policy/consent checkbox toggled.
    AgreeToPolicy { checked: bool },

    /// Consent bottom-sheet resolved successfully.
    ValidationSucceeded,

    /// Consent bottom-sheet must be shown.
    ValidationFailed,

    /// Clear the consent sub-flow flags.
    ResetCredentials,

    /// OTP digits entered; moves the flow to the input phase.
    EnterOtp { otp: String },

    /// Re-request a code for the given number while in the input phase.
    ResendOtp { phone_number: String },

    /// Verify the entered OTP.
    SubmitOtp,

    EnterFirstName { first_name: String },
    EnterLastName { last_name: String },
    EnterPassword { password: String },
    EnterConfirmPassword { confirm_password: String },

    /// A named text field gained or lost focus.
    FieldFocusChanged { field: String, focused: bool },

    /// Submit the completed profile. Gated on
    /// [`RegistrationForm::can_submit`](crate::form::RegistrationForm::can_submit)
    /// at the presentation boundary.
    SubmitRegistration { request: RegistrationRequest },

    /// Re-seed the stored number when a later screen rehydrates the form.
    HydratePhoneNumber { phone_number: String },
}

impl Intent for RegisterIntent {}
