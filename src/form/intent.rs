//! Intents for the registration form store.

use crate::mvi::Intent;

/// Intents that can be dispatched to the form store.
///
/// Most variants are raw field edits coming straight from the presentation
/// layer; the last three are system events committed by the flow handlers
/// (a rejected send, a completed registration, a re-seeded number).
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Raw mobile-number input; normalized before storage.
    MobileNumberChanged(String),

    /// Raw first-name input; title-cased before storage.
    FirstNameChanged(String),

    /// Raw last-name input; title-cased before storage.
    LastNameChanged(String),

    /// Raw password input; recomputes the full checklist.
    PasswordChanged(String),

    /// Raw confirmation input; compared against the stored password.
    ConfirmPasswordChanged(String),

    /// OTP digits recorded while the flow is in the input phase.
    OtpChanged(String),

    /// A named text field gained or lost focus. Unknown names are a no-op.
    FocusChanged { field: String, focused: bool },

    /// Policy/consent checkbox toggled.
    PolicyChanged(bool),

    /// Consent bottom-sheet sub-flow resolved successfully.
    ValidationSucceeded,

    /// Consent bottom-sheet sub-flow must be shown again.
    ValidationFailed,

    /// Clear the consent sub-flow flags.
    CredentialsReset,

    /// Server rejected the number during an OTP send.
    MobileNumberRejected,

    /// Account registration succeeded; keeps the raw response for diagnostics.
    RegistrationSucceeded { raw_response: String },

    /// Seed the stored number verbatim (no normalization, no validation).
    PhoneNumberHydrated(String),
}

impl Intent for FormIntent {}
