//! State for the OTP/registration flow.

use serde_json::Value;

use crate::mvi::UiState;

/// Phase of the asynchronous OTP pipeline. Exactly one is active at a time.
///
/// `Idle` is the only initial state. `OtpVerified` and `Error` are terminal
/// with respect to automatic transitions; leaving them takes a new explicit
/// intent.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState {
    /// Nothing in flight.
    #[default]
    Idle,

    /// A network call is in flight.
    Loading,

    /// The server accepted the number and sent a code.
    OtpSent {
        /// Opaque server payload (reference id, expiry, whatever it sends).
        payload: Value,
    },

    /// The user is entering (or resending) a code.
    OtpInput {
        otp: String,
        /// Number snapshotted at entry time, so the verify call and the
        /// form cannot drift apart mid-phase.
        mobile_number: String,
        /// Whether the resend affordance has been used successfully.
        show_resend_section: bool,
    },

    /// Terminal success for the OTP phase.
    OtpVerified { payload: Value },

    /// Terminal failure for the triggering call.
    Error { message: String },
}

impl UiState for FlowState {}

impl FlowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Terminal with respect to automatic transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::OtpVerified { .. } | Self::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}
