//! Intents for the flow state machine.
//!
//! These are system events: the orchestrator's handlers translate user
//! dispatches and network outcomes into this set and reduce them purely.

use serde_json::Value;

use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FlowIntent {
    /// A network-backed handler started its call.
    CallStarted,

    /// The send-OTP call succeeded.
    OtpSent { payload: Value },

    /// The user entered a code; valid from any state.
    OtpEntered { otp: String, mobile_number: String },

    /// The verify-OTP call succeeded.
    OtpVerified { payload: Value },

    /// A resend succeeded; restores the snapshotted input phase with the
    /// resend section shown.
    ResendConfirmed { otp: String, mobile_number: String },

    /// Any failure: application-level, transport, or precondition.
    Failed { message: String },
}

impl Intent for FlowIntent {}
