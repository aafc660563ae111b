//! Reducer for the flow state machine.

use crate::mvi::Reducer;

use super::intent::FlowIntent;
use super::state::FlowState;

/// Reducer for flow phase transitions.
///
/// Preconditions (submitting or resending outside the input phase) are
/// checked by the orchestrator, which feeds the outcome in as a `Failed`
/// intent; the reduction itself is an unconditional phase replacement.
pub struct FlowReducer;

impl Reducer for FlowReducer {
    type State = FlowState;
    type Intent = FlowIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlowIntent::CallStarted => FlowState::Loading,
            FlowIntent::OtpSent { payload } => FlowState::OtpSent { payload },
            FlowIntent::OtpEntered { otp, mobile_number } => FlowState::OtpInput {
                otp,
                mobile_number,
                show_resend_section: false,
            },
            FlowIntent::OtpVerified { payload } => FlowState::OtpVerified { payload },
            FlowIntent::ResendConfirmed { otp, mobile_number } => FlowState::OtpInput {
                otp,
                mobile_number,
                show_resend_section: true,
            },
            FlowIntent::Failed { message } => FlowState::Error { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_started_enters_loading() {
        let state = FlowReducer::reduce(FlowState::Idle, FlowIntent::CallStarted);
        assert!(state.is_loading());
    }

    #[test]
    fn otp_entered_snapshots_number_and_hides_resend() {
        let state = FlowReducer::reduce(
            FlowState::Idle,
            FlowIntent::OtpEntered {
                otp: "123456".into(),
                mobile_number: "0912345678".into(),
            },
        );
        assert_eq!(
            state,
            FlowState::OtpInput {
                otp: "123456".into(),
                mobile_number: "0912345678".into(),
                show_resend_section: false,
            }
        );
    }

    #[test]
    fn resend_confirmed_restores_input_with_resend_shown() {
        let state = FlowReducer::reduce(
            FlowState::Loading,
            FlowIntent::ResendConfirmed {
                otp: "123456".into(),
                mobile_number: "0912345678".into(),
            },
        );
        match state {
            FlowState::OtpInput {
                show_resend_section,
                ..
            } => assert!(show_resend_section),
            other => panic!("expected OtpInput, got {other:?}"),
        }
    }

    #[test]
    fn success_and_failure_are_unconditional() {
        let state = FlowReducer::reduce(
            FlowState::Loading,
            FlowIntent::OtpVerified {
                payload: json!({"token": "t"}),
            },
        );
        assert!(matches!(state, FlowState::OtpVerified { .. }));

        let state = FlowReducer::reduce(
            state,
            FlowIntent::Failed {
                message: "Verification Failed".into(),
            },
        );
        assert_eq!(state.error_message(), Some("Verification Failed"));
    }
}
