//! Intent router and asynchronous flow handlers.
//!
//! One orchestrator instance serves one registration attempt. The
//! presentation layer dispatches [`RegisterIntent`]s; field edits reduce
//! the form store synchronously, network-backed intents spawn a task that
//! drives the flow machine through the collaborator call.

mod intent;

pub use intent::RegisterIntent;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::api::{RegistrationApi, RegistrationRequest};
use crate::flow::{FlowIntent, FlowReducer, FlowState};
use crate::form::{FormIntent, FormReducer, RegistrationForm};
use crate::mvi::StateStore;

/// Orchestrates the signup flow over two observable stores.
///
/// Network handlers run on the ambient Tokio runtime, so [`dispatch`]
/// must be called from within one.
///
/// [`dispatch`]: RegistrationOrchestrator::dispatch
pub struct RegistrationOrchestrator {
    api: Arc<dyn RegistrationApi>,
    form: Arc<StateStore<RegistrationForm>>,
    flow: Arc<StateStore<FlowState>>,
    /// Generation of the latest flow-affecting dispatch. Tasks capture the
    /// generation they started under and drop outcomes that a newer
    /// dispatch has superseded.
    flow_generation: Arc<AtomicU64>,
}

impl RegistrationOrchestrator {
    pub fn new(api: Arc<dyn RegistrationApi>) -> Self {
        Self {
            api,
            form: Arc::new(StateStore::new()),
            flow: Arc::new(StateStore::new()),
            flow_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current form snapshot.
    pub fn form(&self) -> RegistrationForm {
        self.form.get()
    }

    /// Current flow phase.
    pub fn flow(&self) -> FlowState {
        self.flow.get()
    }

    /// Change notifications for the form store.
    pub fn subscribe_form(&self) -> watch::Receiver<RegistrationForm> {
        self.form.subscribe()
    }

    /// Change notifications for the flow machine.
    pub fn subscribe_flow(&self) -> watch::Receiver<FlowState> {
        self.flow.subscribe()
    }

    /// Single entry point: route an intent to exactly one handler.
    ///
    /// Performs no validation itself.
    pub fn dispatch(&self, intent: RegisterIntent) {
        match intent {
            RegisterIntent::EnterMobileNumber { mobile_number } => self
                .form
                .apply::<FormReducer>(FormIntent::MobileNumberChanged(mobile_number)),
            RegisterIntent::RequestOtp { mobile_number } => self.request_otp(mobile_number),
            RegisterIntent::AgreeToPolicy { checked } => self
                .form
                .apply::<FormReducer>(FormIntent::PolicyChanged(checked)),
            RegisterIntent::ValidationSucceeded => {
                self.form.apply::<FormReducer>(FormIntent::ValidationSucceeded)
            }
            RegisterIntent::ValidationFailed => {
                self.form.apply::<FormReducer>(FormIntent::ValidationFailed)
            }
            RegisterIntent::ResetCredentials => {
                self.form.apply::<FormReducer>(FormIntent::CredentialsReset)
            }
            RegisterIntent::EnterOtp { otp } => self.enter_otp(otp),
            RegisterIntent::ResendOtp { phone_number } => self.resend_otp(phone_number),
            RegisterIntent::SubmitOtp => self.submit_otp(),
            RegisterIntent::EnterFirstName { first_name } => self
                .form
                .apply::<FormReducer>(FormIntent::FirstNameChanged(first_name)),
            RegisterIntent::EnterLastName { last_name } => self
                .form
                .apply::<FormReducer>(FormIntent::LastNameChanged(last_name)),
            RegisterIntent::EnterPassword { password } => self
                .form
                .apply::<FormReducer>(FormIntent::PasswordChanged(password)),
            RegisterIntent::EnterConfirmPassword { confirm_password } => self
                .form
                .apply::<FormReducer>(FormIntent::ConfirmPasswordChanged(confirm_password)),
            RegisterIntent::FieldFocusChanged { field, focused } => self
                .form
                .apply::<FormReducer>(FormIntent::FocusChanged { field, focused }),
            RegisterIntent::SubmitRegistration { request } => self.submit_registration(request),
            RegisterIntent::HydratePhoneNumber { phone_number } => self
                .form
                .apply::<FormReducer>(FormIntent::PhoneNumberHydrated(phone_number)),
        }
    }

    /// Advance the flow generation; outcomes of older tasks become stale.
    fn next_generation(&self) -> u64 {
        self.flow_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn request_otp(&self, mobile_number: String) {
        let generation = self.next_generation();
        let api = Arc::clone(&self.api);
        let form = Arc::clone(&self.form);
        let flow = Arc::clone(&self.flow);
        let guard = Arc::clone(&self.flow_generation);

        tokio::spawn(async move {
            flow.apply::<FlowReducer>(FlowIntent::CallStarted);
            let outcome = api.send_otp(&mobile_number).await;

            if guard.load(Ordering::SeqCst) != generation {
                debug!(generation, "discarding stale send-otp outcome");
                return;
            }

            match outcome {
                Ok(response) if response.is_success() => {
                    debug!("otp sent");
                    flow.apply::<FlowReducer>(FlowIntent::OtpSent {
                        payload: response.data,
                    });
                }
                Ok(response) => {
                    warn!(code = response.code, "otp send rejected");
                    form.apply::<FormReducer>(FormIntent::MobileNumberRejected);
                    flow.apply::<FlowReducer>(FlowIntent::Failed {
                        message: "Sending Failed".to_string(),
                    });
                }
                Err(err) => {
                    warn!(error = %err, "otp send call failed");
                    flow.apply::<FlowReducer>(FlowIntent::Failed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    /// Pure transition, valid from any state: record the code on the form
    /// and snapshot the current number into the input phase.
    fn enter_otp(&self, otp: String) {
        self.next_generation();
        let mobile_number = self.form.get().mobile_number;
        self.form
            .apply::<FormReducer>(FormIntent::OtpChanged(otp.clone()));
        self.flow
            .apply::<FlowReducer>(FlowIntent::OtpEntered { otp, mobile_number });
    }

    fn submit_otp(&self) {
        let generation = self.next_generation();

        if !matches!(self.flow.get(), FlowState::OtpInput { .. }) {
            self.flow.apply::<FlowReducer>(FlowIntent::Failed {
                message: "Invalid state for submitting OTP".to_string(),
            });
            return;
        }

        let snapshot = self.form.get();
        let api = Arc::clone(&self.api);
        let flow = Arc::clone(&self.flow);
        let guard = Arc::clone(&self.flow_generation);

        tokio::spawn(async move {
            flow.apply::<FlowReducer>(FlowIntent::CallStarted);
            let outcome = api
                .verify_otp(&snapshot.mobile_number, &snapshot.otp)
                .await;

            if guard.load(Ordering::SeqCst) != generation {
                debug!(generation, "discarding stale verify-otp outcome");
                return;
            }

            match outcome {
                Ok(response) if response.is_success() => {
                    debug!("otp verified");
                    flow.apply::<FlowReducer>(FlowIntent::OtpVerified {
                        payload: response.data,
                    });
                }
                Ok(response) => {
                    warn!(code = response.code, "otp verification rejected");
                    flow.apply::<FlowReducer>(FlowIntent::Failed {
                        message: "Verification Failed".to_string(),
                    });
                }
                Err(err) => {
                    warn!(error = %err, "otp verification call failed");
                    flow.apply::<FlowReducer>(FlowIntent::Failed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn resend_otp(&self, phone_number: String) {
        let generation = self.next_generation();

        // Snapshot the input phase so it can be restored after the call.
        let (otp, mobile_number) = match self.flow.get() {
            FlowState::OtpInput {
                otp, mobile_number, ..
            } => (otp, mobile_number),
            _ => {
                self.flow.apply::<FlowReducer>(FlowIntent::Failed {
                    message: "Invalid state for resending OTP".to_string(),
                });
                return;
            }
        };

        let api = Arc::clone(&self.api);
        let flow = Arc::clone(&self.flow);
        let guard = Arc::clone(&self.flow_generation);

        tokio::spawn(async move {
            flow.apply::<FlowReducer>(FlowIntent::CallStarted);
            let outcome = api.send_otp(&phone_number).await;

            if guard.load(Ordering::SeqCst) != generation {
                debug!(generation, "discarding stale resend-otp outcome");
                return;
            }

            match outcome {
                Ok(response) if response.is_success() => {
                    debug!("otp resent");
                    flow.apply::<FlowReducer>(FlowIntent::ResendConfirmed { otp, mobile_number });
                }
                Ok(response) => {
                    warn!(code = response.code, "otp resend rejected");
                    flow.apply::<FlowReducer>(FlowIntent::Failed {
                        message: "Resending Failed".to_string(),
                    });
                }
                Err(err) => {
                    warn!(error = %err, "otp resend call failed");
                    flow.apply::<FlowReducer>(FlowIntent::Failed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    /// Independent of the flow phase. Failures are logged and swallowed:
    /// neither store changes, matching the source behavior this flow
    /// reimplements.
    fn submit_registration(&self, request: RegistrationRequest) {
        let api = Arc::clone(&self.api);
        let form = Arc::clone(&self.form);

        tokio::spawn(async move {
            match api.register_account(&request).await {
                Ok(response) if response.is_success() => {
                    debug!("registration accepted");
                    form.apply::<FormReducer>(FormIntent::RegistrationSucceeded {
                        raw_response: format!("{response:?}"),
                    });
                }
                Ok(response) => {
                    warn!(code = response.code, "registration rejected");
                }
                Err(err) => {
                    error!(error = %err, "registration call failed");
                }
            }
        });
    }
}
