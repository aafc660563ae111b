//! Scripted collaborator doubles for orchestrator tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use enroll::{ApiError, ApiResponse, RegistrationApi, RegistrationRequest};

/// Route tracing output through the test harness. Honors `RUST_LOG`;
/// safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A captured collaborator call for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SendOtp { mobile_number: String },
    VerifyOtp { mobile_number: String, otp: String },
    RegisterAccount { mobile_number: String },
}

/// One scripted outcome, consumed in dispatch order.
pub enum Outcome {
    Respond(ApiResponse),
    Fail(ApiError),
}

/// Collaborator that replays a script of outcomes and records every call.
pub struct ScriptedApi {
    script: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue an application-level response.
    pub fn respond(self, code: i32, data: Value) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Outcome::Respond(ApiResponse { code, data }));
        self
    }

    /// Queue a successful response with a stock payload.
    pub fn respond_ok(self) -> Self {
        self.respond(1, json!({"reference": "test"}))
    }

    /// Queue a transport-level failure.
    pub fn fail(self, err: ApiError) -> Self {
        self.script.lock().unwrap().push_back(Outcome::Fail(err));
        self
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next(&self) -> Result<ApiResponse, ApiError> {
        match self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("collaborator called with an empty script")
        {
            Outcome::Respond(response) => Ok(response),
            Outcome::Fail(err) => Err(err),
        }
    }
}

#[async_trait]
impl RegistrationApi for ScriptedApi {
    async fn send_otp(&self, mobile_number: &str) -> Result<ApiResponse, ApiError> {
        self.record(Call::SendOtp {
            mobile_number: mobile_number.to_string(),
        });
        self.next()
    }

    async fn verify_otp(&self, mobile_number: &str, otp: &str) -> Result<ApiResponse, ApiError> {
        self.record(Call::VerifyOtp {
            mobile_number: mobile_number.to_string(),
            otp: otp.to_string(),
        });
        self.next()
    }

    async fn register_account(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.record(Call::RegisterAccount {
            mobile_number: request.mobile_number.clone(),
        });
        self.next()
    }
}

/// Collaborator whose `send_otp` blocks until released, for exercising
/// overlapping-call behavior.
pub struct GatedApi {
    release: tokio::sync::Semaphore,
}

impl GatedApi {
    pub fn new() -> Self {
        Self {
            release: tokio::sync::Semaphore::new(0),
        }
    }

    /// Let one blocked `send_otp` proceed.
    pub fn release_one(&self) {
        self.release.add_permits(1);
    }
}

#[async_trait]
impl RegistrationApi for GatedApi {
    async fn send_otp(&self, _mobile_number: &str) -> Result<ApiResponse, ApiError> {
        self.release.acquire().await.expect("gate closed").forget();
        Ok(ApiResponse {
            code: 1,
            data: json!({"reference": "gated"}),
        })
    }

    async fn verify_otp(&self, _mobile_number: &str, _otp: &str) -> Result<ApiResponse, ApiError> {
        panic!("unexpected verify_otp call");
    }

    async fn register_account(
        &self,
        _request: &RegistrationRequest,
    ) -> Result<ApiResponse, ApiError> {
        panic!("unexpected register_account call");
    }
}
