//! Client-side registration orchestrator for an account-signup flow.
//!
//! Collects a mobile number, verifies it through an OTP exchange, collects
//! name and password under complexity rules, and submits the completed
//! profile to a remote registration endpoint. The crate is the core of
//! that flow: a closed intent set routed over two independently observable
//! stores — the synchronous [`form::RegistrationForm`] and the
//! asynchronous [`flow::FlowState`] machine. Rendering is somebody else's
//! job: the presentation layer dispatches [`RegisterIntent`]s and draws
//! whatever the stores currently hold.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use enroll::{ApiConfig, HttpRegistrationApi, RegisterIntent, RegistrationOrchestrator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpRegistrationApi::new(&ApiConfig::load()?)?;
//! let orchestrator = RegistrationOrchestrator::new(Arc::new(api));
//!
//! orchestrator.dispatch(RegisterIntent::EnterMobileNumber {
//!     mobile_number: "912345678".into(),
//! });
//! let form = orchestrator.form();
//! assert!(form.is_mobile_number_valid);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod flow;
pub mod form;
pub mod mvi;
pub mod orchestrator;

pub use api::{ApiError, ApiResponse, HttpRegistrationApi, RegistrationApi, RegistrationRequest};
pub use config::{ApiConfig, ConfigError};
pub use flow::FlowState;
pub use form::{BorderState, PasswordChecklist, RegistrationForm};
pub use orchestrator::{RegisterIntent, RegistrationOrchestrator};
