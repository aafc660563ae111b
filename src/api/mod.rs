//! Collaborator contract for the remote registration service, plus the
//! HTTP implementation of it.

mod client;
mod error;
mod types;

pub use client::{HttpRegistrationApi, RegistrationApi};
pub use error::ApiError;
pub use types::{ApiResponse, RegistrationRequest, SUCCESS_CODE};
