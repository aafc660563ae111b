//! Wire types for the registration service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::RegistrationForm;

/// Application-level success code. Anything else is a failure even on a
/// 2xx transport status.
pub const SUCCESS_CODE: i32 = 1;

/// Envelope every registration-service endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    /// Opaque payload; the core stores it, it never inspects it.
    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Completed profile submitted to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub password: String,
    pub otp: String,
}

impl RegistrationRequest {
    /// Build the request from the current form snapshot.
    pub fn from_form(form: &RegistrationForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            mobile_number: form.mobile_number.clone(),
            password: form.password.clone(),
            otp: form.otp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn code_one_is_success() {
        let response = ApiResponse {
            code: 1,
            data: Value::Null,
        };
        assert!(response.is_success());

        let response = ApiResponse {
            code: 0,
            data: Value::Null,
        };
        assert!(!response.is_success());
    }

    #[test]
    fn envelope_tolerates_missing_data() {
        let response: ApiResponse = serde_json::from_value(json!({"code": 1})).unwrap();
        assert_eq!(response.data, Value::Null);
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = RegistrationRequest {
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            mobile_number: "0912345678".into(),
            password: "Abc123!".into(),
            otp: "123456".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["mobileNumber"], "0912345678");
    }
}
