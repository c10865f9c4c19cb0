use dioxus::prelude::ServerFnError;
use shared_types::{AppError, PatientIntake};

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for re-validating payloads that arrive from the client.
pub trait ValidateRequest {
    type Valid;

    fn validate_request(&self) -> Result<Self::Valid, AppError>;
}

impl ValidateRequest for PatientIntake {
    type Valid = PatientIntake;

    fn validate_request(&self) -> Result<PatientIntake, AppError> {
        self.revalidate()
            .map_err(|fields| AppError::validation("Validation failed", fields))
    }
}
