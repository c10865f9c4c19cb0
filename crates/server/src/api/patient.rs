use dioxus::prelude::*;
use shared_types::{CreateUserOutcome, PatientIntake};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Create the patient account behind an intake, or hand back the existing
/// one when the email is already known and reuse is enabled.
#[cfg_attr(feature = "server", tracing::instrument(skip(intake)))]
#[server]
pub async fn create_user(intake: PatientIntake) -> Result<CreateUserOutcome, ServerFnError> {
    let intake = intake
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let config = crate::config::app_config();
    let outcome =
        crate::directory::PatientDirectory::global().register(&intake, &config.registration);
    Ok(outcome)
}
