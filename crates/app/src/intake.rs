//! Submission flow for the patient intake form.
//!
//! `IntakeSubmission` validates a draft, calls the user-creation service
//! once, and navigates to the registration step on success. The service,
//! the navigator and the loading flag are traits so the flow runs the same
//! against the Dioxus runtime and against test doubles.

use dioxus::prelude::*;
use shared_types::{
    AppError, CreateUserOutcome, FieldErrors, IntakeDraft, IntakeField, PatientIntake,
    GENERIC_FAILURE,
};
use std::future::Future;

use crate::routes::Route;

/// Remote procedure that turns a validated intake into a patient account.
pub trait PatientService {
    fn create_user(
        &self,
        intake: PatientIntake,
    ) -> impl Future<Output = Result<CreateUserOutcome, AppError>>;
}

/// Client-side navigation.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Shared "submission in flight" flag. Clones observe the same state.
pub trait LoadingFlag: Clone {
    fn is_loading(&self) -> bool;
    fn set_loading(&mut self, loading: bool);
}

impl LoadingFlag for Signal<bool> {
    fn is_loading(&self) -> bool {
        *self.peek()
    }

    fn set_loading(&mut self, loading: bool) {
        self.set(loading);
    }
}

/// Raises the flag on creation and lowers it on drop, so every exit from
/// a submission (including cancellation and panics) clears it.
struct LoadingGuard<L: LoadingFlag> {
    flag: L,
}

impl<L: LoadingFlag> LoadingGuard<L> {
    fn raise(mut flag: L) -> Self {
        flag.set_loading(true);
        Self { flag }
    }
}

impl<L: LoadingFlag> Drop for LoadingGuard<L> {
    fn drop(&mut self) {
        self.flag.set_loading(false);
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft failed validation; nothing was sent.
    Invalid(FieldErrors),
    /// Another submission was still in flight; nothing was sent.
    Busy,
    /// The account exists and navigation to this path was requested.
    Redirected(String),
    /// The service answered but did not create an account.
    NotCreated(String),
    /// The service call failed. Already logged.
    Failed(AppError),
}

pub struct IntakeSubmission<S, N, L> {
    service: S,
    navigator: N,
    loading: L,
}

impl<S, N, L> IntakeSubmission<S, N, L>
where
    S: PatientService,
    N: Navigate,
    L: LoadingFlag,
{
    pub fn new(service: S, navigator: N, loading: L) -> Self {
        Self {
            service,
            navigator,
            loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn submit(&self, draft: &IntakeDraft) -> SubmitOutcome {
        if self.loading.is_loading() {
            tracing::debug!("intake submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        }

        let intake = match draft.validate_intake() {
            Ok(intake) => intake,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let _loading = LoadingGuard::raise(self.loading.clone());

        match self.service.create_user(intake).await {
            Ok(CreateUserOutcome::Created(user)) => {
                let path = user.registration_path();
                tracing::info!(user_id = %user.id, "patient created, continuing to registration");
                self.navigator.navigate(&path);
                SubmitOutcome::Redirected(path)
            }
            Ok(CreateUserOutcome::NotCreated { reason }) => {
                tracing::warn!(%reason, "patient account was not created");
                SubmitOutcome::NotCreated(reason)
            }
            Err(error) => {
                tracing::error!(%error, "patient creation failed");
                SubmitOutcome::Failed(error)
            }
        }
    }
}

/// What the intake page shows: the draft, inline field errors and an
/// optional form-level notice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeFormState {
    pub draft: IntakeDraft,
    pub field_errors: FieldErrors,
    pub notice: Option<String>,
}

impl IntakeFormState {
    pub fn error(&self, field: IntakeField) -> Option<String> {
        self.field_errors.get(field.as_str()).cloned()
    }

    /// Store a new value. Any error already shown for the field is stale.
    pub fn update(&mut self, field: IntakeField, value: String) {
        self.draft.set_value(field, value);
        self.field_errors.remove(field.as_str());
    }

    /// Re-check a single field when it loses focus. Leaving an empty field
    /// that shows no error does not flag it.
    pub fn blur(&mut self, field: IntakeField) {
        let key = field.as_str();
        if self.draft.value(field).is_empty() && !self.field_errors.contains_key(key) {
            return;
        }
        match self.draft.field_error(field) {
            Some(message) => {
                self.field_errors.insert(key.to_string(), message);
            }
            None => {
                self.field_errors.remove(key);
            }
        }
    }

    /// Reflect a finished submit attempt.
    pub fn apply(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Invalid(errors) => self.field_errors = errors,
            SubmitOutcome::NotCreated(_) => self.notice = Some(GENERIC_FAILURE.to_string()),
            SubmitOutcome::Failed(error) if !error.field_errors.is_empty() => {
                self.field_errors = error.field_errors;
            }
            SubmitOutcome::Failed(_) | SubmitOutcome::Busy | SubmitOutcome::Redirected(_) => {}
        }
    }
}

/// Calls the `create_user` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerPatientService;

impl PatientService for ServerPatientService {
    async fn create_user(&self, intake: PatientIntake) -> Result<CreateUserOutcome, AppError> {
        server::api::create_user(intake)
            .await
            .map_err(|e| AppError::from_transport(&e.to_string()))
    }
}

/// Pushes paths onto the application router.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterNavigator;

impl Navigate for RouterNavigator {
    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                navigator().push(route);
            }
            Err(_) => tracing::error!(path, "no route matches navigation target"),
        }
    }
}
