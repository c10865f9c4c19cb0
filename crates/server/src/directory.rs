use chrono::Utc;
use shared_types::{CreateUserOutcome, CreatedUser, PatientIntake, RegistrationConfig};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use uuid::Uuid;

pub const EMAIL_TAKEN: &str = "An account with this email already exists";

static DIRECTORY: OnceLock<PatientDirectory> = OnceLock::new();

/// In-memory patient accounts, keyed by lower-cased email.
#[derive(Debug, Default)]
pub struct PatientDirectory {
    users: Mutex<HashMap<String, CreatedUser>>,
}

impl PatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide directory used by the server functions.
    pub fn global() -> &'static PatientDirectory {
        DIRECTORY.get_or_init(PatientDirectory::new)
    }

    /// Create an account for `intake`, or resolve a known email according
    /// to `config`.
    pub fn register(
        &self,
        intake: &PatientIntake,
        config: &RegistrationConfig,
    ) -> CreateUserOutcome {
        let key = intake.email().to_lowercase();
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = users.get(&key) {
            if config.reuse_existing_email {
                tracing::info!(user_id = %existing.id, "returning patient matched by email");
                return CreateUserOutcome::Created(existing.clone());
            }
            tracing::warn!(user_id = %existing.id, "intake refused, email already registered");
            return CreateUserOutcome::NotCreated {
                reason: EMAIL_TAKEN.to_string(),
            };
        }

        let user = CreatedUser {
            id: Uuid::new_v4().simple().to_string(),
            name: intake.name().to_string(),
            email: intake.email().to_string(),
            phone: intake.phone().to_string(),
            created_at: Utc::now(),
        };
        users.insert(key, user.clone());
        tracing::info!(user_id = %user.id, "patient account created");
        CreateUserOutcome::Created(user)
    }
}

#[cfg(test)]
impl PatientDirectory {
    fn len(&self) -> usize {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
