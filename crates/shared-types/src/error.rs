use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Per-field validation messages, keyed by the field's wire name.
pub type FieldErrors = HashMap<String, String>;

/// Form-level notice shown when a submission reaches the service but no
/// account is created.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    ValidationError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: FieldErrors,
}

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"ValidationError",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Rebuild an AppError from any transport failure, wrapping
    /// unstructured messages as internal errors.
    pub fn from_transport(error_message: &str) -> Self {
        Self::from_server_error(error_message)
            .unwrap_or_else(|| Self::internal(error_message.to_string()))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

/// Collapse validator output to one message per field.
pub fn field_errors_from(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut field_errors = HashMap::new();
    for (field, errs) in errors.field_errors() {
        if let Some(first) = errs.first() {
            let msg = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            field_errors.insert(field.to_string(), msg);
        }
    }
    field_errors
}
