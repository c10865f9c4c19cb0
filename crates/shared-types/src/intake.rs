//! Patient intake schema shared by the form (client) and the
//! user-creation server function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::error::{field_errors_from, FieldErrors};

pub const NAME_MAX_CHARS: usize = 50;
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Fields of the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeField {
    Name,
    Email,
    Phone,
}

impl IntakeField {
    /// Key used in `FieldErrors` and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeField::Name => "name",
            IntakeField::Email => "email",
            IntakeField::Phone => "phone",
        }
    }
}

/// Raw, unvalidated values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct IntakeDraft {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

impl IntakeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn value(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Name => &self.name,
            IntakeField::Email => &self.email,
            IntakeField::Phone => &self.phone,
        }
    }

    pub fn set_value(&mut self, field: IntakeField, value: String) {
        match field {
            IntakeField::Name => self.name = value,
            IntakeField::Email => self.email = value,
            IntakeField::Phone => self.phone = value,
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// Run the full schema. Surrounding whitespace is ignored and stripped
    /// from the returned intake.
    pub fn validate_intake(&self) -> Result<PatientIntake, FieldErrors> {
        let trimmed = self.trimmed();
        match trimmed.validate() {
            Ok(()) => Ok(PatientIntake {
                name: trimmed.name,
                email: trimmed.email,
                phone: trimmed.phone,
            }),
            Err(errors) => Err(field_errors_from(&errors)),
        }
    }

    /// Error for a single field, used for blur-time feedback.
    pub fn field_error(&self, field: IntakeField) -> Option<String> {
        self.validate_intake()
            .err()
            .and_then(|mut errors| errors.remove(field.as_str()))
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.trim().chars().count();
    if chars == 0 {
        return Err(rule_error("required", "Name is required"));
    }
    if chars > NAME_MAX_CHARS {
        return Err(rule_error("length", "Name must be at most 50 characters"));
    }
    Ok(())
}

/// Accepts an optional leading `+` followed by digits and the usual
/// separators (space, dash, dot) plus at most one balanced `(...)` group.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let invalid = || rule_error("phone", "Invalid phone number");
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0;
    let mut open = false;
    let mut grouped = false;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' => {}
            '(' if !open && !grouped => open = true,
            ')' if open => {
                open = false;
                grouped = true;
            }
            _ => return Err(invalid()),
        }
    }
    if !open && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// A validated intake. Only `IntakeDraft::validate_intake` builds one on
/// the client; the server re-validates whatever it deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientIntake {
    name: String,
    email: String,
    phone: String,
}

impl PatientIntake {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Re-run the schema on a payload that arrived over the wire.
    pub fn revalidate(&self) -> Result<PatientIntake, FieldErrors> {
        IntakeDraft::from(self.clone()).validate_intake()
    }
}

impl From<PatientIntake> for IntakeDraft {
    fn from(intake: PatientIntake) -> Self {
        Self {
            name: intake.name,
            email: intake.email,
            phone: intake.phone,
        }
    }
}

/// A patient account returned by the user-creation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
}

impl CreatedUser {
    /// Route of the registration step for this patient.
    pub fn registration_path(&self) -> String {
        format!("/patients/{}/register", self.id)
    }
}

/// Result of a user-creation attempt that reached the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CreateUserOutcome {
    Created(CreatedUser),
    NotCreated { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> IntakeDraft {
        IntakeDraft::new("Jane Doe", "jane@example.com", "0 (22) 00-80-00")
    }

    #[test]
    fn default_draft_is_empty() {
        let draft = IntakeDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.phone, "");
    }

    #[test]
    fn valid_draft_produces_intake() {
        let intake = jane().validate_intake().unwrap();
        assert_eq!(intake.name(), "Jane Doe");
        assert_eq!(intake.email(), "jane@example.com");
        assert_eq!(intake.phone(), "0 (22) 00-80-00");
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let draft = IntakeDraft::new("  Jane Doe ", " jane@example.com ", " +37369123456 ");
        let intake = draft.validate_intake().unwrap();
        assert_eq!(intake.name(), "Jane Doe");
        assert_eq!(intake.email(), "jane@example.com");
        assert_eq!(intake.phone(), "+37369123456");
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = IntakeDraft::default().validate_intake().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["email"], "Invalid email address");
        assert_eq!(errors["phone"], "Invalid phone number");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut draft = jane();
        draft.name = "   ".into();
        assert_eq!(
            draft.field_error(IntakeField::Name).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut draft = jane();
        draft.name = "x".repeat(NAME_MAX_CHARS + 1);
        assert_eq!(
            draft.field_error(IntakeField::Name).as_deref(),
            Some("Name must be at most 50 characters")
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["jane", "jane@", "@example.com", "jane example.com"] {
            let mut draft = jane();
            draft.email = email.into();
            let errors = draft.validate_intake().unwrap_err();
            assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["email"], "{email}");
        }
    }

    #[test]
    fn malformed_phone_is_rejected() {
        for phone in [
            "12345",
            "call me",
            "+1 (555) 123-abc",
            "1234567890123456",
            "++37369123456",
            "((((1234567",
            "0 (22 00-80-00",
            "0 22) 00-80-00",
            "0 (22) (00) 80-00",
            "0 ((22)) 00-80-00",
        ] {
            let mut draft = jane();
            draft.phone = phone.into();
            assert_eq!(
                draft.field_error(IntakeField::Phone).as_deref(),
                Some("Invalid phone number"),
                "{phone}"
            );
        }
    }

    #[test]
    fn accepted_phone_formats() {
        for phone in ["0 (22) 00-80-00", "+1 555.123.4567", "0221234567", "+373 69 123 456"] {
            let mut draft = jane();
            draft.phone = phone.into();
            assert_eq!(draft.field_error(IntakeField::Phone), None, "{phone}");
        }
    }

    #[test]
    fn field_error_only_reports_requested_field() {
        let draft = IntakeDraft::new("Jane Doe", "bad", "bad");
        assert_eq!(draft.field_error(IntakeField::Name), None);
        assert!(draft.field_error(IntakeField::Email).is_some());
    }

    #[test]
    fn set_value_targets_one_field() {
        let mut draft = IntakeDraft::default();
        draft.set_value(IntakeField::Phone, "0221234567".into());
        assert_eq!(draft.value(IntakeField::Phone), "0221234567");
        assert_eq!(draft.value(IntakeField::Name), "");
    }

    #[test]
    fn revalidate_catches_tampered_payload() {
        let tampered: PatientIntake =
            serde_json::from_str(r#"{"name":"","email":"x","phone":"1"}"#).unwrap();
        let errors = tampered.revalidate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn created_user_uses_appwrite_style_keys() {
        let json = r#"{"$id":"abc123","name":"Jane Doe","email":"jane@example.com","phone":"0221234567","$createdAt":"2024-05-01T10:00:00Z"}"#;
        let user: CreatedUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.registration_path(), "/patients/abc123/register");
    }

    #[test]
    fn outcome_is_tagged_on_the_wire() {
        let outcome = CreateUserOutcome::NotCreated {
            reason: "taken".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "not_created");
        assert_eq!(json["reason"], "taken");
    }
}
