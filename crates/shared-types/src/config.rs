use serde::{Deserialize, Serialize};

/// Registration behaviour of the user-creation service.
///
/// Loaded from the `[registration]` table of `config.toml`. Missing keys
/// fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationConfig {
    /// When an email is already registered, hand back the existing patient
    /// instead of refusing the intake.
    #[serde(default = "default_true")]
    pub reuse_existing_email: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            reuse_existing_email: true,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub registration: RegistrationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reuses_existing_email() {
        assert!(AppConfig::default().registration.reuse_existing_email);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn deserialize_empty_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[registration]\n").unwrap();
        assert!(config.registration.reuse_existing_email);
    }

    #[test]
    fn deserialize_disabled_reuse() {
        let config: AppConfig = toml::from_str(
            r#"
            [registration]
            reuse_existing_email = false
            "#,
        )
        .unwrap();
        assert!(!config.registration.reuse_existing_email);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true
            "#,
        )
        .unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
