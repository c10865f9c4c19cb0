use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root. Overridable via
/// the `APP_CONFIG` environment variable.
const CONFIG_PATH: &str = "config.toml";

/// Read and parse the config file once, storing it in the global
/// `OnceLock`. Safe to call multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var("APP_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
        read_config(&path)
    })
}

/// Get the loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get().unwrap_or_else(load_app_config)
}

fn read_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => {
                tracing::info!(path, ?config, "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to parse config, using defaults");
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path, error = %e, "config file not found, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = read_config("/definitely/not/here/config.toml");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let path = write_temp("broken.toml", "[registration\nreuse_existing_email = ");
        let config = read_config(path.to_str().unwrap());
        assert_eq!(config, AppConfig::default());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn file_values_are_applied() {
        let path = write_temp(
            "strict.toml",
            "[registration]\nreuse_existing_email = false\n",
        );
        let config = read_config(path.to_str().unwrap());
        assert!(!config.registration.reuse_existing_email);
        let _ = std::fs::remove_file(path);
    }
}
