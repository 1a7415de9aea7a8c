use crate::config::Config;
use crate::ConfigError;
use std::path::Path;

/// Loads and validates a configuration file from the given path
///
/// # Errors
///
/// * [`ConfigError::Io`] - the file cannot be read
/// * [`ConfigError::Parse`] - the content is not valid TOML
/// * [`ConfigError::Validation`] - a field value is unusable
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Rejects configurations the fetcher cannot run with
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetcher.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetcher.user-agent must not be empty".to_string(),
        ));
    }
    if config.fetcher.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetcher.timeout-secs must be greater than zero".to_string(),
        ));
    }
    if config.fetcher.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetcher.connect-timeout-secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.fetcher.timeout_secs, 30);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [fetcher]
            user-agent = "custom-agent/2.0"
            timeout-secs = 5
            connect-timeout-secs = 2

            [catalog]
            default-path = "pages.txt"
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.fetcher.user_agent, "custom-agent/2.0");
        assert_eq!(config.fetcher.timeout_secs, 5);
        assert_eq!(config.catalog.default_path.as_deref(), Some("pages.txt"));
    }

    #[test]
    fn test_reject_zero_timeout() {
        let file = write_config("[fetcher]\ntimeout-secs = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_reject_empty_user_agent() {
        let file = write_config("[fetcher]\nuser-agent = \" \"\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_reject_invalid_toml() {
        let file = write_config("not [ valid toml");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
