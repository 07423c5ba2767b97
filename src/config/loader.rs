//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HmcClientConfig;
use super::secret_string;
use crate::domain::errors::HmcError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HmcClientConfig
/// 4. Applies environment variable overrides (HMC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use hmc_client::config::loader::load_config;
///
/// let config = load_config("hmc.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HmcClientConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HmcError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let config = read_config(path)?;

    config.validate().map_err(|e| {
        HmcError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration without validating it
///
/// A missing file is not an error here: defaults are used instead, so that
/// command-line flags can supply everything. Environment overrides are still
/// applied. The caller must call [`HmcClientConfig::validate`] once its own
/// overrides are in place.
pub fn load_config_unvalidated(path: impl AsRef<Path>) -> Result<HmcClientConfig> {
    let path = path.as_ref();

    if path.exists() {
        return read_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    let mut config = HmcClientConfig::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<HmcClientConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        HmcError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: HmcClientConfig = toml::from_str(&contents)
        .map_err(|e| HmcError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| HmcError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Comment lines are copied verbatim
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HmcError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using HMC_* prefix
///
/// Environment variables follow the pattern HMC_<KEY> for the `[hmc]`
/// section and HMC_<SECTION>_<KEY> for the others, for example
/// HMC_BASE_URL or HMC_LOGGING_LOCAL_PATH.
fn apply_env_overrides(config: &mut HmcClientConfig) -> Result<()> {
    if let Ok(val) = std::env::var("HMC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("HMC_BASE_URL") {
        config.hmc.base_url = val;
    }
    if let Ok(val) = std::env::var("HMC_USERNAME") {
        config.hmc.username = val;
    }
    if let Ok(val) = std::env::var("HMC_PASSWORD") {
        config.hmc.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("HMC_TLS_VERIFY") {
        config.hmc.tls_verify = parse_bool_override("HMC_TLS_VERIFY", &val)?;
    }
    if let Ok(val) = std::env::var("HMC_TIMEOUT_SECONDS") {
        config.hmc.timeout_seconds = val.parse().map_err(|_| {
            HmcError::Configuration(format!("HMC_TIMEOUT_SECONDS is not a number: {val}"))
        })?;
    }
    if let Ok(val) = std::env::var("HMC_AUDIT_MEMENTO") {
        config.hmc.audit_memento = val;
    }

    if let Ok(val) = std::env::var("HMC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("HMC_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("HMC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_bool_override(name: &str, val: &str) -> Result<bool> {
    val.trim().parse().map_err(|_| {
        HmcError::Configuration(format!("{name} must be 'true' or 'false', got '{val}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("HMC_LOADER_TEST_VAR", "test_value");
        let input = "password = \"${HMC_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "password = \"test_value\"\n");
        std::env::remove_var("HMC_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("HMC_LOADER_MISSING_VAR");
        let input = "password = \"${HMC_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("HMC_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# password = \"${HMC_LOADER_NEVER_SET}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_parse_bool_override() {
        assert!(parse_bool_override("HMC_TLS_VERIFY", "true").unwrap());
        assert!(!parse_bool_override("HMC_TLS_VERIFY", " false ").unwrap());

        for bad in ["1", "yes", "TRUE", ""] {
            let err = parse_bool_override("HMC_TLS_VERIFY", bad).unwrap_err();
            assert!(err.to_string().contains("HMC_TLS_VERIFY"), "{bad}");
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-hmc.toml");
        assert!(matches!(result, Err(HmcError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[hmc]
base_url = "https://myhmc:12443"
username = "hscroot"
password = "abc123"
timeout_seconds = 45
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.hmc.base_url, "https://myhmc:12443");
        assert_eq!(config.hmc.password.expose_secret(), "abc123");
        assert_eq!(config.hmc.timeout_seconds, 45);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[hmc\nbase_url = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
