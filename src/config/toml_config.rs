use crate::app::scripts::fizzbuzz_script::{DRIVER_BOUND, END_MARKER, START_MARKER};
use crate::app::scripts::{FizzBuzzScript, Rot13Script};
use crate::core::rot13::ENCODED_MESSAGE;
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, ScriptError};
use crate::utils::validation::{validate_single_line, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional TOML configuration. Every table and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptsConfig {
    pub rot13: Rot13Config,
    pub fizzbuzz: FizzBuzzConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rot13Config {
    pub message: String,
}

impl Default for Rot13Config {
    fn default() -> Self {
        Self {
            message: ENCODED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FizzBuzzConfig {
    pub bound: i64,
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self {
            bound: DRIVER_BOUND,
            start_marker: START_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl ScriptsConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScriptError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

        re.replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
    }

    /// Builds the rot13 driver from `[rot13]`.
    pub fn rot13_script(&self) -> Rot13Script {
        Rot13Script::new(self.rot13.message.clone())
    }

    /// Builds the fizzbuzz driver from `[fizzbuzz]`.
    pub fn fizzbuzz_script(&self) -> FizzBuzzScript {
        FizzBuzzScript::new(self.fizzbuzz.bound)
            .with_markers(&self.fizzbuzz.start_marker, &self.fizzbuzz.end_marker)
    }
}

impl Validate for ScriptsConfig {
    fn validate(&self) -> Result<()> {
        validate_single_line("fizzbuzz.start_marker", &self.fizzbuzz.start_marker)?;
        validate_single_line("fizzbuzz.end_marker", &self.fizzbuzz.end_marker)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_driver_defaults() {
        let config = ScriptsConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScriptsConfig::default());
        assert_eq!(config.fizzbuzz.bound, 15);
        assert_eq!(config.rot13.message, ENCODED_MESSAGE);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[rot13]
message = "Uryyb"

[fizzbuzz]
bound = 30
start_marker = "go"
end_marker = "done"

[output]
format = "json-lines"
"#;

        let config = ScriptsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.rot13.message, "Uryyb");
        assert_eq!(config.fizzbuzz.bound, 30);
        assert_eq!(config.fizzbuzz.start_marker, "go");
        assert_eq!(config.output.format, OutputFormat::JsonLines);
        assert_eq!(config.fizzbuzz_script().bound(), 30);
        assert_eq!(config.rot13_script().message(), "Uryyb");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_SCRIPTS_TEST_MESSAGE", "Frperg");

        let toml_content = r#"
[rot13]
message = "${SMALL_SCRIPTS_TEST_MESSAGE}"

[fizzbuzz]
end_marker = "${SMALL_SCRIPTS_TEST_UNSET_VAR}"
"#;

        let config = ScriptsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.rot13.message, "Frperg");
        assert_eq!(config.fizzbuzz.end_marker, "${SMALL_SCRIPTS_TEST_UNSET_VAR}");

        std::env::remove_var("SMALL_SCRIPTS_TEST_MESSAGE");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = ScriptsConfig::from_toml_str("[fizzbuzz]\nlimit = 3\n").unwrap_err();
        assert!(matches!(err, ScriptError::ConfigParseError { .. }));
    }

    #[test]
    fn test_multiline_marker_fails_validation() {
        let toml_content = "[fizzbuzz]\nstart_marker = \"one\\ntwo\"\n";
        let config = ScriptsConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[fizzbuzz]\nbound = -4\n").unwrap();

        let config = ScriptsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.fizzbuzz.bound, -4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScriptsConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ScriptError::IoError(_)));
    }
}
