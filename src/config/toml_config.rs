use crate::config::{validate_settings, ClockSettings, DEFAULT_INTERVAL_MS};
use crate::core::template::DEFAULT_TEMPLATE;
use crate::core::updater::DEFAULT_ELEMENT_ID;
use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub clock: ClockSection,
    #[serde(default)]
    pub output: OutputSection,
    /// 指向 widget 描述檔 (JSON)
    pub widget: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSection {
    pub element_id: String,
    pub interval_ms: u64,
    pub template: String,
    pub halt_on_error: bool,
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            template: DEFAULT_TEMPLATE.to_string(),
            halt_on_error: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Stdout,
    Html,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub kind: OutputKind,
    pub path: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WidgetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CLOCK_OUTPUT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_settings(self)?;

        if self.output.kind == OutputKind::Html {
            validate_required_field("output.path", &self.output.path)?;
        }

        Ok(())
    }
}

impl ClockSettings for TomlConfig {
    fn element_id(&self) -> &str {
        &self.clock.element_id
    }

    fn interval_ms(&self) -> u64 {
        self.clock.interval_ms
    }

    fn template(&self) -> &str {
        &self.clock.template
    }

    fn output_path(&self) -> Option<&str> {
        match self.output.kind {
            OutputKind::Stdout => None,
            OutputKind::Html => self.output.path.as_deref(),
        }
    }

    fn widget_definition(&self) -> Option<&str> {
        self.widget.as_deref()
    }

    fn halt_on_error(&self) -> bool {
        self.clock.halt_on_error
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
widget = "widgets/datetime/widget.json"

[clock]
element_id = "time"
interval_ms = 500
template = "HH:mm"
halt_on_error = true

[output]
kind = "html"
path = "./out/clock.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.element_id(), "time");
        assert_eq!(config.interval_ms(), 500);
        assert_eq!(config.template(), "HH:mm");
        assert!(config.halt_on_error());
        assert_eq!(config.output_path(), Some("./out/clock.html"));
        assert_eq!(config.widget_definition(), Some("widgets/datetime/widget.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.element_id(), "clock");
        assert_eq!(config.interval_ms(), 1000);
        assert_eq!(config.template(), DEFAULT_TEMPLATE);
        assert!(config.output_path().is_none());
    }

    #[test]
    fn test_partial_clock_section_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("[clock]\ninterval_ms = 250\n").unwrap();
        assert_eq!(config.interval_ms(), 250);
        assert_eq!(config.element_id(), "clock");
    }

    #[test]
    fn test_html_output_requires_path() {
        let config = TomlConfig::from_toml_str("[output]\nkind = \"html\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, WidgetError::MissingConfigError { .. }));
    }

    #[test]
    fn test_invalid_element_id_fails_validation() {
        let config = TomlConfig::from_toml_str("[clock]\nelement_id = \"my clock\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_output_kind_is_parse_error() {
        let err = TomlConfig::from_toml_str("[output]\nkind = \"pdf\"\n").unwrap_err();
        assert!(matches!(err, WidgetError::TomlError(_)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DATETIME_WIDGET_TEST_OUT", "/tmp/clock.html");
        let toml_content = r#"
[output]
kind = "html"
path = "${DATETIME_WIDGET_TEST_OUT}"

[clock]
element_id = "${DATETIME_WIDGET_TEST_UNSET}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/clock.html"));
        assert_eq!(config.element_id(), "${DATETIME_WIDGET_TEST_UNSET}");
        std::env::remove_var("DATETIME_WIDGET_TEST_OUT");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[clock]\ntemplate = \"h:mm A\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.template(), "h:mm A");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/datetime-widget.toml").unwrap_err();
        assert!(matches!(err, WidgetError::IoError(_)));
    }
}
