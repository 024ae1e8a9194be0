use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 桌面 widget 的描述檔 (JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub start_file: String,
    #[serde(default)]
    pub transparent_bg: bool,
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub dataserver: bool,
    #[serde(default)]
    pub remote_access: bool,
    #[serde(default)]
    pub required: Option<Vec<String>>,
}

const MAX_DIMENSION: u32 = 16_384;

impl WidgetDefinition {
    /// 從 JSON 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let definition = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded widget definition '{}' from {}",
            definition.name,
            path.as_ref().display()
        );
        Ok(definition)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Extensions this widget needs that are not in `available`.
    pub fn missing_extensions<'a>(&'a self, available: &[&str]) -> Vec<&'a str> {
        self.required
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|ext| !available.contains(ext))
            .collect()
    }
}

impl Validate for WidgetDefinition {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("widget.name", &self.name)?;
        validate_range("widget.width", self.width, 1, MAX_DIMENSION)?;
        validate_range("widget.height", self.height, 1, MAX_DIMENSION)?;
        validate_path("widget.startFile", &self.start_file)?;

        if Path::new(&self.start_file).is_absolute() {
            return Err(WidgetError::InvalidConfigValueError {
                field: "widget.startFile".to_string(),
                value: self.start_file.clone(),
                reason: "Start file must be relative to the widget directory".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATETIME: &str = r#"{
        "name": "datetime",
        "width": 400,
        "height": 160,
        "startFile": "index.html",
        "transparentBg": true
    }"#;

    #[test]
    fn test_parse_minimal_definition() {
        let def = WidgetDefinition::from_json_str(DATETIME).unwrap();
        assert_eq!(def.name, "datetime");
        assert_eq!(def.start_file, "index.html");
        assert!(def.transparent_bg);
        assert!(!def.clickable);
        assert!(def.required.is_none());
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let mut def = WidgetDefinition::from_json_str(DATETIME).unwrap();
        def.height = 0;
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_absolute_start_file_is_invalid() {
        let mut def = WidgetDefinition::from_json_str(DATETIME).unwrap();
        def.start_file = "/etc/passwd".to_string();
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_missing_extensions() {
        let mut def = WidgetDefinition::from_json_str(DATETIME).unwrap();
        assert!(def.missing_extensions(&[]).is_empty());

        def.required = Some(vec!["win_simple_perf".to_string(), "date".to_string()]);
        assert_eq!(def.missing_extensions(&["date"]), vec!["win_simple_perf"]);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = WidgetDefinition::from_json_str("{ \"name\": ").unwrap_err();
        assert!(matches!(err, WidgetError::JsonError(_)));
    }
}
