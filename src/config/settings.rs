use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::profile::PROFILES_PATH;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub base_path: Option<String>,
}

impl Settings {
    /// Registry path to read profiles from. `flag` wins over the settings
    /// file, which wins over the Network List default.
    pub fn base_path(&self, flag: Option<&str>) -> String {
        flag.map(str::trim)
            .filter(|path| !path.is_empty())
            .or_else(|| {
                self.base_path
                    .as_deref()
                    .map(str::trim)
                    .filter(|path| !path.is_empty())
            })
            .unwrap_or(PROFILES_PATH)
            .to_string()
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    parse(&fs::read_to_string(path)?)
}

pub fn load_required(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "settings file not found: {}",
            path.display()
        )));
    }

    parse(&fs::read_to_string(path)?)
}

fn parse(raw: &str) -> AppResult<Settings> {
    let settings = serde_json::from_str(raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_network_list_path() {
        assert_eq!(Settings::default().base_path(None), PROFILES_PATH);
    }

    #[test]
    fn flag_overrides_file() {
        let settings = Settings {
            base_path: Some("FromFile".to_string()),
        };
        assert_eq!(settings.base_path(Some("FromFlag")), "FromFlag");
        assert_eq!(settings.base_path(None), "FromFile");
    }

    #[test]
    fn blank_values_fall_through() {
        let settings = Settings {
            base_path: Some("  ".to_string()),
        };
        assert_eq!(settings.base_path(Some("")), PROFILES_PATH);
    }

    #[test]
    fn parses_partial_json() {
        let settings = parse("{}").unwrap();
        assert!(settings.base_path.is_none());

        let settings = parse(r#"{"base_path":"SOFTWARE\\Test"}"#).unwrap();
        assert_eq!(settings.base_path.as_deref(), Some("SOFTWARE\\Test"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse("{"), Err(AppError::Json(_))));
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let settings = load(Path::new("definitely/not/here/settings.json")).unwrap();
        assert!(settings.base_path.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_required(Path::new("definitely/not/here/settings.json"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
