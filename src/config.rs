//! Configuration file support for buckdeps.
//!
//! Provides YAML-based configuration through `buckdeps.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "buckdeps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub only_multiple: Option<bool>,
    pub versionless: Option<bool>,
    pub pad_versions: Option<bool>,
    pub versioned_exceptions: Option<Vec<String>>,
    pub substitution: Option<bool>,
    pub external_root: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref exceptions) = config.versioned_exceptions {
        for (i, entry) in exceptions.iter().enumerate() {
            if entry.trim().is_empty() {
                bail!(
                    "Invalid config: versioned_exceptions[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a coordinate such as \"com.google.guava:guava\".",
                    i
                );
            }
        }
    }
    if let Some(ref root) = config.external_root {
        if let Err(e) = validate_external_root(root) {
            bail!("Invalid config: {}", e);
        }
    }
    Ok(())
}

/// Rejects an external root that names no directory once slashes are trimmed
///
/// Applies to the merged value too, since `--external-root` overrides the config.
pub fn validate_external_root(root: &str) -> Result<()> {
    if root.trim_matches('/').trim().is_empty() {
        bail!(
            "external_root must name a directory, got \"{}\".\n\n\
             💡 Hint: Omit it to use the default \".okbuck/ext\".",
            root
        );
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
only_multiple: false
versionless: true
pad_versions: true
versioned_exceptions:
  - com.google.guava:guava
  - org.robolectric:android-all
substitution: false
external_root: third_party/ext
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.only_multiple, Some(false));
        assert_eq!(config.versionless, Some(true));
        assert_eq!(config.pad_versions, Some(true));
        assert_eq!(
            config.versioned_exceptions.as_deref(),
            Some(
                &[
                    "com.google.guava:guava".to_string(),
                    "org.robolectric:android-all".to_string()
                ][..]
            )
        );
        assert_eq!(config.substitution, Some(false));
        assert_eq!(config.external_root.as_deref(), Some("third_party/ext"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: text\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("text"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_exception_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "versioned_exceptions:\n  - \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("versioned_exceptions[0] must not be empty"));
    }

    #[test]
    fn test_blank_external_root_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "external_root: \"/\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: external_root must name a directory"));
    }

    #[test]
    fn test_validate_external_root() {
        assert!(validate_external_root(".okbuck/ext").is_ok());
        assert!(validate_external_root("/third_party/").is_ok());
        assert!(validate_external_root("/").is_err());
        assert!(validate_external_root("//").is_err());
        assert!(validate_external_root(" ").is_err());
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: json\ncheck_cve: true\nlockfile: x\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.versioned_exceptions.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
