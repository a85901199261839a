//! Compressor configuration

use crate::gzip::BEST_LEVEL;
use msgzip_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Compressor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Gzip level (0-9)
    #[serde(default = "default_level")]
    pub level: u32,

    /// Directory for compressed body spool files, system temp dir when unset
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            temp_dir: None,
        }
    }
}

fn default_level() -> u32 {
    BEST_LEVEL
}

impl CompressionConfig {
    /// Check level bounds and that `temp_dir` is a directory
    pub fn validate(&self) -> Result<()> {
        if self.level > BEST_LEVEL {
            return Err(Error::Config(format!(
                "Compression level {} out of range 0-{BEST_LEVEL}",
                self.level
            )));
        }

        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                return Err(Error::Config(format!(
                    "Temporary directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format
    Yaml,
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Config("Unable to detect config format".to_string()))?;

        match ext {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(Error::Config(format!("Unsupported config format: {ext}"))),
        }
    }
}

/// Load configuration from a string
pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<CompressionConfig> {
    let config: CompressionConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse YAML: {e}")))?,
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {e}")))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse JSON: {e}")))?,
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CompressionConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;

    let format = ConfigFormat::from_path(path)?;

    load_from_str(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CompressionConfig::default();
        assert_eq!(config.level, 9);
        assert!(config.temp_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_detect_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("msgzip.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("msgzip.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("msgzip.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(Path::new("msgzip.ini")).is_err());
        assert!(ConfigFormat::from_path(Path::new("msgzip")).is_err());
    }

    #[test]
    fn test_load_each_format() {
        let yaml = load_from_str("level: 6\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(yaml.level, 6);

        let toml = load_from_str("level = 1", ConfigFormat::Toml).unwrap();
        assert_eq!(toml.level, 1);

        let json = load_from_str("{}", ConfigFormat::Json).unwrap();
        assert_eq!(json, CompressionConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = load_from_str("level: 12", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = load_from_str(
            r#"{"temp_dir": "/nonexistent/msgzip-spool"}"#,
            ConfigFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));

        assert!(load_from_str("level: [", ConfigFormat::Yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msgzip.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "level = 4").unwrap();
        writeln!(file, "temp_dir = {:?}", dir.path().display().to_string()).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.level, 4);
        assert_eq!(config.temp_dir.as_deref(), Some(dir.path()));
    }
}
