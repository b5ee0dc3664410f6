use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Badge image URL embedded at the top of the report
    #[serde(default)]
    pub badge_url: Option<String>,
    /// Default coverage report path
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Minimum overall line coverage percentage
    #[serde(default)]
    pub fail_under: Option<f64>,
}

impl Config {
    /// Load config from path; a missing file means built-in defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(pct) = self.fail_under {
            if !(0.0..=100.0).contains(&pct) {
                anyhow::bail!("fail_under must be between 0 and 100, got {}", pct);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
badge_url = "https://example.com/badge.svg"
input = "target/coverage.xml"
fail_under = 80.0
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.badge_url.as_deref(),
            Some("https://example.com/badge.svg")
        );
        assert_eq!(config.input, Some(PathBuf::from("target/coverage.xml")));
        assert_eq!(config.fail_under, Some(80.0));
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let config = Config::load(Path::new("no-such-covmark.toml")).unwrap();
        assert!(config.badge_url.is_none());
        assert!(config.input.is_none());
        assert!(config.fail_under.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("covmark.toml");
        fs::write(&path, "fail_under = 70.0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fail_under, Some(70.0));
    }

    #[test]
    fn test_fail_under_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("covmark.toml");
        fs::write(&path, "fail_under = 150.0\n").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
