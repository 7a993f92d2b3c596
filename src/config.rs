use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use staystrong_core::goals::{sample_goals, SeedGoal};
use staystrong_core::quote::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use staystrong_core::types::Theme;

use crate::Args;

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<Theme>,
    pub goals: Option<Vec<SeedGoal>>,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout: Duration,
    pub theme: Theme,
    pub goals: Vec<SeedGoal>,
}

pub fn config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set; please set HOME")?;
    Ok(Path::new(&home).join(".config/staystrong"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn default_log_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("staystrong.log"))
}

/// A missing file yields the defaults; an unreadable or malformed one is an error.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

pub fn resolve_settings(file: FileConfig, args: &Args) -> Settings {
    let theme = if args.dark {
        Theme::Dark
    } else {
        file.theme.unwrap_or_default()
    };
    let goals = if args.empty {
        Vec::new()
    } else {
        file.goals.unwrap_or_else(sample_goals)
    };
    let timeout = args
        .timeout_secs
        .or(file.timeout_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    Settings {
        endpoint: args
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        timeout,
        theme,
        goals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["staystrong"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file_config(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, FileConfig::default());

        let settings = resolve_settings(config, &args(&[]));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.goals, sample_goals());
    }

    #[test]
    fn file_values_are_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"endpoint":"http://localhost:9/q","theme":"dark","goals":[{{"text":"Walk","streak":2}}]}}"#
        )
        .unwrap();
        let config = load_file_config(file.path()).unwrap();
        let settings = resolve_settings(config, &args(&[]));
        assert_eq!(settings.endpoint, "http://localhost:9/q");
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.goals, vec![SeedGoal::new("Walk", false, 2)]);
    }

    #[test]
    fn flags_override_file() {
        let config = FileConfig {
            endpoint: Some("http://file".to_string()),
            timeout_secs: Some(30),
            theme: Some(Theme::Light),
            goals: Some(vec![SeedGoal::new("Walk", false, 0)]),
        };
        let settings = resolve_settings(
            config,
            &args(&["--endpoint", "http://flag", "--timeout-secs", "2", "--dark", "--empty"]),
        );
        assert_eq!(settings.endpoint, "http://flag");
        assert_eq!(settings.timeout, Duration::from_secs(2));
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.goals.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_file_config(file.path()).is_err());
    }
}
