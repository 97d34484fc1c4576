use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::passcode::{PasscodeGenerator, DEFAULT_SECRET};

pub const SECRET_ENV: &str = "LOCKQUIZ_SECRET";
pub const COLLECTOR_ENV: &str = "LOCKQUIZ_COLLECTOR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shared with the proctor. Changing it means redeploying both sides.
    pub secret: String,
    pub window_secs: u64,
    pub collector_url: Option<String>,
    pub probe_addr: String,
    pub probe_interval_ms: u64,
    pub shuffle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            window_secs: 300,
            collector_url: None,
            probe_addr: "1.1.1.1:53".to_string(),
            probe_interval_ms: 2000,
            shuffle: true,
        }
    }
}

impl Config {
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(SECRET_ENV).filter(|s| !s.is_empty()) {
            self.secret = secret;
        }
        if let Some(url) = lookup(COLLECTOR_ENV).filter(|s| !s.is_empty()) {
            self.collector_url = Some(url);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(Error::Config("secret must not be empty".to_string()));
        }
        if self.window_secs == 0 {
            return Err(Error::Config("window_secs must be positive".to_string()));
        }
        if self.probe_addr.trim().is_empty() {
            return Err(Error::Config("probe_addr must not be empty".to_string()));
        }
        if self.probe_interval_ms == 0 {
            return Err(Error::Config("probe_interval_ms must be positive".to_string()));
        }
        if let Some(url) = &self.collector_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!(
                    "collector_url must be an http(s) URL, got: {}",
                    url
                )));
            }
        }
        Ok(())
    }

    pub fn passcodes(&self) -> PasscodeGenerator {
        let window_ms = i64::try_from(self.window_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        PasscodeGenerator::with_window(self.secret.clone(), window_ms)
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_millis(self.probe_interval_ms)
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "lockquiz")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.yaml"))
}

pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_local_dir().join("logs"))
}
