use crate::core::pipeline::DEFAULT_EXPORT_BASE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// File-based configuration, selected with `--config`.
///
/// ```toml
/// [sheet]
/// id = "2PACX-..."
///
/// [output]
/// path = "./output"
///
/// [fetch]
/// timeout_seconds = 10
///
/// [poll]
/// interval_seconds = 300
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sheet: SheetConfig,
    pub output: OutputConfig,
    pub fetch: Option<FetchConfig>,
    pub poll: Option<PollConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    pub id: String,
    pub export_base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    pub interval_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for TomlConfig {
    fn sheet_id(&self) -> &str {
        &self.sheet.id
    }

    fn export_base_url(&self) -> &str {
        self.sheet
            .export_base_url
            .as_deref()
            .unwrap_or(DEFAULT_EXPORT_BASE)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn request_timeout_secs(&self) -> u64 {
        self.fetch
            .as_ref()
            .and_then(|f| f.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn poll_interval_secs(&self) -> u64 {
        self.poll
            .as_ref()
            .and_then(|p| p.interval_seconds)
            .unwrap_or(0)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_sheet_id("sheet.id", &self.sheet.id)?;
        validation::validate_url("sheet.export_base_url", self.export_base_url())?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_range(
            "fetch.timeout_seconds",
            self.request_timeout_secs(),
            1,
            300,
        )?;

        let interval = self.poll_interval_secs();
        if interval > 0 {
            validation::validate_range("poll.interval_seconds", interval, 5, 86_400)?;
        }

        Ok(())
    }
}
