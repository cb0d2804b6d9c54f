pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::pipeline::DEFAULT_EXPORT_BASE;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::{MetricsError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "conversion-metrics")]
#[command(about = "Aggregates a conversions sheet export into department metrics")]
pub struct CliConfig {
    /// Published sheet id (the token in the sheet's /d/e/<id>/ export URL).
    /// Required unless --config supplies one.
    #[arg(long)]
    pub sheet_id: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_EXPORT_BASE)]
    pub export_base_url: String,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Re-fetch and recompute on this interval (seconds); 0 runs once.
    #[arg(long, default_value = "0")]
    pub poll_secs: u64,

    /// Read configuration from a TOML file instead of the flags above.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn sheet_id(&self) -> &str {
        self.sheet_id.as_deref().unwrap_or("")
    }

    fn export_base_url(&self) -> &str {
        &self.export_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn poll_interval_secs(&self) -> u64 {
        self.poll_secs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.sheet_id.as_deref() {
            Some(id) => validation::validate_sheet_id("sheet_id", id)?,
            None => {
                return Err(MetricsError::MissingConfigError {
                    field: "sheet_id".to_string(),
                })
            }
        }
        validation::validate_url("export_base_url", &self.export_base_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        if self.poll_secs > 0 {
            validation::validate_range("poll_secs", self.poll_secs, 5, 86_400)?;
        }
        Ok(())
    }
}
