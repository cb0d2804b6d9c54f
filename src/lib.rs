pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{engine::MetricsEngine, pipeline::SheetPipeline};
pub use utils::error::{MetricsError, Result};
