use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the MOI Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Performance and resource settings
    pub performance: PerformanceConfig,

    /// Output and rendering settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Maximum number of concurrent workers
    pub max_workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit the batch report as JSON instead of plain-text tables
    pub json: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        // Try to load from various locations
        let config_paths = ["moi-analyzer.toml", "config/moi-analyzer.toml"];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(workers) = std::env::var("MOI_ANALYZER_WORKERS") {
            config.performance.max_workers = workers
                .parse()
                .map_err(|_| anyhow!("MOI_ANALYZER_WORKERS is not a number: {workers}"))?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.performance.max_workers == 0 {
            return Err(anyhow!("max_workers must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            performance: PerformanceConfig {
                max_workers: num_cpus::get(),
            },
            output: OutputConfig { json: false },
        }
    }
}
