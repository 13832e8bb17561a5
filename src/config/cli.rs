use crate::config::toml_config::LookupConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "disease-lookup")]
#[command(about = "Look up symptoms and precautions for a disease")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Local dataset location (file path or http(s) URL)
    #[arg(long)]
    pub dataset: Option<String>,

    /// Remote disease service endpoint
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Search once for this disease and exit
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file when given, otherwise defaults, then applies flags.
    pub fn lookup_config(&self) -> Result<LookupConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                LookupConfig::from_file(path)?
            }
            None => LookupConfig::default(),
        };

        config.apply_overrides(self.dataset.as_deref(), self.api_endpoint.as_deref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "disease-lookup",
            "--dataset",
            "mine.json",
            "--query",
            "Flu",
            "-v",
        ]);

        assert_eq!(cli.query.as_deref(), Some("Flu"));
        assert!(cli.verbose);
        assert!(!cli.log_json);

        let config = cli.lookup_config().unwrap();
        assert_eq!(config.dataset_location(), "mine.json");
        assert_eq!(config.query_param(), "name");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from(["disease-lookup", "--config", "/nonexistent/lookup.toml"]);
        assert!(cli.lookup_config().is_err());
    }
}
