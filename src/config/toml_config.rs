use crate::adapters::remote::{DEFAULT_API_ENDPOINT, DEFAULT_QUERY_PARAM};
use crate::core::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATASET_LOCATION: &str = "data/diseases.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Filesystem path or http(s) URL of the local dataset JSON.
    #[serde(default = "default_dataset_location")]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_api_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

fn default_dataset_location() -> String {
    DEFAULT_DATASET_LOCATION.to_string()
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            location: default_dataset_location(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_api_endpoint(),
            query_param: default_query_param(),
        }
    }
}

impl LookupConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LookupError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command line values win over file values.
    pub fn apply_overrides(&mut self, dataset: Option<&str>, api_endpoint: Option<&str>) {
        if let Some(location) = dataset {
            tracing::debug!("Dataset location overridden to: {}", location);
            self.dataset.location = location.to_string();
        }
        if let Some(endpoint) = api_endpoint {
            tracing::debug!("API endpoint overridden to: {}", endpoint);
            self.remote.endpoint = endpoint.to_string();
        }
    }
}

impl ConfigProvider for LookupConfig {
    fn dataset_location(&self) -> &str {
        &self.dataset.location
    }

    fn api_endpoint(&self) -> &str {
        &self.remote.endpoint
    }

    fn query_param(&self) -> &str {
        &self.remote.query_param
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_location("dataset.location", &self.dataset.location)?;
        validation::validate_url("remote.endpoint", &self.remote.endpoint)?;
        validation::validate_non_empty_string("remote.query_param", &self.remote.query_param)?;
        Ok(())
    }
}
