use crate::domain::model::DiseaseDataset;
use crate::domain::ports::DatasetSource;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::is_http_location;
use reqwest::Client;
use std::path::PathBuf;

/// Dataset stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDataset {
    async fn load(&self) -> Result<DiseaseDataset> {
        tracing::debug!("Reading local dataset from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        DiseaseDataset::from_json_slice(&bytes)
    }
}

/// Dataset served over HTTP, e.g. a static `/diseases.json`.
#[derive(Debug, Clone)]
pub struct HttpDataset {
    url: String,
    client: Client,
}

impl HttpDataset {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

impl DatasetSource for HttpDataset {
    async fn load(&self) -> Result<DiseaseDataset> {
        tracing::debug!("Fetching local dataset from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::DatasetError {
                message: format!("{} returned status {}", self.url, response.status()),
            });
        }

        let bytes = response.bytes().await?;
        DiseaseDataset::from_json_slice(&bytes)
    }
}

/// A dataset location from configuration: http(s) URLs are fetched, anything
/// else is read from disk.
#[derive(Debug, Clone)]
pub enum DatasetLocation {
    File(FileDataset),
    Http(HttpDataset),
}

impl DatasetLocation {
    pub fn parse(location: &str, client: Client) -> Self {
        if is_http_location(location) {
            DatasetLocation::Http(HttpDataset::with_client(location, client))
        } else {
            DatasetLocation::File(FileDataset::new(location))
        }
    }
}

impl DatasetSource for DatasetLocation {
    async fn load(&self) -> Result<DiseaseDataset> {
        match self {
            DatasetLocation::File(file) => file.load().await,
            DatasetLocation::Http(http) => http.load().await,
        }
    }
}
