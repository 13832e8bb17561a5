use crate::adapters::{DatasetLocation, HttpDiseaseApi};
use crate::core::{ConfigProvider, DatasetSource, Record, RemoteLookup};
use crate::utils::error::{LookupError, Result};
use reqwest::Client;

/// Where a resolved record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    LocalDataset,
    RemoteService,
}

/// Resolves a disease name against the local dataset first and the remote
/// service second. The two attempts never overlap.
pub struct Resolver<D: DatasetSource, R: RemoteLookup> {
    dataset: D,
    remote: R,
}

impl<D: DatasetSource, R: RemoteLookup> Resolver<D, R> {
    pub fn new(dataset: D, remote: R) -> Self {
        Self { dataset, remote }
    }

    pub async fn resolve(&self, query: &str) -> Result<Record> {
        self.resolve_with_source(query)
            .await
            .map(|(record, _)| record)
    }

    pub async fn resolve_with_source(&self, query: &str) -> Result<(Record, RecordSource)> {
        if let Some(record) = self.lookup_local(query).await {
            tracing::debug!("Resolved {:?} from local dataset", query);
            return Ok((record, RecordSource::LocalDataset));
        }

        let record = self.lookup_remote(query).await?;
        tracing::debug!("Resolved {:?} from remote service", query);
        Ok((record, RecordSource::RemoteService))
    }

    /// Dataset failures are logged and treated as a miss.
    async fn lookup_local(&self, query: &str) -> Option<Record> {
        let key = query.to_lowercase();
        match self.dataset.load().await {
            Ok(dataset) => dataset.get(&key).cloned(),
            Err(e) => {
                tracing::warn!("Local dataset load error: {}", e);
                None
            }
        }
    }

    /// The remote service receives the query exactly as typed.
    async fn lookup_remote(&self, query: &str) -> Result<Record> {
        let candidate = self.remote.lookup(query).await.map_err(|e| {
            tracing::error!("API fetch error: {}", e);
            e
        })?;

        candidate.map(Record::from).ok_or(LookupError::NotFound)
    }
}

impl Resolver<DatasetLocation, HttpDiseaseApi> {
    /// Builds the HTTP-backed resolver; dataset and remote share one client.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let client = Client::new();
        Self::new(
            DatasetLocation::parse(config.dataset_location(), client.clone()),
            HttpDiseaseApi::from_config(config, client),
        )
    }
}
