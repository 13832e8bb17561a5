use crate::domain::model::{DiseaseDataset, RemoteCandidate};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the local dataset comes from. Loaded fresh for every search.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<DiseaseDataset>> + Send;
}

/// The remote disease service.
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    /// Returns the first candidate the service sends for `query`, or `None`
    /// when it sends none. Later candidates are never inspected.
    async fn lookup(&self, query: &str) -> Result<Option<RemoteCandidate>>;
}

pub trait ConfigProvider: Send + Sync {
    fn dataset_location(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn query_param(&self) -> &str;
}
