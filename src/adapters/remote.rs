use crate::domain::model::RemoteCandidate;
use crate::domain::ports::{ConfigProvider, RemoteLookup};
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "https://disease-info-api.vercel.app/diseases";
pub const DEFAULT_QUERY_PARAM: &str = "name";

/// Client for the disease info HTTP API: `GET <endpoint>?<param>=<query>`.
#[derive(Debug, Clone)]
pub struct HttpDiseaseApi {
    endpoint: String,
    query_param: String,
    client: Client,
}

impl HttpDiseaseApi {
    pub fn new(endpoint: impl Into<String>, query_param: impl Into<String>) -> Self {
        Self::with_client(endpoint, query_param, Client::new())
    }

    pub fn with_client(
        endpoint: impl Into<String>,
        query_param: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            query_param: query_param.into(),
            client,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, client: Client) -> Self {
        Self::with_client(config.api_endpoint(), config.query_param(), client)
    }
}

#[async_trait]
impl RemoteLookup for HttpDiseaseApi {
    async fn lookup(&self, query: &str) -> Result<Option<RemoteCandidate>> {
        tracing::debug!("Making API request to: {} ({}={:?})", self.endpoint, self.query_param, query);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[(self.query_param.as_str(), query)])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(LookupError::RemoteFetchError {
                message: format!("{} returned status {}", self.endpoint, response.status()),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let serde_json::Value::Array(values) = body else {
            return Err(LookupError::RemoteFetchError {
                message: format!("{} did not return a JSON array", self.endpoint),
            });
        };
        tracing::debug!("API returned {} candidates", values.len());

        // Only the first element is decoded.
        values
            .into_iter()
            .next()
            .map(serde_json::from_value::<RemoteCandidate>)
            .transpose()
            .map_err(|e| LookupError::RemoteFetchError {
                message: format!("Malformed first candidate: {}", e),
            })
    }
}
