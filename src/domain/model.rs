use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const NO_SYMPTOMS_PLACEHOLDER: &str = "No symptoms found";
pub const NO_PRECAUTIONS_PLACEHOLDER: &str = "No precautions found";

/// Symptoms and precautions for one disease, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
}

impl Record {
    pub fn new<S, P>(symptoms: S, precautions: P) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            precautions: precautions.into_iter().map(Into::into).collect(),
        }
    }
}

/// One element of the remote service's response array. Any other fields the
/// service sends are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteCandidate {
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
    #[serde(default)]
    pub precautions: Option<Vec<String>>,
}

impl From<RemoteCandidate> for Record {
    fn from(candidate: RemoteCandidate) -> Self {
        Self {
            symptoms: or_placeholder(candidate.symptoms, NO_SYMPTOMS_PLACEHOLDER),
            precautions: or_placeholder(candidate.precautions, NO_PRECAUTIONS_PLACEHOLDER),
        }
    }
}

fn or_placeholder(values: Option<Vec<String>>, placeholder: &str) -> Vec<String> {
    match values {
        Some(values) if !values.is_empty() => values,
        _ => vec![placeholder.to_string()],
    }
}

/// The local dataset: lowercase disease name to record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseDataset {
    entries: HashMap<String, Record>,
}

impl DiseaseDataset {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Exact key match; callers fold case before asking.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Record)> for DiseaseDataset {
    fn from_iter<T: IntoIterator<Item = (String, Record)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
