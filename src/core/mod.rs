pub mod resolver;
pub mod session;

pub use crate::domain::model::{DiseaseDataset, Record, RemoteCandidate};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, RemoteLookup};
pub use crate::utils::error::Result;
