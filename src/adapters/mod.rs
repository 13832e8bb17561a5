// Adapters layer: concrete implementations of the domain ports.

pub mod dataset;
pub mod remote;

pub use dataset::{DatasetLocation, FileDataset, HttpDataset};
pub use remote::HttpDiseaseApi;
