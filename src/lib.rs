pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DatasetLocation, FileDataset, HttpDataset, HttpDiseaseApi};
pub use app::{Console, Presenter};
pub use config::LookupConfig;
pub use crate::core::{
    resolver::{RecordSource, Resolver},
    session::{ResultState, SearchSession},
};
pub use domain::model::{DiseaseDataset, Record};
pub use utils::error::{LookupError, Result};
