pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, GeneratorConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::StubEngine, pipeline::StubPipeline};
pub use domain::model::{GenerationReport, LinkEntry, StubTemplate};
pub use utils::error::{Result, StubError};
