pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command, SummarizeArgs};

pub use adapters::{FileLoader, JsonPresenter, TablePresenter};
pub use config::{toml_config::TomlConfig, RunConfig};
pub use crate::core::{coerce::coerce, engine::AnalyticsEngine, summarizer::summarize};
pub use domain::model::{InputFormat, OutputMode, RawBalance, RawRecord, Summary};
pub use utils::error::{AnalyticsError, Result};
