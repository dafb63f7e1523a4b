#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{InputFormat, OutputMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_existing_file, validate_positive_number, Validate};

pub const DEFAULT_TOP: usize = 10;

/// Fully resolved settings for one `summarize` run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_file: String,
    pub format: InputFormat,
    pub top: usize,
    pub output: OutputMode,
    pub verbose: bool,
    pub log_level: String,
    pub json_logs: bool,
}

impl RunConfig {
    pub fn new(input_file: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            format: InputFormat::default(),
            top: DEFAULT_TOP,
            output: OutputMode::default(),
            verbose: false,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_existing_file("input_file", &self.input_file)?;
        validate_positive_number("top", self.top, 1)?;
        Ok(())
    }
}
