use crate::config::toml_config::TomlConfig;
use crate::config::{RunConfig, DEFAULT_TOP};
use crate::domain::model::{InputFormat, OutputMode};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "airdrop-analytics")]
#[command(about = "Airdrop Analytics CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Summarize holder balances: top-N, totals, deciles, Gini
    Summarize(SummarizeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SummarizeArgs {
    /// Holder file with `address` and `balance` columns
    pub input_file: String,

    /// Input format [default: csv]
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Top-N holders to show [default: 10]
    #[arg(long)]
    pub top: Option<usize>,

    /// What to print [default: both]
    #[arg(long, value_enum)]
    pub output: Option<OutputMode>,

    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl SummarizeArgs {
    /// Merges flags with the config file: flag, then file, then built-in default.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> RunConfig {
        let file_format = file.and_then(TomlConfig::format);
        let file_top = file.and_then(TomlConfig::top);
        let file_output = file.and_then(TomlConfig::output_mode);

        RunConfig {
            input_file: self.input_file.clone(),
            format: self.format.or(file_format).unwrap_or_default(),
            top: self.top.or(file_top).unwrap_or(DEFAULT_TOP),
            output: self.output.or(file_output).unwrap_or_default(),
            verbose: self.verbose,
            log_level: file
                .map(|f| f.log_level().to_string())
                .unwrap_or_else(|| "info".to_string()),
            json_logs: file.map(TomlConfig::json_logs).unwrap_or(false),
        }
    }
}
