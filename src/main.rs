use airdrop_analytics::core::Presenter;
use airdrop_analytics::utils::error::{AnalyticsError, ErrorSeverity};
use airdrop_analytics::utils::{logger, validation::Validate};
use airdrop_analytics::{
    AnalyticsEngine, Cli, Command, FileLoader, JsonPresenter, RunConfig, TablePresenter,
    TomlConfig,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Summarize(args) => {
            let file_config = match args.config.as_deref().map(load_config_file).transpose() {
                Ok(config) => config,
                Err(e) => fail(&e),
            };

            let config = args.resolve(file_config.as_ref());
            init_logging(&config);

            tracing::info!("Starting airdrop-analytics");
            tracing::debug!("Run config: {:?}", config);

            if let Err(e) = config.validate() {
                fail(&e);
            }

            summarize(&config)
        }
    }
}

fn load_config_file(path: &str) -> airdrop_analytics::Result<TomlConfig> {
    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &RunConfig) {
    if config.json_logs {
        let level = if config.verbose { "debug" } else { config.log_level.as_str() };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(config.verbose);
    }
}

fn summarize(config: &RunConfig) -> anyhow::Result<()> {
    let loader = FileLoader::new(&config.input_file, config.format);
    let engine = AnalyticsEngine::new(loader);

    let summary = match engine.run(config.top) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(
                "Summarize failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e)
        }
    };

    if config.output.includes_table() {
        println!("{}", TablePresenter::new(config.top).render(&summary)?);
    }
    if config.output.includes_json() {
        println!("{}", JsonPresenter.render(&summary)?);
    }

    Ok(())
}

/// Reports the error and exits; the code follows the error severity.
fn fail(e: &AnalyticsError) -> ! {
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
