use clap::Parser;
use disease_lookup::core::ConfigProvider;
use disease_lookup::utils::{logger, validation::Validate};
use disease_lookup::{CliConfig, Console, Resolver, ResultState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Initialize logging
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting disease-lookup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Load and validate configuration
    let config = match cli.lookup_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(3);
        }
    };

    tracing::info!(
        "Dataset: {}, remote: {}?{}=",
        config.dataset_location(),
        config.api_endpoint(),
        config.query_param()
    );

    let resolver = Resolver::from_config(&config);
    let mut console = Console::new(resolver, std::io::stdout());

    match cli.query.as_deref() {
        Some(query) => {
            let exit_code = match console.search_once(query).await? {
                ResultState::Found(_) => 0,
                ResultState::NotFound => 1,
                _ => 2,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            console.run(stdin).await?;
        }
    }

    Ok(())
}
