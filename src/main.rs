mod cli;
mod config;
mod error;
mod orchestrator;
mod render;
mod sort;
mod types;
mod util;
mod worker;

use clap::Parser;
use cli::{Cli, Commands, InitArgs};
use config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: i32 = 1;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init(args) => {
            if let Err(e) = init(&args) {
                error!("{:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::Check(args) => {
            let config = Config::load(args.config.as_deref()).unwrap_or_else(|e| {
                error!("Error loading configuration: {}", e);
                std::process::exit(EXIT_FAILURE);
            });
            orchestrator::orchestrate_and_run(config, args.paths, args.fix, args.output.as_deref())
                .await;
        }
    }
}

fn init(args: &InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.r#override {
        anyhow::bail!(
            "{} already exists, use --override to replace it",
            args.config.display()
        );
    }

    let content = Config::scaffold()?;
    std::fs::write(&args.config, content)?;
    info!("Config written to {}", args.config.display());
    Ok(())
}
