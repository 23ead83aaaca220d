//! txboard main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use txboard_api::start_server;
use txboard_config::Config;
use txboard_core::{build_source, load_records, TransactionList};

#[derive(Parser, Debug)]
#[command(name = "txboard")]
#[command(author = "txboard Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight payments dashboard with a filterable transaction list", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    // The logger is configured from the file, so the fallback warning is deferred.
    let (config, missing) = match Config::load(args.config.clone()) {
        Ok(config) => (config, None),
        Err(e) if e.falls_back_to_defaults() => (Config::default(), Some(e)),
        Err(e) => {
            init_logger("info");
            log::error!("{}", e.to_details());
            return Err(e).with_context(|| format!("Failed to load configuration from {}", args.config.display()));
        }
    };

    init_logger(&config.logging.level);

    match missing {
        Some(e) => log::warn!("{}, using defaults", e.to_details()),
        None => log::info!("Config loaded from {}", args.config.display()),
    }

    let rt = Runtime::new()?;
    rt.block_on(async {
        let source = build_source(&config)?;
        log::info!("Using {} record source", source.name());

        let records = load_records(source.as_ref()).await;
        let list = TransactionList::new(records, config.pagination.default_page_size)?;

        start_server(config, list, source).await?;
        Ok(())
    })
}

fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
