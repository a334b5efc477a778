//! Stellarium goto CLI
//!
//! Command-line interface for pointing Stellarium at the coordinates of a
//! FITS image.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use stellarium_goto::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "stellarium-goto")]
#[command(
    about = "Send a view command to Stellarium with the RA/DEC value from a FITS file"
)]
#[command(version)]
struct Args {
    /// Path to the FITS file
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stellarium view endpoint (overrides config file)
    #[arg(long)]
    url: Option<String>,

    /// Maximum number of header blocks to read (overrides config file)
    #[arg(long)]
    max_blocks: Option<usize>,

    /// Log level
    #[arg(short, long, default_value = "info", value_parser = parse_log_level)]
    log_level: Level,
}

fn parse_log_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid log level: {}. Use: trace, debug, info, warn, error",
            s
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: file={:?}, config={:?}, url={:?}, max_blocks={:?}, log_level={:?}",
        args.file,
        args.config,
        args.url,
        args.max_blocks,
        args.log_level
    );

    let Some(file) = args.file else {
        Args::command().print_help()?;
        return Ok(());
    };

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(url) = args.url {
        config.stellarium.url = url;
    }
    if let Some(max_blocks) = args.max_blocks {
        config.header.max_blocks = max_blocks;
    }

    tracing::info!("Stellarium endpoint: {}", config.stellarium.url);
    tracing::info!("Header block limit: {}", config.header.max_blocks);

    match stellarium_goto::run(config, &file).await {
        Ok(outcome) => {
            tracing::debug!("Finished with {:?}", outcome);
            Ok(())
        }
        Err(e) if e.is_user_facing() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
