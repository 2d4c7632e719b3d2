//! Pearl VPN terminal entry point.
//!
//! # Usage
//!
//! ```bash
//! # Run with default timings, no logging
//! pearl-tui
//!
//! # Log to a file with a faster simulated connect
//! pearl-tui --log-file pearl.log --log-level debug --connect-delay-ms 500
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use pearl_core::ConnectionConfig;
use pearl_tui::{AppConfig, Runtime, SystemEnv, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pearl VPN terminal client
#[derive(Parser, Debug)]
#[command(name = "pearl-tui")]
#[command(about = "Terminal client shell for Pearl VPN")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file
    ///
    /// The terminal belongs to the UI, so nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Simulated connect latency in milliseconds
    #[arg(long, default_value = "2000")]
    connect_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let file = File::create(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let config = AppConfig {
        connection: ConnectionConfig {
            connect_delay: Duration::from_millis(args.connect_delay_ms),
            ..ConnectionConfig::default()
        },
        ..AppConfig::default()
    };

    tracing::info!(connect_delay_ms = args.connect_delay_ms, "Pearl VPN starting");

    let driver = TerminalDriver::new(SystemEnv::new())?;
    Runtime::new(driver, config).run().await?;

    tracing::info!("Pearl VPN stopped");
    Ok(())
}
