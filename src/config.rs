//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::timer::parse_millis;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-ledger")]
#[command(about = "A countdown timer server built on an event ledger")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Timer duration as "M:SS" or "SS"
    #[arg(short, long, default_value = "25:00", value_parser = parse_millis)]
    pub duration: u64,

    /// Clock pulse interval in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the clock pulse interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
