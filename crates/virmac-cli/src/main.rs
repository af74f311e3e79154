mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use virmac::MacPrefix;

const DEFAULT_CONFIG_PATH: &str = "/etc/virmac/config.yaml";

#[derive(Parser)]
#[command(name = "virmac")]
#[command(author, version, about = "MAC address tool for virtual network interfaces", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of an address
    Format {
        /// MAC address (e.g., 0:1E:FC:E:3a:CB)
        mac: String,
    },
    /// Compare two addresses
    Compare {
        /// First address
        a: String,
        /// Second address
        b: String,
        /// Parse both addresses and compare their bytes instead of their text
        #[arg(long)]
        binary: bool,
    },
    /// Generate random addresses
    Generate {
        /// Prefix for the first three octets (e.g., 52:54:00)
        #[arg(long)]
        prefix: Option<MacPrefix>,
        /// Number of addresses to generate
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the prefix and type of an address
    Info {
        /// MAC address (e.g., 52:54:00:12:34:56)
        mac: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, command output to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "virmac=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Format { mac } => commands::format::handle(&mac)?,
        Commands::Compare { a, b, binary } => commands::compare::handle(&a, &b, binary)?,
        Commands::Generate {
            prefix,
            count,
            seed,
        } => {
            let config = load_config(&cli.config);
            commands::generate::handle(
                prefix.unwrap_or(config.generate.prefix),
                count.unwrap_or(config.generate.count),
                seed,
            )?
        }
        Commands::Info { mac } => commands::info::handle(&mac)?,
    }

    Ok(())
}

/// Load configuration - try specified path, then current directory, then defaults
fn load_config(path: &str) -> Config {
    let config_path = resolve_config_path(path);

    match Config::from_file(&config_path) {
        Ok(cfg) => {
            info!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) if !Path::new(&config_path).exists() => {
            info!("No configuration at {} ({}), using defaults", config_path, e);
            Config::default()
        }
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path, e);
            info!("Using default configuration");
            Config::default()
        }
    }
}

fn resolve_config_path(path: &str) -> String {
    if Path::new(path).exists() || path != DEFAULT_CONFIG_PATH {
        return path.to_string();
    }

    // If default path doesn't exist, try current directory
    let current_dir_config = "config.yaml";
    if Path::new(current_dir_config).exists() {
        info!("Config not found at {}, using {}", path, current_dir_config);
        current_dir_config.to_string()
    } else {
        path.to_string()
    }
}
