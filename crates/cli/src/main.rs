//! Stringify CLI — the main entry point.
//!
//! Commands:
//! - `join`       — Join input lines into one string
//! - `selectors`  — List the built-in selectors
//! - `config`     — Show, locate, validate or create the config file

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "stringify",
    about = "Join lines into one string with separators and selectors",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Join input lines into one string
    Join(commands::join::JoinArgs),

    /// List the built-in selectors
    Selectors,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
    /// Check the config file for errors
    Validate,
    /// Write a default config file if none exists
    Init,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Join(args) => commands::join::run(args)?,
        Commands::Selectors => commands::selectors::run()?,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::config_cmd::show(json)?,
            ConfigAction::Path => commands::config_cmd::path()?,
            ConfigAction::Validate => commands::config_cmd::validate()?,
            ConfigAction::Init => commands::config_cmd::init()?,
        },
    }

    Ok(())
}
