//! # QClip Main Entry Point
//!
//! File: bot/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the QClip binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the subcommand handlers
//!
//! ## Architecture
//!
//! - `dataset`, `reference`, `render` and `action` are pure: they load, parse
//!   and format without any I/O beyond reading the CSV once
//! - `session` and `handler` implement the conversation flow against the
//!   `Messenger` port
//! - `transport::telegram` adapts that port to the Telegram Bot API
//! - `commands` wires everything together per subcommand
//!
//! ## Examples
//!
//! ```bash
//! # Start the bot
//! TELEGRAM_BOT_TOKEN=123:abc qclip run --data ./QClip.csv
//!
//! # Try a lookup locally with debug logging
//! qclip -vv lookup 2:255
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod action;
mod commands;
mod core;
mod dataset;
mod handler;
mod reference;
mod render;
mod session;
mod transport;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "qclip",
    about = "🌙 QClip: Quran verse lookup bot for Telegram",
    long_about = "Look up Quran verses by CHAPTER:VERSE and copy their glyph codes.\n\
                  Runs as a Telegram bot, with offline helpers for checking the dataset.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the Telegram bot.
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    /// Print a verse preview without Telegram.
    #[command(alias = "l")]
    Lookup(commands::lookup::LookupArgs),
    /// List the verses on a page.
    #[command(alias = "p")]
    Page(commands::page::PageArgs),
    /// Verify the dataset and configuration.
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args).await,
        Commands::Lookup(args) => commands::lookup::handle_lookup(args).await,
        Commands::Page(args) => commands::page::handle_page(args).await,
        Commands::Check(args) => commands::check::handle_check(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn qclip_cmd() -> Command {
        Command::cargo_bin("qclip").expect("Failed to find qclip binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        qclip_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        qclip_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
