//! # QClip Bot Runner
//!
//! File: bot/src/commands/run.rs
//!
//! ## Overview
//!
//! Implements `qclip run`: load configuration and the dataset, then hand
//! control to the Telegram dispatcher until Ctrl+C.
//!
//! ```bash
//! TELEGRAM_BOT_TOKEN=123:abc qclip run --data ./QClip.csv
//! ```
//!
//! Startup order matters: the dataset is fully validated before the bot
//! connects, so a broken file never produces a half-working bot.
//!
use super::DatasetArgs;
use crate::core::config;
use crate::core::error::{QclipError, Result};
use crate::dataset::Dataset;
use crate::handler::Handler;
use crate::session::SessionStore;
use crate::transport::telegram::{self, TelegramMessenger};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::sync::Arc;
use teloxide::Bot;
use tracing::info;

#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: DatasetArgs,

    /// Telegram bot token.
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

pub async fn handle_run(args: RunArgs) -> Result<()> {
    let mut overrides = args.source.overrides();
    overrides.token = args.token;
    let cfg = config::resolve(overrides).context("Failed to load QClip configuration")?;

    // A token is the only setting without a usable default.
    let token = cfg.telegram.token.clone().ok_or_else(|| {
        anyhow!(QclipError::Config(
            "No Telegram bot token configured. Set TELEGRAM_BOT_TOKEN, pass --token, \
             or add `token` under [telegram] in .qclip.toml."
                .to_string()
        ))
    })?;

    let dataset = Arc::new(Dataset::load(&cfg.dataset.path)?);
    info!(
        "Loaded {} verses across {} pages from {}",
        dataset.total(),
        dataset.page_count(),
        cfg.dataset.path
    );

    let bot = Bot::new(token);
    let handler = Arc::new(Handler::new(
        dataset,
        Arc::new(SessionStore::new()),
        TelegramMessenger::new(bot.clone()),
    ));

    println!("🌙 QClip bot is running. Press Ctrl+C to stop.");
    telegram::dispatch(bot, handler).await;
    println!("\nQClip bot stopped.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_parse() {
        let args = RunArgs::try_parse_from(["run", "--data", "verses.csv", "--token", "1:a"])
            .unwrap();
        assert_eq!(args.source.data.unwrap().to_str(), Some("verses.csv"));
        assert_eq!(args.token.as_deref(), Some("1:a"));
    }
}
