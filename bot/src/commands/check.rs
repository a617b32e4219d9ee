//! # QClip Deployment Check
//!
//! File: bot/src/commands/check.rs
//!
//! ## Overview
//!
//! Implements `qclip check`: verify that a deployment has what the bot
//! needs before `qclip run` is started by a process manager.
//!
//! - The dataset loads and passes every startup validation (fatal if not)
//! - Summary counts (verses, chapters, pages)
//! - Rows with empty glyph or translation columns (reported, not fatal)
//! - Whether a bot token is configured (reported, not fatal)
//!
//! ```bash
//! qclip check --data ./QClip.csv
//! ```
//!
use super::DatasetArgs;
use crate::core::config;
use crate::core::error::Result;
use crate::dataset::{Dataset, Record};
use anyhow::Context;
use clap::Parser;
use tracing::warn;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: DatasetArgs,

    /// Telegram bot token to report on. Never printed.
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

pub async fn handle_check(args: CheckArgs) -> Result<()> {
    let mut overrides = args.source.overrides();
    overrides.token = args.token;
    let cfg = config::resolve(overrides).context("Failed to load QClip configuration")?;

    println!("Verifying QClip deployment...\n");

    let dataset = Dataset::load(&cfg.dataset.path).context("Dataset check failed")?;
    println!("✅ Dataset: {}", cfg.dataset.path);
    println!("   Verses:   {}", dataset.total());
    println!("   Chapters: {}", dataset.chapter_count());
    println!("   Pages:    {}", dataset.page_count());

    let incomplete: Vec<&Record> = dataset.records().filter(|r| is_incomplete(r)).collect();
    if incomplete.is_empty() {
        println!("✅ All verses have translation and glyph codes");
    } else {
        println!(
            "⚠️  {} verse(s) have empty translation or glyph columns:",
            incomplete.len()
        );
        for record in incomplete.iter().take(10) {
            warn!("Incomplete verse {}", record.reference());
            println!("   - {}", record.reference());
        }
    }

    if cfg.telegram.token.is_some() {
        println!("✅ Telegram bot token: configured");
    } else {
        println!("⚠️  Telegram bot token: missing (set TELEGRAM_BOT_TOKEN before `qclip run`)");
    }

    println!("\nDeployment check finished.");
    Ok(())
}

fn is_incomplete(record: &Record) -> bool {
    [
        &record.translation,
        &record.glyph_primary,
        &record.glyph_secondary,
    ]
    .iter()
    .any(|field| field.trim().is_empty())
}
