//! # QClip Offline Lookup
//!
//! File: bot/src/commands/lookup.rs
//!
//! ## Overview
//!
//! Implements `qclip lookup <REF>`: resolve a reference exactly like the bot
//! does and print the preview text to stdout. Handy for checking a new
//! dataset without talking to Telegram.
//!
//! ```bash
//! qclip lookup 2:255
//! qclip lookup ٢:٢٥٥ --glyph secondary
//! ```
//!
//! Invalid or unknown references exit with status 1.
//!
use super::DatasetArgs;
use crate::core::config;
use crate::core::error::{QclipError, Result};
use crate::dataset::Dataset;
use crate::reference;
use crate::render::{self, GlyphMode};
use anyhow::Context;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Verse reference as CHAPTER:VERSE (western or Arabic-Indic digits).
    pub reference: String,

    /// Also print the glyph codes of the verse.
    #[arg(long, short, value_enum)]
    pub glyph: Option<GlyphMode>,

    #[command(flatten)]
    pub source: DatasetArgs,
}

pub async fn handle_lookup(args: LookupArgs) -> Result<()> {
    let cfg = config::resolve(args.source.overrides())
        .context("Failed to load QClip configuration")?;
    let dataset = Dataset::load(&cfg.dataset.path)?;

    let record = reference::lookup(&dataset, &args.reference).map_err(QclipError::from)?;
    debug!(
        "'{}' resolved to global index {}",
        args.reference, record.global_index
    );

    println!("{}", render::preview::render(record).body);
    if let Some(mode) = args.glyph {
        println!();
        println!("Glyph {}: {}", mode.tag(), mode.select(record));
    }
    Ok(())
}
