//! # QClip Page Listing
//!
//! File: bot/src/commands/page.rs
//!
//! Implements `qclip page <N>`: list the verses printed on a mushaf page,
//! using the page index built at load time.
//!
//! ```bash
//! qclip page 42
//! ```
//!
use super::DatasetArgs;
use crate::core::config;
use crate::core::error::Result;
use crate::dataset::Dataset;
use anyhow::{bail, Context};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Page number (western digits).
    pub page: u32,

    #[command(flatten)]
    pub source: DatasetArgs,
}

pub async fn handle_page(args: PageArgs) -> Result<()> {
    let cfg = config::resolve(args.source.overrides())
        .context("Failed to load QClip configuration")?;
    let dataset = Dataset::load(&cfg.dataset.path)?;

    let verses: Vec<_> = dataset.page(args.page).collect();
    if verses.is_empty() {
        bail!(
            "Page {} has no verses in {} (dataset has {} pages).",
            args.page,
            cfg.dataset.path,
            dataset.page_count()
        );
    }

    println!("📄 Page {} ({} verses)", args.page, verses.len());
    for record in verses {
        println!(
            "  {:<8} #{:<5} {}",
            record.reference(),
            record.global_index,
            record.chapter_name_translated
        );
    }
    Ok(())
}
