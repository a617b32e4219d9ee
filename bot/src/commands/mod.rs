//! # QClip Command Modules
//!
//! File: bot/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level `qclip` subcommands and the
//! arguments they share. Each subcommand defines its own `*Args` struct and
//! a `handle_*` function called from `main.rs`.
//!
//! ## Commands
//!
//! - `run`: Start the Telegram bot (long polling)
//! - `lookup`: Render a verse to stdout without Telegram
//! - `page`: List the verses printed on a page
//! - `check`: Validate the dataset and configuration before deploying
//!
use crate::core::config::Overrides;
use clap::Args;
use std::path::PathBuf;

/// Implements `qclip check` (deployment verification).
pub mod check;
/// Implements `qclip lookup` (offline verse rendering).
pub mod lookup;
/// Implements `qclip page` (verses on a page).
pub mod page;
/// Implements `qclip run` (the Telegram bot).
pub mod run;

/// Dataset location flag shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Path to the verse CSV. Overrides `[dataset] path` from the config files.
    #[arg(long, short = 'd', env = "QCLIP_DATA")]
    pub data: Option<PathBuf>,
}

impl DatasetArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data: self.data.clone(),
            token: None,
        }
    }
}
