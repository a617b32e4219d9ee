//! # QClip Verse Dataset
//!
//! File: bot/src/dataset/mod.rs
//!
//! ## Overview
//!
//! The dataset is the read-only verse table the bot answers from. It is
//! loaded once when a command starts and shared behind an `Arc` afterwards.
//!
//! ## Architecture
//!
//! - `record.rs`: The `Record` type and its CSV row mapping
//! - `loader.rs`: CSV parsing, validation, and index construction
//!
//! Three indices are kept:
//! - `(chapter, verse)` → global index
//! - global index → record (records are stored in global order, so this is a slice lookup)
//! - page number → global indices in file order
//!
//! ## Examples
//!
//! ```rust
//! let dataset = Dataset::load("QClip.csv")?;
//! let record = dataset.by_reference(2, 255).expect("Ayat al-Kursi");
//! assert_eq!(dataset.by_global(record.global_index), Some(record));
//! ```
//!
use crate::core::error::Result;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

mod loader;
mod record;

pub use record::Record;

/// All verses plus the lookup indices built at load time.
#[derive(Debug)]
pub struct Dataset {
    /// Sorted by global index; `records[i].global_index == i + 1`.
    records: Vec<Record>,
    by_reference: HashMap<(u32, u32), u32>,
    pages: BTreeMap<u32, Vec<u32>>,
}

impl Dataset {
    /// Loads and validates the CSV file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        loader::load_from_path(path.as_ref())
    }

    /// Number of records, which is also the highest global index.
    pub fn total(&self) -> u32 {
        self.records.len() as u32
    }

    pub fn by_reference(&self, chapter: u32, verse: u32) -> Option<&Record> {
        self.by_reference
            .get(&(chapter, verse))
            .and_then(|&global| self.by_global(global))
    }

    pub fn by_global(&self, index: u32) -> Option<&Record> {
        let slot = (index as usize).checked_sub(1)?;
        self.records.get(slot)
    }

    /// Records printed on `page`, in dataset order. Empty for unknown pages.
    pub fn page(&self, page: u32) -> impl Iterator<Item = &Record> + '_ {
        self.pages
            .get(&page)
            .into_iter()
            .flatten()
            .filter_map(move |&global| self.by_global(global))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.chapter)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}
