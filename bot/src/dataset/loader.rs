//! # Dataset Loader
//!
//! File: bot/src/dataset/loader.rs
//!
//! ## Overview
//!
//! Reads the verse CSV once at startup and builds the three lookup indices.
//! Any bad row aborts the load: a corrupt dataset should stop the bot from
//! starting rather than leave holes in navigation.
//!
//! ## Validation
//!
//! - every row deserializes and its numeric columns parse
//! - `(chapter, verse)` keys are unique
//! - global indices are exactly `1..=N` (each present once)
//! - at least one row exists
//!
use super::record::{RawRow, Record};
use super::Dataset;
use crate::core::error::{QclipError, Result};
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Opens `path` and loads it with [`load_from_reader`].
pub fn load_from_path(path: &Path) -> Result<Dataset> {
    info!("Loading dataset from {}", path.display());
    let file = std::fs::File::open(path)
        .map_err(|e| QclipError::StartupData(format!("cannot open {}: {}", path.display(), e)))?;
    load_from_reader(file).with_context(|| format!("Failed to load dataset {}", path.display()))
}

/// Parses CSV data with a header row into a [`Dataset`].
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| QclipError::StartupDataRow {
            row,
            reason: e.to_string(),
        })?;
        let record =
            Record::try_from(raw).map_err(|reason| QclipError::StartupDataRow { row, reason })?;
        rows.push(record);
    }

    if rows.is_empty() {
        return Err(QclipError::StartupData("dataset contains no rows".into()).into());
    }
    build_indices(rows)
}

fn build_indices(rows: Vec<Record>) -> Result<Dataset> {
    let total = rows.len();
    let mut slots: Vec<Option<Record>> = vec![None; total];
    let mut by_reference = HashMap::with_capacity(total);
    let mut pages: BTreeMap<u32, Vec<u32>> = BTreeMap::new();

    for (i, record) in rows.into_iter().enumerate() {
        let row = i + 1;
        let key = (record.chapter, record.verse);
        let global = record.global_index;

        if let Some(previous) = by_reference.insert(key, global) {
            return Err(QclipError::StartupDataRow {
                row,
                reason: format!(
                    "reference {}:{} already used by global index {}",
                    key.0, key.1, previous
                ),
            }
            .into());
        }

        let slot = slots
            .get_mut(global as usize - 1)
            .ok_or_else(|| QclipError::StartupDataRow {
                row,
                reason: format!("GlobalAyahNo {} is outside 1..={}", global, total),
            })?;
        if slot.is_some() {
            return Err(QclipError::StartupDataRow {
                row,
                reason: format!("GlobalAyahNo {} appears more than once", global),
            }
            .into());
        }

        pages.entry(record.page).or_default().push(global);
        *slot = Some(record);
    }

    // N rows with N distinct indices inside 1..=N fill every slot.
    let records: Vec<Record> = slots.into_iter().flatten().collect();
    debug!(
        "Indexed {} records across {} pages",
        records.len(),
        pages.len()
    );

    Ok(Dataset {
        records,
        by_reference,
        pages,
    })
}
