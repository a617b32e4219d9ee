//! # Verse Records
//!
//! File: bot/src/dataset/record.rs
//!
//! One `Record` per dataset row. `RawRow` is the CSV shape; `Record` is the
//! validated, typed form the rest of the bot works with.
//!
use serde::Deserialize;

/// A single verse, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub chapter: u32,
    pub verse: u32,
    /// Dense `1..=N` position across the whole corpus.
    pub global_index: u32,
    pub page: u32,
    /// Page number written with Arabic-Indic digits.
    pub page_original: String,
    /// Reference written with Arabic-Indic digits, e.g. `٢:٢٥٥`.
    pub reference_original: String,
    pub chapter_name_original: String,
    pub chapter_name_translated: String,
    pub original_text: String,
    pub translation: String,
    pub glyph_primary: String,
    pub glyph_secondary: String,
}

impl Record {
    /// The reference in western digits, e.g. `2:255`.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.chapter, self.verse)
    }
}

/// Column layout of the dataset file. Extra columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    #[serde(rename = "SurahAyahRefNumeric")]
    pub reference_numeric: String,
    #[serde(rename = "SurahAyahRefArabic")]
    pub reference_original: String,
    #[serde(rename = "GlobalAyahNo")]
    pub global_index: String,
    #[serde(rename = "PageNoEnglish")]
    pub page: String,
    #[serde(rename = "PageNoArabic")]
    pub page_original: String,
    #[serde(rename = "ArabicText")]
    pub original_text: String,
    #[serde(rename = "Translation")]
    pub translation: String,
    #[serde(rename = "GlyphV1")]
    pub glyph_primary: String,
    #[serde(rename = "GlyphV2")]
    pub glyph_secondary: String,
    #[serde(rename = "SurahNameArabic")]
    pub chapter_name_original: String,
    #[serde(rename = "SurahNameEnglish")]
    pub chapter_name_translated: String,
}

impl TryFrom<RawRow> for Record {
    type Error = String;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        let (chapter, verse) = parse_numeric_reference(&raw.reference_numeric)?;
        Ok(Record {
            chapter,
            verse,
            global_index: parse_positive("GlobalAyahNo", &raw.global_index)?,
            page: parse_positive("PageNoEnglish", &raw.page)?,
            page_original: raw.page_original,
            reference_original: raw.reference_original,
            chapter_name_original: raw.chapter_name_original,
            chapter_name_translated: raw.chapter_name_translated,
            original_text: raw.original_text,
            translation: raw.translation,
            glyph_primary: raw.glyph_primary,
            glyph_secondary: raw.glyph_secondary,
        })
    }
}

fn parse_numeric_reference(value: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("SurahAyahRefNumeric '{}' is not CHAPTER:VERSE", value);
    let (chapter, verse) = value.split_once(':').ok_or_else(invalid)?;
    let chapter = chapter.trim().parse::<u32>().map_err(|_| invalid())?;
    let verse = verse.trim().parse::<u32>().map_err(|_| invalid())?;
    if chapter == 0 || verse == 0 {
        return Err(invalid());
    }
    Ok((chapter, verse))
}

fn parse_positive(column: &str, value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} '{}' is not a positive integer", column, value)),
    }
}
