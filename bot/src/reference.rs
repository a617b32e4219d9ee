//! # Verse Reference Parsing
//!
//! File: bot/src/reference.rs
//!
//! ## Overview
//!
//! Turns what a user typed (`2:255`, `٢:٢٥٥`, ` 2 : 255 `) into a
//! `VerseRef` and resolves it against the dataset.
//!
//! Arabic-Indic (`٠`–`٩`), Extended Arabic-Indic (`۰`–`۹`) and fullwidth
//! (`０`–`９`) digits are folded to ASCII before parsing. Other Unicode
//! digit scripts are not recognised.
//!
//! Anything that does not split into exactly two integers on `:` is
//! `LookupError::InvalidFormat`. An integer is an optional `+`/`-` sign
//! followed by digits, of any size. A well-formed pair with no record is
//! `LookupError::NotFound`, including `-2:255` and values beyond `u32`.
//!
use crate::core::error::LookupError;
use crate::dataset::{Dataset, Record};
use std::fmt;
use std::str::FromStr;

/// A parsed `chapter:verse` pair. Not yet checked against the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRef {
    pub chapter: i64,
    pub verse: i64,
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseRef {
    type Err = LookupError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(input.trim());
        let invalid = || LookupError::InvalidFormat {
            input: input.trim().to_string(),
        };

        let mut parts = normalized.split(':');
        let (Some(chapter), Some(verse), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let chapter = parse_integer(chapter).ok_or_else(invalid)?;
        let verse = parse_integer(verse).ok_or_else(invalid)?;
        Ok(VerseRef { chapter, verse })
    }
}

/// Signed decimal integer, saturating at the `i64` bounds. `None` when the
/// text is not a sign followed by one or more ASCII digits.
fn parse_integer(part: &str) -> Option<i64> {
    let part = part.trim();
    let digits = part.strip_prefix(&['+', '-'][..]).unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let saturated = if part.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    };
    Some(part.parse::<i64>().unwrap_or(saturated))
}

/// Replaces Arabic-Indic, Extended Arabic-Indic and fullwidth digits with
/// ASCII digits.
pub fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => shift_digit(c, '\u{0660}'),
            '\u{06F0}'..='\u{06F9}' => shift_digit(c, '\u{06F0}'),
            '\u{FF10}'..='\u{FF19}' => shift_digit(c, '\u{FF10}'),
            other => other,
        })
        .collect()
}

fn shift_digit(c: char, zero: char) -> char {
    char::from(b'0' + (c as u32 - zero as u32) as u8)
}

/// Parses `input` and looks the reference up.
pub fn lookup<'a>(dataset: &'a Dataset, input: &str) -> Result<&'a Record, LookupError> {
    let reference: VerseRef = input.parse()?;
    let chapter = u32::try_from(reference.chapter).ok();
    let verse = u32::try_from(reference.verse).ok();
    chapter
        .zip(verse)
        .and_then(|(chapter, verse)| dataset.by_reference(chapter, verse))
        .ok_or(LookupError::NotFound {
            chapter: reference.chapter,
            verse: reference.verse,
        })
}
