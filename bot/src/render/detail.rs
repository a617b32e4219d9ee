//! # Glyph Detail
//!
//! File: bot/src/render/detail.rs
//!
//! The detail message shows one of the two glyph-code encodings of a verse
//! inside a MarkdownV2 code block, so clients render it in a monospace font
//! and allow one-tap copying.
//!
use super::OutgoingText;
use crate::dataset::Record;

/// Which glyph-code column to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GlyphMode {
    /// `GlyphV1`
    #[default]
    Primary,
    /// `GlyphV2`
    Secondary,
}

impl GlyphMode {
    /// Tag used in button payloads and labels.
    pub fn tag(self) -> &'static str {
        match self {
            GlyphMode::Primary => "V1",
            GlyphMode::Secondary => "V2",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "V1" => Some(GlyphMode::Primary),
            "V2" => Some(GlyphMode::Secondary),
            _ => None,
        }
    }

    pub fn select(self, record: &Record) -> &str {
        match self {
            GlyphMode::Primary => &record.glyph_primary,
            GlyphMode::Secondary => &record.glyph_secondary,
        }
    }
}

pub fn render(record: &Record, mode: GlyphMode) -> OutgoingText {
    OutgoingText::markdown(format!(
        "```\n{}\n```",
        escape_code_block(mode.select(record))
    ))
}

/// Inside MarkdownV2 `pre` blocks only backslash and backtick need escaping.
fn escape_code_block(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
