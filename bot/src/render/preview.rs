//! # Verse Preview
//!
//! File: bot/src/render/preview.rs
//!
//! The preview is the main verse message. Its sections always appear in
//! this order:
//!
//! 1. `﴿ chapter name || reference ﴾` in the original script
//! 2. `【 chapter name || reference 】` in translation
//! 3. the Basmala, except for chapter 9
//! 4. the original-script verse
//! 5. the translation
//! 6. the page footer
//!
use super::OutgoingText;
use crate::dataset::Record;

/// Chapter 9 (At-Tawbah) is the only chapter that does not open with the Basmala.
pub const CHAPTER_WITHOUT_BASMALA: u32 = 9;

pub const BASMALA: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِــيمِ";

pub fn render(record: &Record) -> OutgoingText {
    let mut body = String::new();

    body.push_str(&format!(
        "﴿ {} || {} ﴾\n",
        record.chapter_name_original, record.reference_original
    ));
    body.push_str(&format!(
        "【 {} || {} 】\n\n",
        record.chapter_name_translated,
        record.reference()
    ));

    if record.chapter != CHAPTER_WITHOUT_BASMALA {
        body.push_str(BASMALA);
        body.push_str("\n\n");
    }

    body.push_str(&record.original_text);
    body.push_str("\n\n");
    body.push_str(&record.translation);
    body.push_str("\n\n");
    body.push_str(&page_footer(record));

    OutgoingText::plain(body)
}

fn page_footer(record: &Record) -> String {
    format!(
        "📄 Page No. {} || رقم الصفحة {}",
        record.page, record.page_original
    )
}
