//! # Fixed Message Texts
//!
//! File: bot/src/render/messages.rs
//!
//! Everything the bot says that does not come from the dataset.
//!
use super::OutgoingText;
use crate::core::error::LookupError;

pub const WELCOME: &str = "🌙📖✨\n\n\
    ٱلسَّـــــــــــلَامُ عَلَيْـــــــــــكُمْ وَرَحْمَةُ ٱللَّٰهِ وَبَرَكاتُهُ ♡\u{200E}\n\n\
    من فضلك قدّم مرجع الآية (على سبيل المثال: ٢:٢٥٥)\n\
    Please provide a verse reference (e.g., 2:255)";

pub const FETCHING: &str = "🌙 Fetching Ayah...";
pub const PREPARING: &str = "✨ Preparing result...";
pub const DONE: &str = "Here you go 🌙";
pub const DETAIL_PLACEHOLDER: &str = "Select Glyph V1 or V2 above to view glyph codes.";

pub const INVALID_FORMAT: &str = "❌ Invalid format. Please use Surah:Ayah format (e.g., 2:255)";
pub const NOT_FOUND: &str = "❌ Ayah not found. Please check the Surah and Ayah numbers.";
pub const RECORD_MISSING: &str = "❌ Could not retrieve the verse.";

pub fn welcome() -> OutgoingText {
    OutgoingText::plain(WELCOME)
}

pub fn status(text: &str) -> OutgoingText {
    OutgoingText::plain(text)
}

pub fn detail_placeholder() -> OutgoingText {
    OutgoingText::plain(DETAIL_PLACEHOLDER)
}

/// Short reply for a reference that could not be resolved.
pub fn lookup_failed(error: &LookupError) -> &'static str {
    match error {
        LookupError::InvalidFormat { .. } => INVALID_FORMAT,
        LookupError::NotFound { .. } => NOT_FOUND,
    }
}
