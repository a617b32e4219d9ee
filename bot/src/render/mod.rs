//! # QClip Message Rendering
//!
//! File: bot/src/render/mod.rs
//!
//! ## Overview
//!
//! Pure functions that turn dataset records into chat message text and
//! button layouts. Nothing here talks to Telegram; the transport converts
//! the results into API calls.
//!
//! ## Architecture
//!
//! - `preview.rs`: The verse message (heading, Basmala, text, translation, page)
//! - `detail.rs`: The glyph-code message and `GlyphMode`
//! - `keyboard.rs`: Transport-agnostic inline button layouts
//! - `messages.rs`: Fixed texts (welcome, status, errors)
//!
//! ## Examples
//!
//! ```rust
//! let record = dataset.by_reference(2, 255).unwrap();
//! let text = render::preview::render(record);
//! let buttons = render::keyboard::preview(record.global_index);
//! ```
//!
pub mod detail;
pub mod keyboard;
pub mod messages;
pub mod preview;

pub use detail::GlyphMode;
pub use keyboard::{Button, Keyboard};

/// How the transport should interpret `OutgoingText::body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    MarkdownV2,
}

/// A message body ready to be sent or used to replace an existing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingText {
    pub body: String,
    pub markup: Markup,
}

impl OutgoingText {
    pub fn plain(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            markup: Markup::Plain,
        }
    }

    pub fn markdown(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            markup: Markup::MarkdownV2,
        }
    }
}
