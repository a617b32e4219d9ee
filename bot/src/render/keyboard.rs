//! # Inline Keyboards
//!
//! File: bot/src/render/keyboard.rs
//!
//! Button layouts as plain data. Each button pairs a label with the
//! `Action` it triggers; the transport encodes the action as callback data.
//!
use super::GlyphMode;
use crate::action::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Rows of buttons, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

/// Glyph selection buttons attached to the preview message.
pub fn preview(index: u32) -> Keyboard {
    let glyph = |mode: GlyphMode| {
        Button::new(
            format!("Glyph {}", mode.tag()),
            Action::Glyph { mode, index },
        )
    };
    Keyboard {
        rows: vec![vec![glyph(GlyphMode::Primary), glyph(GlyphMode::Secondary)]],
    }
}

/// Navigation buttons attached to the detail message.
pub fn detail(index: u32) -> Keyboard {
    Keyboard {
        rows: vec![vec![
            Button::new(
                "« Previous",
                Action::Navigate {
                    direction: Direction::Previous,
                    index,
                },
            ),
            Button::new("🔎 Search Again", Action::Reset),
            Button::new(
                "Next »",
                Action::Navigate {
                    direction: Direction::Next,
                    index,
                },
            ),
        ]],
    }
}
