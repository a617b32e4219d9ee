//! # Button Actions
//!
//! File: bot/src/action.rs
//!
//! ## Overview
//!
//! Inline buttons carry a short payload string. This module parses that
//! string once, at the transport boundary, into an `Action` that the
//! interaction handler matches exhaustively.
//!
//! ## Wire Format
//!
//! | Payload        | Action                                   |
//! |----------------|------------------------------------------|
//! | `home`         | `Reset`                                  |
//! | `glyph_V1_{i}` | `Glyph { mode: Primary, index: i }`      |
//! | `glyph_V2_{i}` | `Glyph { mode: Secondary, index: i }`    |
//! | `prev_{i}`     | `Navigate { direction: Previous, index }`|
//! | `next_{i}`     | `Navigate { direction: Next, index }`    |
//!
//! Payloads stay well under Telegram's 64-byte callback data limit.
//!
use crate::render::GlyphMode;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Moves one step from `index`, clamped to `1..=total`. Never wraps.
    pub fn step(self, index: u32, total: u32) -> u32 {
        let target = match self {
            Direction::Previous => index.saturating_sub(1),
            Direction::Next => index.saturating_add(1),
        };
        target.clamp(1, total.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reset,
    Glyph { mode: GlyphMode, index: u32 },
    Navigate { direction: Direction, index: u32 },
}

/// A payload that does not match any known button.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown button payload '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownAction(payload.to_string());
        if payload == "home" {
            return Ok(Action::Reset);
        }

        let parts: Vec<&str> = payload.split('_').collect();
        match parts.as_slice() {
            ["glyph", tag, index] => Ok(Action::Glyph {
                mode: GlyphMode::from_tag(tag).ok_or_else(unknown)?,
                index: index.parse().map_err(|_| unknown())?,
            }),
            [verb @ ("prev" | "next"), index] => Ok(Action::Navigate {
                direction: if *verb == "prev" {
                    Direction::Previous
                } else {
                    Direction::Next
                },
                index: index.parse().map_err(|_| unknown())?,
            }),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Reset => write!(f, "home"),
            Action::Glyph { mode, index } => write!(f, "glyph_{}_{}", mode.tag(), index),
            Action::Navigate {
                direction: Direction::Previous,
                index,
            } => write!(f, "prev_{}", index),
            Action::Navigate {
                direction: Direction::Next,
                index,
            } => write!(f, "next_{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_payloads() {
        assert_eq!("home".parse(), Ok(Action::Reset));
        assert_eq!(
            "glyph_V1_262".parse(),
            Ok(Action::Glyph {
                mode: GlyphMode::Primary,
                index: 262
            })
        );
        assert_eq!(
            "glyph_V2_1".parse(),
            Ok(Action::Glyph {
                mode: GlyphMode::Secondary,
                index: 1
            })
        );
        assert_eq!(
            "prev_7".parse(),
            Ok(Action::Navigate {
                direction: Direction::Previous,
                index: 7
            })
        );
        assert_eq!(
            "next_6236".parse(),
            Ok(Action::Navigate {
                direction: Direction::Next,
                index: 6236
            })
        );
    }

    #[test]
    fn test_reject_unknown_payloads() {
        for payload in [
            "", "Home", "glyph_V3_1", "glyph_V1", "glyph_V1_x", "prev", "prev_", "next_-1",
            "jump_4", "next_1_2",
        ] {
            assert_eq!(
                payload.parse::<Action>(),
                Err(UnknownAction(payload.to_string())),
                "{:?}",
                payload
            );
        }
    }

    #[test]
    fn test_display_matches_wire_format() {
        let action = Action::Glyph {
            mode: GlyphMode::Secondary,
            index: 42,
        };
        assert_eq!(action.to_string(), "glyph_V2_42");
        assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        assert_eq!(Action::Reset.to_string(), "home");
    }

    #[test]
    fn test_step_clamps_at_both_ends() {
        assert_eq!(Direction::Next.step(6, 6), 6);
        assert_eq!(Direction::Previous.step(1, 6), 1);
        assert_eq!(Direction::Next.step(3, 6), 4);
        assert_eq!(Direction::Previous.step(3, 6), 2);
        assert_eq!(Direction::Next.step(u32::MAX, 6), 6);
    }
}
