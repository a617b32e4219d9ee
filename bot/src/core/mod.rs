//! # QClip Core Infrastructure
//!
//! File: bot/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{QclipError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
