//! Core types and capabilities for the Weft composition engine.
//!
//! This crate provides the foundational pieces used by `weft-compose`:
//! - Engine configuration (the path delimiter)
//! - Dotted-path helpers used during lookup escalation
//! - The content-capture capability shared by fragments and slot defaults
//! - Error types

pub mod config;
pub mod content;
pub mod error;
pub mod path;

pub use config::*;
pub use content::*;
pub use error::*;
