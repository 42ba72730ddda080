//! # Geoclean
//!
//! A library for correcting geographic name inconsistencies in tabular data.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Punctuation- and case-insensitive name normalization
//! - Fuzzy matching against canonical state and district dictionaries
//! - Column-wise cleaning of CSV and Excel files, preserving format

pub mod cell;
pub mod correction;
pub mod error;
pub mod normalize;
pub mod table;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
