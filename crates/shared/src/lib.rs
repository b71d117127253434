//! Shared identifiers, errors, and configuration for Slownie.
//!
//! This crate provides common types used across the workspace:
//! - Locale and currency identifiers
//! - Money values with decimal precision
//! - Conversion error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AmountConfig, AppConfig, DefaultsConfig, FractionRounding};
pub use error::{ConversionError, ConversionResult};
pub use types::{Currency, Locale, Money};
