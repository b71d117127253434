//! Common types used across the workspace.

pub mod locale;
pub mod money;

pub use locale::Locale;
pub use money::{Currency, Money};
