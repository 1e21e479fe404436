//! Shared value types for the datelex analysis pipeline.
//!
//! This crate holds the plain-data side of the system:
//!
//! - **config**: `DatePattern` and `NormalizerConfig`, the records the
//!   configuration layer supplies before filtering starts
//! - **locale**: type-safe locale identifiers for pattern month names
//!
//! Pattern validation and all filtering behavior live in `datelex-analysis`;
//! nothing here touches a token.

pub mod config;
pub mod locale;

pub use config::{DEFAULT_OUTPUT_PATTERN, DatePattern, NormalizerConfig};
pub use locale::{LocaleId, ParseLocaleError};
