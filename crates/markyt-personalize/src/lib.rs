#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Markyt Personalize Library
//!
//! Token scanning and template substitution.
//!
//! # Modules
//!
//! - [`replacements`]: The value bag substituted into templates
//! - [`tokens`]: Token scanning and classification
//! - [`engine`]: The substitution engine and its fallback text
//! - [`report`]: Resolution accounting for authoring and preview

pub mod engine;
pub mod replacements;
pub mod report;
pub mod tokens;

mod proptests;

// Re-export key items at crate root for convenience
pub use engine::{
    FALLBACK_COMPANY, FALLBACK_LANDING_PAGE, FALLBACK_POSITION, personalize,
    personalize_with_report,
};
pub use replacements::ReplacementSet;
pub use report::RenderReport;
pub use tokens::{SimpleField, Token, TokenKind, mentions_landing_token, scan_tokens};
