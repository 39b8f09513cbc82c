#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Markyt Landing Library
//!
//! Slug derivation and landing URL composition.
//!
//! # Modules
//!
//! - [`slug`]: Deterministic slug derivation from lead attributes
//! - [`url`]: Full landing URL composition against a client subdomain

pub mod slug;
pub mod url;

mod proptests;

// Re-export key items at crate root for convenience
pub use slug::{LandingSlug, derive_slug, normalize_company};
pub use url::{NO_LANDING_PAGE, landing_url, landing_url_untagged};
