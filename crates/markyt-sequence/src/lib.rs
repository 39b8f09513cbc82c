#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Markyt Sequence Library
//!
//! Renders outreach sequences for leads.
//!
//! # Modules
//!
//! - [`render`]: The sequence renderer and its rendered output types
//! - [`file`]: TOML sequence-file loading

pub mod file;
pub mod render;

// Re-export key items at crate root for convenience
pub use file::{MAX_DELAY_DAYS, SequenceFile, load_sequence};
pub use markyt_core::{Error, Result};
pub use render::{
    RenderedMessage, RenderedSequence, RenderedStep, SequenceRenderer, render_message,
};
