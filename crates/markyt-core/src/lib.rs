#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Markyt Core Library
//!
//! Core types and errors for the Markyt personalization toolkit.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Lead, client, and message records

pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    Client, ClientStatus, CustomValue, Lead, LeadId, MessageTemplate, Sequence, SequenceId,
    SequenceStep,
};
