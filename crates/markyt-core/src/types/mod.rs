//! Core types for Markyt leads, clients, and message sequences.

mod client;
mod ids;
mod lead;
mod message;
mod proptests;

pub use client::{Client, ClientStatus};
pub use ids::{LeadId, SequenceId};
pub use lead::{CustomValue, Lead};
pub use message::{MessageTemplate, Sequence, SequenceStep};
