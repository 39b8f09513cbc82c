//! Message templates and outreach sequences.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::SequenceId;

/// A raw message template before personalization.
///
/// Subject and body may both contain `{token}` placeholders; nothing in
/// this type interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Subject line template.
    pub subject: String,

    /// Body template.
    pub body: String,
}

impl MessageTemplate {
    /// Creates a template from subject and body text.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// One step of an outreach sequence: a template plus its send offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    /// The message to send at this step.
    pub template: MessageTemplate,

    /// Days after the sequence start this step is sent (0 = day one).
    #[serde(default)]
    pub delay_days: u32,
}

impl SequenceStep {
    /// Creates a step sent `delay_days` after sequence start.
    pub fn new(template: MessageTemplate, delay_days: u32) -> Self {
        Self {
            template,
            delay_days,
        }
    }

    /// Returns the send instant for this step given a sequence start.
    ///
    /// Returns `None` when `start` plus the delay falls outside the
    /// representable calendar range.
    pub fn scheduled_at(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        start.checked_add_signed(Duration::days(i64::from(self.delay_days)))
    }
}

/// An ordered outreach sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Unique sequence identifier.
    pub id: SequenceId,

    /// Human-readable sequence name.
    pub name: String,

    /// Steps in send order.
    pub steps: Vec<SequenceStep>,
}

impl Sequence {
    /// Creates a sequence with a fresh ID.
    pub fn new(name: impl Into<String>, steps: Vec<SequenceStep>) -> Self {
        Self {
            id: SequenceId::new(),
            name: name.into(),
            steps,
        }
    }
}
