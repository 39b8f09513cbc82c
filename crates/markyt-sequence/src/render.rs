//! Sequence rendering for leads.

use chrono::{DateTime, Utc};
use markyt_core::{Client, Lead, LeadId, MessageTemplate, Sequence, SequenceId};
use markyt_landing::landing_url;
use markyt_personalize::{ReplacementSet, mentions_landing_token, personalize};
use serde::{Deserialize, Serialize};

/// A personalized message ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    /// Personalized subject line.
    pub subject: String,

    /// Personalized body.
    pub body: String,
}

/// One rendered step of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedStep {
    /// Zero-based position within the sequence.
    pub step_index: usize,

    /// Send offset in days, copied from the step.
    pub delay_days: u32,

    /// The personalized message.
    pub message: RenderedMessage,

    /// Concrete send instant, when a start time was supplied and the
    /// delayed instant is representable.
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// A sequence fully rendered for one lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSequence {
    /// The sequence that was rendered.
    pub sequence_id: SequenceId,

    /// Sequence name, for display.
    pub sequence_name: String,

    /// The lead it was rendered for.
    pub lead_id: LeadId,

    /// Rendered steps in send order.
    pub steps: Vec<RenderedStep>,
}

/// Renders one template against an already-built replacement set.
pub fn render_message(
    template: &MessageTemplate,
    replacements: &ReplacementSet,
) -> RenderedMessage {
    RenderedMessage {
        subject: personalize(&template.subject, replacements),
        body: personalize(&template.body, replacements),
    }
}

/// Renders sequences for leads.
///
/// The renderer is the composition point between slug derivation and
/// personalization: when any template of the sequence mentions a
/// landing token, the lead's landing URL is derived once and seeded
/// into the replacement set before the engine runs. The two lower
/// crates stay unaware of each other.
///
/// Rendering is pure. Renders for different leads share no state, so a
/// batch is safe to split across threads; here it is a plain iteration.
#[derive(Debug, Clone, Default)]
pub struct SequenceRenderer {
    landing_alias: Option<String>,
}

impl SequenceRenderer {
    /// Creates a renderer with no tenant landing alias.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the tenant's landing alias token name (e.g.
    /// `cpdlanding`).
    pub fn with_landing_alias(mut self, alias: impl Into<String>) -> Self {
        self.landing_alias = Some(alias.into());
        self
    }

    /// Renders every step of a sequence for one lead.
    pub fn render_for_lead(
        &self,
        sequence: &Sequence,
        client: &Client,
        lead: &Lead,
    ) -> RenderedSequence {
        self.render_inner(sequence, client, lead, None)
    }

    /// Renders a sequence and stamps each step's send instant from
    /// `start` plus the step's delay.
    pub fn render_for_lead_at(
        &self,
        sequence: &Sequence,
        client: &Client,
        lead: &Lead,
        start: DateTime<Utc>,
    ) -> RenderedSequence {
        self.render_inner(sequence, client, lead, Some(start))
    }

    /// Renders a sequence for a batch of leads.
    ///
    /// Each lead renders independently; output order follows the input
    /// slice.
    pub fn render_batch(
        &self,
        sequence: &Sequence,
        client: &Client,
        leads: &[Lead],
    ) -> Vec<RenderedSequence> {
        leads
            .iter()
            .map(|lead| self.render_for_lead(sequence, client, lead))
            .collect()
    }

    fn render_inner(
        &self,
        sequence: &Sequence,
        client: &Client,
        lead: &Lead,
        start: Option<DateTime<Utc>>,
    ) -> RenderedSequence {
        tracing::debug!(
            sequence_id = %sequence.id,
            lead_id = %lead.id,
            steps = sequence.steps.len(),
            "Rendering sequence"
        );

        let replacements = self.replacements_for(client, lead, sequence);

        let steps = sequence
            .steps
            .iter()
            .enumerate()
            .map(|(step_index, step)| RenderedStep {
                step_index,
                delay_days: step.delay_days,
                message: render_message(&step.template, &replacements),
                scheduled_at: start.and_then(|at| step.scheduled_at(at)),
            })
            .collect();

        RenderedSequence {
            sequence_id: sequence.id,
            sequence_name: sequence.name.clone(),
            lead_id: lead.id.clone(),
            steps,
        }
    }

    // The landing URL is attached only when some template in the
    // sequence mentions a landing token.
    fn replacements_for(
        &self,
        client: &Client,
        lead: &Lead,
        sequence: &Sequence,
    ) -> ReplacementSet {
        let mut replacements = ReplacementSet::from_lead(lead);
        if let Some(alias) = &self.landing_alias {
            replacements = replacements.with_landing_alias(alias.clone());
        }

        let needs_landing = sequence.steps.iter().any(|step| {
            mentions_landing_token(&step.template.subject, &replacements)
                || mentions_landing_token(&step.template.body, &replacements)
        });
        if needs_landing {
            replacements = replacements.with_landing_url(landing_url(client, lead));
        }

        replacements
    }
}
