//! Integration tests for the full render path.

use chrono::{DateTime, Utc};
use markyt_sequence::SequenceRenderer;

use crate::common::{TestHarness, anonymous_lead, outreach_sequence, plain_sequence, sample_lead};

#[test]
fn test_full_sequence_render_for_populated_lead() {
    let harness = TestHarness::new();
    let renderer = SequenceRenderer::new();
    let sequence = outreach_sequence();

    let rendered = renderer.render_for_lead(&sequence, &harness.client, &sample_lead());

    assert_eq!(rendered.sequence_id, sequence.id);
    assert_eq!(rendered.sequence_name, "abm-outreach");
    assert_eq!(rendered.lead_id.as_str(), "7");
    assert_eq!(rendered.steps.len(), 3);

    assert_eq!(rendered.steps[0].message.subject, "Quick question, Jane");
    assert_eq!(
        rendered.steps[0].message.body,
        "Hi Jane, I noticed Acme Corp! works in fintech."
    );
    assert_eq!(
        rendered.steps[1].message.body,
        "We put together something for you: \
         https://go.example.com/janeD.acmecorp?linkedin=true"
    );
    assert_eq!(
        rendered.steps[2].message.body,
        "Targets we usually reach: CFO, COO. Still interested?"
    );
}

#[test]
fn test_missing_subdomain_degrades_to_fallback_text() {
    let harness = TestHarness::without_subdomain();
    let renderer = SequenceRenderer::new();

    let rendered = renderer.render_for_lead(&outreach_sequence(), &harness.client, &sample_lead());

    assert_eq!(
        rendered.steps[1].message.body,
        "We put together something for you: (No Landing Page)"
    );
}

#[test]
fn test_anonymous_lead_gets_id_keyed_landing_url() {
    let harness = TestHarness::new();
    let renderer = SequenceRenderer::new();

    let rendered = renderer.render_for_lead(&outreach_sequence(), &harness.client, &anonymous_lead());

    assert_eq!(rendered.lead_id.as_str(), "42");
    assert!(
        rendered.steps[1]
            .message
            .body
            .contains("https://go.example.com/landing-page/42?linkedin=true")
    );
    // Simple tokens degrade per field: names go empty, company gets text.
    assert_eq!(
        rendered.steps[0].message.body,
        "Hi , I noticed (No Company) works in {custom.industry}."
    );
}

#[test]
fn test_plain_sequence_never_builds_landing_url() {
    let harness = TestHarness::without_subdomain();
    let renderer = SequenceRenderer::new();

    let rendered = renderer.render_for_lead(&plain_sequence(), &harness.client, &sample_lead());

    assert_eq!(rendered.steps[0].message.subject, "Hello Jane");
    assert_eq!(rendered.steps[0].message.body, "Just checking in with Acme Corp!.");
}

#[test]
fn test_batch_render_is_independent_per_lead() {
    let harness = TestHarness::new();
    let renderer = SequenceRenderer::new();
    let leads = vec![sample_lead(), anonymous_lead()];

    let rendered = renderer.render_batch(&outreach_sequence(), &harness.client, &leads);

    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].steps[1].message.body.contains("janeD.acmecorp"));
    assert!(rendered[1].steps[1].message.body.contains("landing-page/42"));
}

#[test]
fn test_schedule_stamping_follows_delays() {
    let harness = TestHarness::new();
    let renderer = SequenceRenderer::new();
    let start = DateTime::parse_from_rfc3339("2026-05-01T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc);

    let rendered =
        renderer.render_for_lead_at(&outreach_sequence(), &harness.client, &sample_lead(), start);

    let stamps: Vec<String> = rendered
        .steps
        .iter()
        .map(|step| step.scheduled_at.unwrap().to_rfc3339())
        .collect();
    assert_eq!(
        stamps,
        [
            "2026-05-01T09:30:00+00:00",
            "2026-05-04T09:30:00+00:00",
            "2026-05-08T09:30:00+00:00",
        ]
    );
}

#[test]
fn test_rendered_sequence_serializes_to_json() {
    let harness = TestHarness::new();
    let renderer = SequenceRenderer::new();

    let rendered = renderer.render_for_lead(&plain_sequence(), &harness.client, &sample_lead());
    let json = serde_json::to_string_pretty(&rendered).unwrap();

    assert!(json.contains("\"sequence_name\": \"plain-checkin\""));
    assert!(json.contains("\"subject\": \"Hello Jane\""));
}
