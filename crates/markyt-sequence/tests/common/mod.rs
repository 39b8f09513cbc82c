//! Common test utilities and harness for sequence rendering integration tests.

use markyt_core::{Client, Lead, MessageTemplate, Sequence, SequenceStep};

/// Test harness for integration tests.
///
/// Provides a client fixture plus sample leads and sequences shared by
/// the integration test files.
pub struct TestHarness {
    /// Client the sequences are rendered for.
    pub client: Client,
}

impl TestHarness {
    /// Creates a harness with a live landing subdomain.
    pub fn new() -> Self {
        Self {
            client: Client::new("client-1", "Acme Demand Gen").with_subdomain("go.example.com"),
        }
    }

    /// Creates a harness whose client has no landing subdomain.
    pub fn without_subdomain() -> Self {
        Self {
            client: Client::new("client-2", "Acme Demand Gen"),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A lead with every field populated.
pub fn sample_lead() -> Lead {
    Lead::new("7", "Jane", "Doe")
        .with_company("Acme Corp!")
        .with_position("VP Engineering")
        .with_custom("industry", "fintech")
        .with_custom(
            "roles",
            vec!["CFO".to_string(), "COO".to_string()],
        )
}

/// A lead with no usable name, only an ID.
pub fn anonymous_lead() -> Lead {
    Lead::new(42i64, "", "")
}

/// A three-step sequence whose second step links the landing page.
pub fn outreach_sequence() -> Sequence {
    Sequence::new(
        "abm-outreach",
        vec![
            SequenceStep::new(
                MessageTemplate::new(
                    "Quick question, {first_name}",
                    "Hi {first_name}, I noticed {company} works in {custom.industry}.",
                ),
                0,
            ),
            SequenceStep::new(
                MessageTemplate::new(
                    "A page we made for {company}",
                    "We put together something for you: {landingpage}",
                ),
                3,
            ),
            SequenceStep::new(
                MessageTemplate::new(
                    "Closing the loop",
                    "Targets we usually reach: {custom.roles}. Still interested?",
                ),
                7,
            ),
        ],
    )
}

/// A sequence that never mentions a landing token.
pub fn plain_sequence() -> Sequence {
    Sequence::new(
        "plain-checkin",
        vec![SequenceStep::new(
            MessageTemplate::new("Hello {first_name}", "Just checking in with {company}."),
            0,
        )],
    )
}
