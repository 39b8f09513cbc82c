//! Integration tests for TOML sequence files.

use std::io::Write;

use markyt_sequence::{Error, MAX_DELAY_DAYS, SequenceRenderer, load_sequence};

use crate::common::{TestHarness, sample_lead};

const SEQUENCE_TOML: &str = r#"
name = "file-outreach"

[[steps]]
subject = "Hi {first_name}"
body = "How is {company} handling {custom.industry}?"

[[steps]]
subject = "Made for {company}"
body = "Take a look: {landingpage}"
delay_days = 2
"#;

#[test]
fn test_load_sequence_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outreach.toml");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(SEQUENCE_TOML.as_bytes())
        .unwrap();

    let sequence = load_sequence(&path).unwrap();

    assert_eq!(sequence.name, "file-outreach");
    assert_eq!(sequence.steps.len(), 2);
    assert_eq!(sequence.steps[1].delay_days, 2);
}

#[test]
fn test_loaded_sequence_renders_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outreach.toml");
    std::fs::write(&path, SEQUENCE_TOML).unwrap();

    let sequence = load_sequence(&path).unwrap();
    let harness = TestHarness::new();
    let rendered =
        SequenceRenderer::new().render_for_lead(&sequence, &harness.client, &sample_lead());

    assert_eq!(
        rendered.steps[0].message.body,
        "How is Acme Corp! handling fintech?"
    );
    assert_eq!(
        rendered.steps[1].message.body,
        "Take a look: https://go.example.com/janeD.acmecorp?linkedin=true"
    );
}

#[test]
fn test_load_sequence_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = load_sequence(&path).unwrap_err();

    assert!(matches!(err, Error::IoAt { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_load_sequence_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "name = \"x\"\n[[steps]]\nsubject = 12\n").unwrap();

    let err = load_sequence(&path).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_load_sequence_enforces_delay_limit() {
    let dir = tempfile::tempdir().unwrap();

    let at_limit = dir.path().join("at-limit.toml");
    std::fs::write(
        &at_limit,
        format!(
            "name = \"slow\"\n\n[[steps]]\nsubject = \"s\"\nbody = \"b\"\ndelay_days = {MAX_DELAY_DAYS}\n"
        ),
    )
    .unwrap();
    assert!(load_sequence(&at_limit).is_ok());

    let beyond = dir.path().join("distant.toml");
    std::fs::write(
        &beyond,
        "name = \"distant\"\n\n[[steps]]\nsubject = \"s\"\nbody = \"b\"\ndelay_days = 4294967295\n",
    )
    .unwrap();

    let err = load_sequence(&beyond).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("delay_days"));
}
