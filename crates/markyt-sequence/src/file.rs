//! TOML sequence-file loading.
//!
//! Sequences are authored as TOML:
//!
//! ```toml
//! name = "abm-outreach"
//!
//! [[steps]]
//! subject = "Quick question, {first_name}"
//! body = "Hi {first_name}, how is {company} doing?"
//! delay_days = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use markyt_core::{Error, MessageTemplate, Result, Sequence, SequenceStep};

/// Largest step delay accepted from a sequence file, in days.
///
/// Ten years is already far beyond any real outreach cadence; larger
/// values are author mistakes and are rejected at load time.
pub const MAX_DELAY_DAYS: u32 = 3650;

/// On-disk shape of an authored sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceFile {
    /// Sequence name.
    pub name: String,

    /// Steps in send order.
    #[serde(default)]
    pub steps: Vec<SequenceStepFile>,
}

/// On-disk shape of one sequence step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceStepFile {
    /// Subject line template.
    pub subject: String,

    /// Body template.
    pub body: String,

    /// Days after sequence start this step is sent.
    #[serde(default)]
    pub delay_days: u32,
}

impl SequenceFile {
    /// Converts the file shape into a sequence with a fresh ID.
    pub fn into_sequence(self) -> Sequence {
        Sequence::new(
            self.name,
            self.steps
                .into_iter()
                .map(|step| {
                    SequenceStep::new(
                        MessageTemplate::new(step.subject, step.body),
                        step.delay_days,
                    )
                })
                .collect(),
        )
    }
}

/// Loads a sequence from a TOML file.
///
/// # Errors
///
/// Returns [`Error::IoAt`] when the file cannot be read and
/// [`Error::Parse`] when it is not a valid sequence file or a step
/// delay exceeds [`MAX_DELAY_DAYS`].
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Sequence> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let file: SequenceFile = toml::from_str(&raw).map_err(|e| {
        Error::parse(format!("invalid sequence file {}: {e}", path.display()))
    })?;
    if let Some((index, step)) = file
        .steps
        .iter()
        .enumerate()
        .find(|(_, step)| step.delay_days > MAX_DELAY_DAYS)
    {
        return Err(Error::parse(format!(
            "invalid sequence file {}: step {} delay_days {} exceeds the {MAX_DELAY_DAYS}-day limit",
            path.display(),
            index + 1,
            step.delay_days
        )));
    }
    Ok(file.into_sequence())
}
