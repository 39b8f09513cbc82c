//! Token scanning and classification.
//!
//! Templates address values with `{name}` spans. Names are one or more
//! characters of `[A-Za-z0-9_]`, optionally prefixed with `custom.` to
//! address a lead's custom attribute bag. Anything else is literal
//! text: an inner `{` re-anchors the scan (`{{company}` still finds
//! `{company}`) and unterminated braces are never tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::replacements::ReplacementSet;

#[allow(clippy::expect_used)]
pub(crate) static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(custom\.)?([A-Za-z0-9_]+)\}").expect("Invalid token regex"));

/// Built-in fields addressable by a simple token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleField {
    /// `{first_name}`
    FirstName,

    /// `{last_name}`
    LastName,

    /// `{company}`
    Company,

    /// `{position}`
    Position,

    /// `{landingpage}`, or a configured tenant alias
    LandingPage,
}

impl SimpleField {
    /// Returns the canonical token name for this field.
    pub const fn token_name(&self) -> &'static str {
        match self {
            SimpleField::FirstName => "first_name",
            SimpleField::LastName => "last_name",
            SimpleField::Company => "company",
            SimpleField::Position => "position",
            SimpleField::LandingPage => "landingpage",
        }
    }
}

/// Classification of a scanned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A built-in field token.
    Simple(SimpleField),

    /// A `custom.<key>` attribute token, carrying the key.
    Custom(String),

    /// A token the engine does not recognize; left intact on render.
    Unknown(String),
}

/// A placeholder span found in a template.
///
/// The raw span is preserved verbatim: an alias token classifies as
/// [`SimpleField::LandingPage`] but keeps its own spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    raw: String,
    kind: TokenKind,
}

impl Token {
    /// Returns the span exactly as written, braces included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the text between the braces.
    pub fn name(&self) -> &str {
        &self.raw[1..self.raw.len() - 1]
    }

    /// Returns the classification of this token.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }
}

pub(crate) fn classify(caps: &regex::Captures<'_>, replacements: &ReplacementSet) -> Token {
    let raw = caps[0].to_string();
    let kind = if caps.get(1).is_some() {
        TokenKind::Custom(caps[2].to_string())
    } else {
        let name = &caps[2];
        match name {
            "first_name" => TokenKind::Simple(SimpleField::FirstName),
            "last_name" => TokenKind::Simple(SimpleField::LastName),
            "company" => TokenKind::Simple(SimpleField::Company),
            "position" => TokenKind::Simple(SimpleField::Position),
            _ if replacements.is_landing_token(name) => {
                TokenKind::Simple(SimpleField::LandingPage)
            }
            _ => TokenKind::Unknown(name.to_string()),
        }
    };

    Token { raw, kind }
}

/// Scans a template for placeholder tokens, in document order.
///
/// Every occurrence is reported, duplicates included. Classification is
/// against the given replacement set because landing aliases are
/// tenant-specific.
///
/// # Examples
///
/// ```
/// use markyt_personalize::{ReplacementSet, scan_tokens};
///
/// let set = ReplacementSet::new();
/// let tokens = scan_tokens("Hi {first_name} of {company}", &set);
/// let names: Vec<&str> = tokens.iter().map(|t| t.name()).collect();
/// assert_eq!(names, ["first_name", "company"]);
/// ```
pub fn scan_tokens(template: &str, replacements: &ReplacementSet) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(template)
        .map(|caps| classify(&caps, replacements))
        .collect()
}

/// Returns `true` if the template contains a landing token, canonical
/// or aliased.
pub fn mentions_landing_token(template: &str, replacements: &ReplacementSet) -> bool {
    scan_tokens(template, replacements)
        .iter()
        .any(|token| matches!(token.kind(), TokenKind::Simple(SimpleField::LandingPage)))
}
