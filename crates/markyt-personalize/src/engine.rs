//! The substitution engine.

use crate::replacements::ReplacementSet;
use crate::report::{RenderReport, suggest};
use crate::tokens::{SimpleField, TOKEN_RE, Token, TokenKind, classify};

/// Text substituted for `{company}` when the value is absent or empty.
pub const FALLBACK_COMPANY: &str = "(No Company)";

/// Text substituted for `{position}` when the value is absent or empty.
pub const FALLBACK_POSITION: &str = "(No Position)";

/// Text substituted for a landing token when the value is absent or
/// empty.
pub const FALLBACK_LANDING_PAGE: &str = "(No Landing Page)";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// `None` means the raw span is kept in the output.
fn resolve(kind: &TokenKind, replacements: &ReplacementSet) -> Option<String> {
    match kind {
        TokenKind::Simple(SimpleField::FirstName) => {
            Some(replacements.first_name.clone().unwrap_or_default())
        }
        TokenKind::Simple(SimpleField::LastName) => {
            Some(replacements.last_name.clone().unwrap_or_default())
        }
        TokenKind::Simple(SimpleField::Company) => Some(
            non_empty(&replacements.company)
                .unwrap_or(FALLBACK_COMPANY)
                .to_string(),
        ),
        TokenKind::Simple(SimpleField::Position) => Some(
            non_empty(&replacements.position)
                .unwrap_or(FALLBACK_POSITION)
                .to_string(),
        ),
        TokenKind::Simple(SimpleField::LandingPage) => Some(
            non_empty(&replacements.landing_page)
                .unwrap_or(FALLBACK_LANDING_PAGE)
                .to_string(),
        ),
        TokenKind::Custom(key) => replacements.custom.get(key).map(|value| value.render()),
        TokenKind::Unknown(_) => None,
    }
}

/// Personalizes a template in a single left-to-right pass.
///
/// Every occurrence of every token is replaced; token names are matched
/// whole between braces, so keys that are prefixes of one another
/// (`{company}` vs `{company_name}`) resolve independently.
///
/// Substitution rules:
///
/// - `{first_name}` / `{last_name}`: the raw value; absent substitutes
///   the empty string.
/// - `{company}` / `{position}` / landing tokens: absent **or empty**
///   substitutes the documented fallback text ([`FALLBACK_COMPANY`],
///   [`FALLBACK_POSITION`], [`FALLBACK_LANDING_PAGE`]), never the bare
///   token and never the empty string.
/// - `{custom.key}`: a present value renders verbatim (lists joined
///   with `", "`); an absent key leaves the token unchanged so it stays
///   visibly detectable and could be resolved later.
/// - Unknown tokens are left intact.
///
/// Substituted values are not re-scanned: a value that itself contains
/// `{...}` is emitted literally, so re-running the engine over output
/// with no remaining tokens is a no-op.
///
/// This function never fails on any input; the failure mode is always
/// fallback text or the preserved token.
///
/// # Examples
///
/// ```
/// use markyt_personalize::{ReplacementSet, personalize};
///
/// let set = ReplacementSet::new().with_first_name("Sam");
/// assert_eq!(
///     personalize("Hi {first_name}, welcome to {company}", &set),
///     "Hi Sam, welcome to (No Company)"
/// );
/// ```
pub fn personalize(template: &str, replacements: &ReplacementSet) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let token = classify(caps, replacements);
            resolve(token.kind(), replacements).unwrap_or_else(|| token.raw().to_string())
        })
        .into_owned()
}

/// Personalizes a template and reports how each token resolved.
///
/// Substitution is identical to [`personalize`]. The report additionally
/// lists resolved and unresolved token names and, for unknown tokens,
/// the nearest known token name when one is plausibly intended.
pub fn personalize_with_report(template: &str, replacements: &ReplacementSet) -> RenderReport {
    let mut resolved: Vec<String> = Vec::new();
    let mut unresolved: Vec<Token> = Vec::new();

    let output = TOKEN_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let token = classify(caps, replacements);
            match resolve(token.kind(), replacements) {
                Some(value) => {
                    let name = token.name().to_string();
                    if !resolved.contains(&name) {
                        resolved.push(name);
                    }
                    value
                }
                None => {
                    let raw = token.raw().to_string();
                    if !unresolved.iter().any(|seen| seen.raw() == raw) {
                        unresolved.push(token);
                    }
                    raw
                }
            }
        })
        .into_owned();

    if !unresolved.is_empty() {
        log::debug!(
            "template left {} token(s) unresolved: {}",
            unresolved.len(),
            unresolved
                .iter()
                .map(Token::raw)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let candidates = known_token_names(replacements);
    let mut suggestions = Vec::new();
    for token in &unresolved {
        if let TokenKind::Unknown(name) = token.kind()
            && let Some(candidate) = suggest(name, &candidates)
        {
            suggestions.push((name.clone(), candidate));
        }
    }

    RenderReport {
        output,
        resolved,
        unresolved: unresolved
            .iter()
            .map(|token| token.name().to_string())
            .collect(),
        suggestions,
    }
}

fn known_token_names(replacements: &ReplacementSet) -> Vec<String> {
    let mut names: Vec<String> = [
        SimpleField::FirstName,
        SimpleField::LastName,
        SimpleField::Company,
        SimpleField::Position,
        SimpleField::LandingPage,
    ]
    .iter()
    .map(|field| field.token_name().to_string())
    .collect();
    names.extend(replacements.landing_aliases.iter().cloned());
    names.extend(
        replacements
            .custom
            .keys()
            .map(|key| format!("custom.{key}")),
    );
    names
}
