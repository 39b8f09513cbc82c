//! Deterministic landing-page slug derivation.
//!
//! Provides the naming scheme for personalized landing pages. Slugs are
//! pure functions of the lead record: no randomness, no I/O, no clock.

use std::fmt;

use markyt_core::{Lead, LeadId};

/// A lead's landing-page slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingSlug {
    /// Derived from the lead's name and company, e.g. `janeD.acmecorp`.
    Named(String),

    /// ID-keyed fallback path used when the name scheme cannot be built.
    LeadKey(LeadId),
}

impl LandingSlug {
    /// Returns `true` for name-derived slugs.
    pub fn is_named(&self) -> bool {
        matches!(self, LandingSlug::Named(_))
    }

    /// Returns the slug as a URL path (no leading slash).
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LandingSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandingSlug::Named(slug) => write!(f, "{slug}"),
            LandingSlug::LeadKey(id) => write!(f, "landing-page/{id}"),
        }
    }
}

/// Normalizes a company name for use inside a slug.
///
/// Lowercases the input, then strips every character outside `[a-z0-9]`.
/// Spaces, punctuation, and non-ASCII symbols are all removed, so the
/// result may be empty.
///
/// # Examples
///
/// ```
/// use markyt_landing::normalize_company;
///
/// assert_eq!(normalize_company("Acme Corp!"), "acmecorp");
/// assert_eq!(normalize_company("Ship-It 24/7"), "shipit247");
/// assert_eq!(normalize_company("!!!"), "");
/// ```
pub fn normalize_company(company: &str) -> String {
    company
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Derives the landing slug for a lead.
///
/// The named form is the lowercased first name, the uppercased initial
/// of the last name (rest discarded), then `.` plus the normalized
/// company when the company normalizes to something non-empty. A company
/// of pure punctuation gets no suffix and no trailing separator.
///
/// When either name part is blank after trimming, the slug falls back to
/// an ID-keyed path; the name scheme cannot be built, but every lead
/// still gets a stable page.
///
/// Collisions between distinct leads (same name, same company) are
/// accepted; disambiguation is the caller's concern.
///
/// # Examples
///
/// ```
/// use markyt_core::Lead;
/// use markyt_landing::derive_slug;
///
/// let lead = Lead::new("7", "Jane", "Doe").with_company("Acme Corp!");
/// assert_eq!(derive_slug(&lead).to_string(), "janeD.acmecorp");
/// ```
pub fn derive_slug(lead: &Lead) -> LandingSlug {
    if !lead.has_full_name() {
        return LandingSlug::LeadKey(lead.id.clone());
    }

    let first = lead.first_name.trim().to_lowercase();
    let initial: String = lead
        .last_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    let mut slug = format!("{first}{initial}");
    if let Some(company) = lead.company.as_deref() {
        let normalized = normalize_company(company);
        if !normalized.is_empty() {
            slug.push('.');
            slug.push_str(&normalized);
        }
    }

    LandingSlug::Named(slug)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // normalize_company tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_company_strips_punctuation() {
        assert_eq!(normalize_company("Acme Corp!"), "acmecorp");
    }

    #[test]
    fn test_normalize_company_keeps_digits() {
        assert_eq!(normalize_company("24/7 Logistics"), "247logistics");
    }

    #[test]
    fn test_normalize_company_strips_unicode() {
        // Accented and non-ASCII letters are removed, not transliterated.
        assert_eq!(normalize_company("Süß GmbH"), "sgmbh");
    }

    #[test]
    fn test_normalize_company_punctuation_only_is_empty() {
        assert_eq!(normalize_company("!!! ---"), "");
    }

    #[test]
    fn test_normalize_company_empty() {
        assert_eq!(normalize_company(""), "");
    }

    // -------------------------------------------------------------------------
    // derive_slug tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_derive_slug_full_form() {
        let lead = Lead::new("1", "Jane", "Doe").with_company("Acme Corp!");
        assert_eq!(derive_slug(&lead).to_string(), "janeD.acmecorp");
    }

    #[test]
    fn test_derive_slug_empty_company_has_no_trailing_separator() {
        let lead = Lead::new("1", "Jane", "Doe").with_company("");
        assert_eq!(derive_slug(&lead).to_string(), "janeD");
    }

    #[test]
    fn test_derive_slug_missing_company() {
        let lead = Lead::new("1", "Jane", "Doe");
        assert_eq!(derive_slug(&lead).to_string(), "janeD");
    }

    #[test]
    fn test_derive_slug_punctuation_company_hits_no_suffix_branch() {
        let lead = Lead::new("1", "Jane", "Doe").with_company("!!!");
        assert_eq!(derive_slug(&lead).to_string(), "janeD");
    }

    #[test]
    fn test_derive_slug_lowercases_first_and_uppercases_initial() {
        let lead = Lead::new("1", "JANE", "doe").with_company("Acme");
        assert_eq!(derive_slug(&lead).to_string(), "janeD.acme");
    }

    #[test]
    fn test_derive_slug_discards_rest_of_last_name() {
        let lead = Lead::new("1", "Jane", "Doering-Smith").with_company("Acme");
        assert_eq!(derive_slug(&lead).to_string(), "janeD.acme");
    }

    #[test]
    fn test_derive_slug_missing_names_falls_back_to_lead_key() {
        let lead = Lead::new(42i64, "", "").with_company("Acme");
        let slug = derive_slug(&lead);

        assert!(!slug.is_named());
        assert_eq!(slug.to_string(), "landing-page/42");
    }

    #[test]
    fn test_derive_slug_whitespace_name_falls_back() {
        let lead = Lead::new("9", "  ", "Doe");
        assert_eq!(derive_slug(&lead).to_string(), "landing-page/9");
    }

    #[test]
    fn test_derive_slug_multi_codepoint_initial() {
        // `ß` uppercases to `SS`; every produced codepoint is kept.
        let lead = Lead::new("1", "Jane", "ßeta");
        assert_eq!(derive_slug(&lead).to_string(), "janeSS");
    }

    #[test]
    fn test_derive_slug_is_deterministic() {
        let lead = Lead::new("1", "Jane", "Doe").with_company("Acme Corp!");
        assert_eq!(derive_slug(&lead), derive_slug(&lead));
    }

    #[test]
    fn test_landing_slug_path_matches_display() {
        let named = LandingSlug::Named("janeD.acme".to_string());
        assert_eq!(named.path(), "janeD.acme");

        let keyed = LandingSlug::LeadKey(LeadId::new("42"));
        assert_eq!(keyed.path(), "landing-page/42");
    }
}
