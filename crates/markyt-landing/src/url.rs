//! Landing URL composition.

use markyt_core::{Client, Lead};

use crate::slug::derive_slug;

/// Fallback text used when no landing URL can be built.
///
/// Substituted into message text so a missing subdomain degrades into
/// something a human reader recognizes, never a broken URL.
pub const NO_LANDING_PAGE: &str = "(No Landing Page)";

/// Query string appended to landing URLs to tag the traffic source.
const SOURCE_TAG: &str = "linkedin=true";

/// Builds the tracked landing URL for a lead.
///
/// Returns `https://{subdomain}/{slug}?linkedin=true` when the client
/// has a live subdomain, and [`NO_LANDING_PAGE`] otherwise. Callers
/// always receive a usable string.
///
/// # Examples
///
/// ```
/// use markyt_core::{Client, Lead};
/// use markyt_landing::landing_url;
///
/// let client = Client::new("c1", "Acme").with_subdomain("go.example.com");
/// let lead = Lead::new("7", "Jane", "Doe").with_company("Acme Corp!");
///
/// assert_eq!(
///     landing_url(&client, &lead),
///     "https://go.example.com/janeD.acmecorp?linkedin=true"
/// );
/// ```
pub fn landing_url(client: &Client, lead: &Lead) -> String {
    match client.live_subdomain() {
        Some(subdomain) => {
            format!("https://{subdomain}/{}?{SOURCE_TAG}", derive_slug(lead))
        }
        None => {
            log::debug!(
                "client '{}' has no live subdomain; substituting landing fallback",
                client.id
            );
            NO_LANDING_PAGE.to_string()
        }
    }
}

/// Builds the landing URL without the traffic-source tag.
pub fn landing_url_untagged(client: &Client, lead: &Lead) -> String {
    match client.live_subdomain() {
        Some(subdomain) => format!("https://{subdomain}/{}", derive_slug(lead)),
        None => NO_LANDING_PAGE.to_string(),
    }
}
