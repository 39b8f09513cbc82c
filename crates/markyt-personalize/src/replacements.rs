//! The value bag substituted into message templates.

use std::collections::{BTreeMap, BTreeSet};

use markyt_core::{CustomValue, Lead};

/// Values available to the personalization engine for one render.
///
/// A replacement set is assembled per lead, per render: lead fields are
/// copied in via [`ReplacementSet::from_lead`], the landing URL is
/// seeded by the caller once it has been derived, and tenant-specific
/// landing aliases widen which token names resolve to the landing
/// value.
///
/// Values are substituted verbatim. A top-level value may legitimately
/// hold literal token text (an authoring sentinel such as
/// `"{company}"`); the engine inserts it unchanged and never errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacementSet {
    /// Lead given name.
    pub first_name: Option<String>,

    /// Lead family name.
    pub last_name: Option<String>,

    /// Lead company.
    pub company: Option<String>,

    /// Lead job title.
    pub position: Option<String>,

    /// Fully composed landing URL (or fallback text) for the lead.
    pub landing_page: Option<String>,

    /// Custom attribute values keyed by `custom.<key>` name.
    pub custom: BTreeMap<String, CustomValue>,

    /// Token names beyond `landingpage` that resolve to the landing
    /// value, e.g. a tenant's own `cpdlanding`.
    pub landing_aliases: BTreeSet<String>,
}

impl ReplacementSet {
    /// Creates an empty replacement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies name, company, position, and custom attributes from a lead.
    ///
    /// The landing value is deliberately not derived here; the caller
    /// seeds it with [`ReplacementSet::with_landing_url`] when a landing
    /// page is in play.
    ///
    /// # Examples
    ///
    /// ```
    /// use markyt_core::Lead;
    /// use markyt_personalize::ReplacementSet;
    ///
    /// let lead = Lead::new("7", "Jane", "Doe").with_company("Acme");
    /// let set = ReplacementSet::from_lead(&lead);
    /// assert_eq!(set.first_name.as_deref(), Some("Jane"));
    /// assert_eq!(set.company.as_deref(), Some("Acme"));
    /// ```
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            first_name: Some(lead.first_name.clone()),
            last_name: Some(lead.last_name.clone()),
            company: lead.company.clone(),
            position: lead.position.clone(),
            landing_page: None,
            custom: lead.custom.clone(),
            landing_aliases: BTreeSet::new(),
        }
    }

    /// Sets the first name.
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Sets the last name.
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Sets the company.
    pub fn with_company(mut self, value: impl Into<String>) -> Self {
        self.company = Some(value.into());
        self
    }

    /// Sets the job title.
    pub fn with_position(mut self, value: impl Into<String>) -> Self {
        self.position = Some(value.into());
        self
    }

    /// Seeds the landing value substituted for landing tokens.
    pub fn with_landing_url(mut self, url: impl Into<String>) -> Self {
        self.landing_page = Some(url.into());
        self
    }

    /// Adds a custom attribute value.
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Registers an extra token name that resolves to the landing value.
    pub fn with_landing_alias(mut self, name: impl Into<String>) -> Self {
        self.landing_aliases.insert(name.into());
        self
    }

    /// Returns `true` if `name` is a landing token for this set.
    pub fn is_landing_token(&self, name: &str) -> bool {
        name == "landingpage" || self.landing_aliases.contains(name)
    }
}
