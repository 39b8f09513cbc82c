//! Lead records and their free-form custom attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::LeadId;

/// A custom attribute value attached to a lead.
///
/// Custom attributes arrive as free-form JSON from upstream exports and
/// are either a single scalar or a list of scalars. Absence is expressed
/// by the key being missing from the lead's custom map, never by a
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomValue {
    /// A single scalar value.
    Scalar(String),

    /// A list of values, rendered comma-separated.
    List(Vec<String>),
}

impl CustomValue {
    /// Renders the value for substitution into a message body.
    ///
    /// Lists join their elements with `", "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use markyt_core::CustomValue;
    ///
    /// let tags = CustomValue::List(vec!["fintech".into(), "saas".into()]);
    /// assert_eq!(tags.render(), "fintech, saas");
    /// ```
    pub fn render(&self) -> String {
        match self {
            CustomValue::Scalar(s) => s.clone(),
            CustomValue::List(items) => items.join(", "),
        }
    }

    /// Coerces a loose JSON value into a custom value.
    ///
    /// Upstream exports are not strict about shapes, so this conversion
    /// is deliberately lossy: numbers and booleans become their display
    /// form, objects collapse to compact JSON, and `null` maps to `None`
    /// (the attribute is treated as absent).
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::String(s) => Some(CustomValue::Scalar(s)),
            Value::Bool(b) => Some(CustomValue::Scalar(b.to_string())),
            Value::Number(n) => Some(CustomValue::Scalar(n.to_string())),
            Value::Array(items) => Some(CustomValue::List(
                items
                    .into_iter()
                    .filter_map(Self::from_json)
                    .map(|v| v.render())
                    .collect(),
            )),
            v @ Value::Object(_) => Some(CustomValue::Scalar(v.to_string())),
        }
    }
}

impl From<String> for CustomValue {
    fn from(s: String) -> Self {
        CustomValue::Scalar(s)
    }
}

impl From<&str> for CustomValue {
    fn from(s: &str) -> Self {
        CustomValue::Scalar(s.to_string())
    }
}

impl From<Vec<String>> for CustomValue {
    fn from(items: Vec<String>) -> Self {
        CustomValue::List(items)
    }
}

/// A lead record consumed from an external export.
///
/// Leads are read-only inputs: the workspace personalizes messages and
/// derives landing URLs from them but never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// External identifier (CRM exports emit numbers or strings).
    pub id: LeadId,

    /// Given name, verbatim from the export.
    #[serde(default)]
    pub first_name: String,

    /// Family name, verbatim from the export.
    #[serde(default)]
    pub last_name: String,

    /// Employer name, if known.
    #[serde(default)]
    pub company: Option<String>,

    /// Job title, if known.
    #[serde(default)]
    pub position: Option<String>,

    /// Free-form custom attributes keyed by token name.
    #[serde(default, deserialize_with = "deserialize_custom")]
    pub custom: BTreeMap<String, CustomValue>,
}

impl Lead {
    /// Creates a lead with the given identity and empty optional fields.
    pub fn new(
        id: impl Into<LeadId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: None,
            position: None,
            custom: BTreeMap::new(),
        }
    }

    /// Sets the company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the job title.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Adds a custom attribute.
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if both name parts are non-empty after trimming.
    pub fn has_full_name(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }
}

// Custom attributes pass through `CustomValue::from_json` so that loose
// shapes (numbers, nulls, nested objects) never fail deserialization.
fn deserialize_custom<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, CustomValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| CustomValue::from_json(value).map(|v| (key, v)))
        .collect())
}
