
use serde::Serialize;
use std::collections::BTreeMap;

/// A single field value inside a resource record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Nested(ResourceSet),
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        ResourceValue::Text(value.to_owned())
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        ResourceValue::Text(value)
    }
}

impl From<i64> for ResourceValue {
    fn from(value: i64) -> Self {
        ResourceValue::Integer(value)
    }
}

impl From<bool> for ResourceValue {
    fn from(value: bool) -> Self {
        ResourceValue::Bool(value)
    }
}

/// One normalized resource: field name to value.
pub type ResourceRecord = BTreeMap<String, ResourceValue>;

/// The normalized output of one provider invocation.
///
/// Most services produce a flat sequence of records; a few decompose into
/// named sub-collections (config recorders/rules, route53 zones/health
/// checks). Serializes untagged so the flat shape is a JSON array and the
/// composite shape a JSON object, matching what report sinks consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceSet {
    Flat(Vec<ResourceRecord>),
    Composite(BTreeMap<String, Vec<ResourceRecord>>),
}

impl ResourceSet {
    pub fn empty() -> Self {
        ResourceSet::Flat(Vec::new())
    }

    /// An explicit composite shape with the given collection names and no
    /// records, so "audited, nothing found" survives into the report.
    pub fn empty_composite<I, S>(collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResourceSet::Composite(
            collections
                .into_iter()
                .map(|name| (name.into(), Vec::new()))
                .collect(),
        )
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        match self {
            ResourceSet::Flat(records) => records.len(),
            ResourceSet::Composite(collections) => collections.values().map(Vec::len).sum(),
        }
    }

    /// Record counts per named sub-collection, or `None` for the flat shape.
    pub fn collection_counts(&self) -> Option<Vec<(&str, usize)>> {
        match self {
            ResourceSet::Flat(_) => None,
            ResourceSet::Composite(collections) => Some(
                collections
                    .iter()
                    .map(|(name, records)| (name.as_str(), records.len()))
                    .collect(),
            ),
        }
    }
}

/// The terminal state of one provider invocation: either a resource set or an
/// error marker attributed to that service. An error is data, not a crash of
/// the run; it serializes as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceOutcome {
    Resources(ResourceSet),
    Error { error: String },
}

impl ServiceOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        ServiceOutcome::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ServiceOutcome::Error { .. })
    }

    pub fn record_count(&self) -> Option<usize> {
        match self {
            ServiceOutcome::Resources(set) => Some(set.record_count()),
            ServiceOutcome::Error { .. } => None,
        }
    }
}

impl From<ResourceSet> for ServiceOutcome {
    fn from(set: ResourceSet) -> Self {
        ServiceOutcome::Resources(set)
    }
}
