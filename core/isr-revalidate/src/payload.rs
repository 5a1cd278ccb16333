//! Request bodies for the frontend revalidation endpoint.

use serde::{Deserialize, Serialize};

/// Body of the path-list contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsPayload {
    pub paths: Vec<String>,
    pub entity_type: String,
    pub entity_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Body of the type/slug contract. The frontend derives paths itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPayload {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// What gets POSTed to `/api/revalidate`. Serializes as the inner body with no
/// tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RevalidationPayload {
    Paths(PathsPayload),
    Target(TargetPayload),
}

impl RevalidationPayload {
    /// Paths carried by the payload; empty for the type/slug contract.
    pub fn paths(&self) -> &[String] {
        match self {
            RevalidationPayload::Paths(p) => &p.paths,
            RevalidationPayload::Target(_) => &[],
        }
    }

    /// Short description used in log lines.
    pub fn summary(&self) -> String {
        match self {
            RevalidationPayload::Paths(p) => format!("{:?}", p.paths),
            RevalidationPayload::Target(t) => match (&t.slug, &t.locale) {
                (Some(slug), Some(locale)) => format!("{} {slug} ({locale})", t.kind),
                (Some(slug), None) => format!("{} {slug}", t.kind),
                (None, Some(locale)) => format!("{} ({locale})", t.kind),
                (None, None) => t.kind.clone(),
            },
        }
    }
}

impl From<PathsPayload> for RevalidationPayload {
    fn from(payload: PathsPayload) -> Self {
        RevalidationPayload::Paths(payload)
    }
}

impl From<TargetPayload> for RevalidationPayload {
    fn from(payload: TargetPayload) -> Self {
        RevalidationPayload::Target(payload)
    }
}
