use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A persistence operation the CMS has just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    Create,
    Update,
    Delete,
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Create => "create",
            LifecycleEvent::Update => "update",
            LifecycleEvent::Delete => "delete",
        }
    }

    /// Maps a CMS webhook event name onto a lifecycle event.
    ///
    /// Publishing and unpublishing change what the frontend renders, so both
    /// count as updates.
    pub fn from_webhook(name: &str) -> Result<Self, ModelError> {
        match name {
            "entry.create" => Ok(LifecycleEvent::Create),
            "entry.update" | "entry.publish" | "entry.unpublish" => Ok(LifecycleEvent::Update),
            "entry.delete" => Ok(LifecycleEvent::Delete),
            other => Err(ModelError::UnknownEvent(other.to_string())),
        }
    }
}

impl FromStr for LifecycleEvent {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(LifecycleEvent::Create),
            "update" => Ok(LifecycleEvent::Update),
            "delete" => Ok(LifecycleEvent::Delete),
            other => Self::from_webhook(other),
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
