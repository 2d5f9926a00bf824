use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a rate refresh request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RefreshOutcome {
    /// The fetched table was applied.
    #[serde(rename_all = "camelCase")]
    Applied {
        /// Codes whose rate and timestamp were overwritten, pivot included.
        updated: Vec<String>,
        /// Known codes absent from the fetched table; their previous rate persists.
        stale: Vec<String>,
        refreshed_at: DateTime<Utc>,
    },
    /// Another refresh was still running, this trigger was dropped.
    AlreadyInFlight,
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
