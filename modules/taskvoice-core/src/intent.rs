use serde::{Deserialize, Serialize};

/// A structured task command parsed from free-form text.
///
/// This is the wire contract with the frontend: every field the model may
/// leave null stays in the serialized output as an explicit `null`, so the
/// response shape is stable across operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub operation: Operation,
    pub target: Option<Target>,
    #[serde(default)]
    pub data: IntentData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Filter,
    Noop,
}

/// Selection criterion for update/delete: which existing task(s) the
/// operation applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub mode: Option<TargetMode>,
    /// 1-based task index, set iff `mode` is `by_index`.
    pub index: Option<u32>,
    /// Short phrase matched against task titles, set iff `mode` is `by_match`.
    pub match_query: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    ByIndex,
    ByMatch,
    All,
}

/// Task fields to set or create. All members optional on the wire; the
/// parser guarantees `priority` is filled before an Intent leaves the
/// service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentData {
    pub title: Option<String>,
    /// ISO-8601 UTC timestamp, e.g. "2025-11-18T09:00:00Z".
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Done,
}
