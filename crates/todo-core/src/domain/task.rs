//! Task entity and its wire encoding.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Design:
/// - `created_at` is stamped once in the constructor and never touched again.
/// - `done` and `completed_at` move together: [`Task::mark_done`] is the only
///   transition, and there is no way back to pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing. Not validated; empty descriptions are accepted.
    #[serde(rename = "Task")]
    pub description: String,

    #[serde(rename = "Done")]
    pub done: bool,

    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    /// Unset until the task is completed. Stored on disk as the zero
    /// timestamp, see [`wire`].
    #[serde(rename = "CompletedAt", with = "wire")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark the task done, stamping the completion time.
    ///
    /// Completing an already-done task succeeds and refreshes the stamp; the
    /// legacy tool behaves the same way.
    pub fn mark_done(&mut self) {
        self.done = true;
        self.completed_at = Some(Utc::now());
    }
}

/// The zero timestamp, `0001-01-01T00:00:00Z`.
///
/// The storage format writes this value for a completion time that is not
/// set yet (never null, never omitted).
pub(crate) fn zero_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .expect("in-range timestamp")
}

/// Serde adapter for `CompletedAt`.
///
/// In memory an unset completion is `None`; on disk it is the zero
/// timestamp, so files written before a task completes round-trip
/// byte-for-byte.
mod wire {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.unwrap_or_else(super::zero_timestamp).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stamp = DateTime::<Utc>::deserialize(deserializer)?;
        Ok((stamp != super::zero_timestamp()).then_some(stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending() {
        let task = Task::new("read book");

        assert_eq!(task.description, "read book");
        assert!(!task.done);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn mark_done_stamps_completion() {
        let mut task = Task::new("read book");
        task.mark_done();

        assert!(task.done);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn wire_format_uses_fixed_field_names() {
        let task = Task::new("read book");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["Task"], "read book");
        assert_eq!(json["Done"], false);
        assert!(json["CreatedAt"].is_string());
        assert!(json["CompletedAt"].is_string());
    }

    #[test]
    fn unset_completion_serializes_as_zero_timestamp() {
        let task = Task::new("read book");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["CompletedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn zero_timestamp_parses_back_to_unset() {
        let json = r#"{
            "Task": "water plants",
            "Done": false,
            "CreatedAt": "2023-05-01T10:00:00Z",
            "CompletedAt": "0001-01-01T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert!(task.completed_at.is_none());

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["CompletedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn set_completion_round_trips_exactly() {
        let mut task = Task::new("read book");
        task.mark_done();

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back, task);
    }
}
