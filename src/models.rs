//! Data Models
//!
//! Structures matching the Task Service wire format.

use serde::{Deserialize, Deserializer, Serialize};

/// A to-do item as the Task Service stores it.
///
/// `id` is assigned by the server; entries that have not been persisted yet
/// (e.g. rows sent in a bulk replace) carry no id and are omitted from the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub label: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Request body for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub label: String,
    pub is_done: bool,
}

impl NewTask {
    /// Builds a task from the draft buffer, trimming whitespace.
    ///
    /// Returns `None` for blank or whitespace-only input; callers must not
    /// send a request in that case.
    pub fn from_draft(draft: &str) -> Option<Self> {
        let label = draft.trim();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            is_done: false,
        })
    }
}

/// Response of `GET /users/{user}`.
///
/// Only the `todos` array is consumed. The field is decoded defensively: a
/// missing, `null` or non-array value becomes an empty list instead of a
/// decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserTasks {
    #[serde(default, deserialize_with = "todos_or_empty")]
    pub todos: Vec<Task>,
}

fn todos_or_empty<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_trims_whitespace() {
        let task = NewTask::from_draft("  Buy milk  ").expect("non-blank draft");
        assert_eq!(task.label, "Buy milk");
        assert!(!task.is_done);
    }

    #[test]
    fn from_draft_rejects_blank_input() {
        assert_eq!(NewTask::from_draft(""), None);
        assert_eq!(NewTask::from_draft("   \t  "), None);
    }

    #[test]
    fn user_tasks_decodes_todos_array() {
        let parsed: UserTasks =
            serde_json::from_str(r#"{"todos":[{"id":7,"label":"Buy milk","is_done":false}]}"#)
                .expect("valid body");
        assert_eq!(parsed.todos.len(), 1);
        assert_eq!(parsed.todos[0].id, Some(7));
        assert_eq!(parsed.todos[0].label, "Buy milk");
    }

    #[test]
    fn user_tasks_defaults_missing_todos() {
        let parsed: UserTasks = serde_json::from_str(r#"{"name":"demo"}"#).expect("valid body");
        assert!(parsed.todos.is_empty());
    }

    #[test]
    fn user_tasks_defaults_null_and_non_array_todos() {
        let null_field: UserTasks = serde_json::from_str(r#"{"todos":null}"#).expect("valid body");
        assert!(null_field.todos.is_empty());

        let wrong_type: UserTasks =
            serde_json::from_str(r#"{"todos":"oops"}"#).expect("valid body");
        assert!(wrong_type.todos.is_empty());
    }

    #[test]
    fn unpersisted_task_serializes_without_id() {
        let task = Task {
            id: None,
            label: "Buy milk".to_string(),
            is_done: false,
        };
        let json = serde_json::to_string(&task).expect("serializable");
        assert_eq!(json, r#"{"label":"Buy milk","is_done":false}"#);
    }
}
