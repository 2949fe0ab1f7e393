//! Configuration
//!
//! The fixed username and service base URL are injected configuration, not
//! global state. Defaults target the public playground instance.

/// How a single-task delete is persisted.
///
/// The two policies are not interchangeable: `ById` asks the server to remove
/// one resource and re-fetches, while `BulkReplace` uploads the client's
/// filtered array as the new source of truth and can silently diverge from
/// server state under concurrent edits. `ById` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    #[default]
    ById,
    BulkReplace,
}

/// Connection settings for the Task Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskServiceConfig {
    pub base_url: String,
    pub user: String,
    pub delete_policy: DeletePolicy,
}

impl Default for TaskServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://playground.4geeks.com/todo".to_string(),
            user: "demo".to_string(),
            delete_policy: DeletePolicy::ById,
        }
    }
}
