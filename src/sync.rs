//! Task List Synchronization
//!
//! The non-trivial client-side flows: the load sequence with its bounded
//! create-user recovery, and delete-policy dispatch.

use crate::api::TaskApi;
use crate::config::{DeletePolicy, TaskServiceConfig};
use crate::error::ApiError;
use crate::models::Task;

/// Loads the user's task list.
///
/// If the user resource does not exist yet, creates it and retries the fetch
/// exactly once. A second failure (of any kind) is returned as-is; there is
/// no retry loop.
pub async fn load_tasks(api: &dyn TaskApi, user: &str) -> Result<Vec<Task>, ApiError> {
    match api.fetch_user(user).await {
        Ok(user_tasks) => Ok(user_tasks.todos),
        Err(ApiError::NotFound) => {
            api.create_user(user).await?;
            Ok(api.fetch_user(user).await?.todos)
        }
        Err(error) => Err(error),
    }
}

/// What the caller must do after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Server removed the task; re-fetch for the authoritative list.
    Refetch,
    /// Bulk replace succeeded; apply this filtered list locally, no re-fetch.
    Replaced(Vec<Task>),
}

/// Removes one task under the configured delete policy.
///
/// On failure the caller leaves state unchanged; there is no optimistic
/// removal under either policy.
pub async fn remove_task(
    api: &dyn TaskApi,
    config: &TaskServiceConfig,
    current: &[Task],
    id: u32,
) -> Result<DeleteOutcome, ApiError> {
    match config.delete_policy {
        DeletePolicy::ById => {
            api.delete_task(id).await?;
            Ok(DeleteOutcome::Refetch)
        }
        DeletePolicy::BulkReplace => {
            let remaining: Vec<Task> = current
                .iter()
                .filter(|task| task.id != Some(id))
                .cloned()
                .collect();
            api.replace_tasks(&config.user, &remaining).await?;
            Ok(DeleteOutcome::Replaced(remaining))
        }
    }
}
