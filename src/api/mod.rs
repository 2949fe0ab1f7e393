//! Task Service Access
//!
//! Defines the abstract interface to the remote Task Service.
//! Implementations: HTTP (browser fetch) and in-memory (tests, local dev).

mod http;
mod memory;

pub use http::HttpTaskApi;
pub use memory::{ApiCall, ApiOp, InMemoryTaskApi};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewTask, Task, UserTasks};

/// The six Task Service operations.
///
/// `?Send` because wasm futures are not `Send`; the app is single-threaded
/// either way.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetches the user resource with its `todos` array (`GET /users/{user}`).
    async fn fetch_user(&self, user: &str) -> Result<UserTasks, ApiError>;

    /// Creates the user resource (`POST /users/{user}`).
    async fn create_user(&self, user: &str) -> Result<(), ApiError>;

    /// Persists one new task (`POST /todos/{user}`).
    async fn create_task(&self, user: &str, task: &NewTask) -> Result<(), ApiError>;

    /// Removes one task by server-assigned id (`DELETE /todos/{id}`).
    async fn delete_task(&self, id: u32) -> Result<(), ApiError>;

    /// Replaces the whole task list (`PUT /todos/{user}`).
    async fn replace_tasks(&self, user: &str, tasks: &[Task]) -> Result<(), ApiError>;

    /// Drops the user's entire task collection (`DELETE /todos/{user}`).
    async fn clear_tasks(&self, user: &str) -> Result<(), ApiError>;
}
