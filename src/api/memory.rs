//! In-Memory Task Service
//!
//! A complete in-process stand-in for the remote service, used by the test
//! suite and for local development. Records every call so ordering properties
//! (mutate-then-fetch, retry-once) can be asserted literally, and supports
//! per-operation failure injection.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewTask, Task, UserTasks};

use super::TaskApi;

/// One recorded Task Service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchUser(String),
    CreateUser(String),
    CreateTask { user: String, label: String },
    DeleteTask(u32),
    ReplaceTasks { user: String, len: usize },
    ClearTasks(String),
}

/// Operation selector for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOp {
    FetchUser,
    CreateUser,
    CreateTask,
    DeleteTask,
    ReplaceTasks,
    ClearTasks,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, Vec<Task>>,
    next_id: u32,
    calls: Vec<ApiCall>,
    failures: HashMap<ApiOp, VecDeque<ApiError>>,
}

pub struct InMemoryTaskApi {
    inner: RefCell<Inner>,
}

impl Default for InMemoryTaskApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Inner {
                next_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// Seeds a user with an existing task list; ids are assigned to entries
    /// that lack one.
    pub fn with_user(user: &str, tasks: Vec<Task>) -> Self {
        let api = Self::new();
        {
            let mut inner = api.inner.borrow_mut();
            let tasks: Vec<Task> = tasks
                .into_iter()
                .map(|mut task| {
                    let id = match task.id {
                        Some(id) => id,
                        None => {
                            let id = inner.next_id;
                            task.id = Some(id);
                            id
                        }
                    };
                    inner.next_id = inner.next_id.max(id + 1);
                    task
                })
                .collect();
            inner.users.insert(user.to_string(), tasks);
        }
        api
    }

    /// Queues an error for the next invocation of `op`. Multiple calls queue
    /// in order, one error consumed per invocation.
    pub fn fail_on(&self, op: ApiOp, error: ApiError) {
        self.inner
            .borrow_mut()
            .failures
            .entry(op)
            .or_default()
            .push_back(error);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.borrow().calls.clone()
    }

    /// Current task list for a user, if the user exists.
    pub fn tasks_of(&self, user: &str) -> Option<Vec<Task>> {
        self.inner.borrow().users.get(user).cloned()
    }

    fn record(&self, call: ApiCall, op: ApiOp) -> Result<(), ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        if let Some(error) = inner.failures.get_mut(&op).and_then(VecDeque::pop_front) {
            return Err(error);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TaskApi for InMemoryTaskApi {
    async fn fetch_user(&self, user: &str) -> Result<UserTasks, ApiError> {
        self.record(ApiCall::FetchUser(user.to_string()), ApiOp::FetchUser)?;
        let inner = self.inner.borrow();
        match inner.users.get(user) {
            Some(tasks) => Ok(UserTasks {
                todos: tasks.clone(),
            }),
            None => Err(ApiError::NotFound),
        }
    }

    async fn create_user(&self, user: &str) -> Result<(), ApiError> {
        self.record(ApiCall::CreateUser(user.to_string()), ApiOp::CreateUser)?;
        self.inner
            .borrow_mut()
            .users
            .entry(user.to_string())
            .or_default();
        Ok(())
    }

    async fn create_task(&self, user: &str, task: &NewTask) -> Result<(), ApiError> {
        self.record(
            ApiCall::CreateTask {
                user: user.to_string(),
                label: task.label.clone(),
            },
            ApiOp::CreateTask,
        )?;
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        let tasks = inner
            .users
            .get_mut(user)
            .ok_or(ApiError::NotFound)?;
        tasks.push(Task {
            id: Some(id),
            label: task.label.clone(),
            is_done: task.is_done,
        });
        inner.next_id += 1;
        Ok(())
    }

    async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteTask(id), ApiOp::DeleteTask)?;
        let mut inner = self.inner.borrow_mut();
        for tasks in inner.users.values_mut() {
            if let Some(index) = tasks.iter().position(|t| t.id == Some(id)) {
                tasks.remove(index);
                return Ok(());
            }
        }
        Err(ApiError::NotFound)
    }

    async fn replace_tasks(&self, user: &str, tasks: &[Task]) -> Result<(), ApiError> {
        self.record(
            ApiCall::ReplaceTasks {
                user: user.to_string(),
                len: tasks.len(),
            },
            ApiOp::ReplaceTasks,
        )?;
        let mut inner = self.inner.borrow_mut();
        if !inner.users.contains_key(user) {
            return Err(ApiError::NotFound);
        }
        let replaced: Vec<Task> = tasks
            .iter()
            .cloned()
            .map(|mut task| {
                if task.id.is_none() {
                    task.id = Some(inner.next_id);
                    inner.next_id += 1;
                }
                task
            })
            .collect();
        inner.users.insert(user.to_string(), replaced);
        Ok(())
    }

    async fn clear_tasks(&self, user: &str) -> Result<(), ApiError> {
        self.record(ApiCall::ClearTasks(user.to_string()), ApiOp::ClearTasks)?;
        let mut inner = self.inner.borrow_mut();
        match inner.users.get_mut(user) {
            Some(tasks) => {
                tasks.clear();
                Ok(())
            }
            None => Err(ApiError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(label: &str) -> Task {
        Task {
            id: None,
            label: label.to_string(),
            is_done: false,
        }
    }

    #[tokio::test]
    async fn create_task_assigns_monotonic_ids() {
        let api = InMemoryTaskApi::with_user("demo", vec![]);
        api.create_task("demo", &NewTask::from_draft("one").unwrap())
            .await
            .unwrap();
        api.create_task("demo", &NewTask::from_draft("two").unwrap())
            .await
            .unwrap();

        let tasks = api.tasks_of("demo").unwrap();
        assert_eq!(tasks[0].id, Some(1));
        assert_eq!(tasks[1].id, Some(2));
    }

    #[tokio::test]
    async fn seeded_ids_are_not_reused() {
        let api = InMemoryTaskApi::with_user(
            "demo",
            vec![Task {
                id: Some(42),
                ..task("answer")
            }],
        );
        api.create_task("demo", &NewTask::from_draft("next").unwrap())
            .await
            .unwrap();

        let tasks = api.tasks_of("demo").unwrap();
        assert_eq!(tasks[1].id, Some(43));
    }

    #[tokio::test]
    async fn fail_on_consumes_one_error_per_call() {
        let api = InMemoryTaskApi::with_user("demo", vec![]);
        api.fail_on(ApiOp::FetchUser, ApiError::Status(500));

        assert_eq!(api.fetch_user("demo").await, Err(ApiError::Status(500)));
        assert!(api.fetch_user("demo").await.is_ok());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let api = InMemoryTaskApi::with_user("demo", vec![task("only")]);
        assert_eq!(api.delete_task(99).await, Err(ApiError::NotFound));
        assert_eq!(api.tasks_of("demo").unwrap().len(), 1);
    }
}
