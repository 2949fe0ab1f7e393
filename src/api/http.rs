//! HTTP Task Service Client
//!
//! gloo-net implementation against the playground REST endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use crate::config::TaskServiceConfig;
use crate::error::ApiError;
use crate::models::{NewTask, Task, UserTasks};

use super::TaskApi;

pub struct HttpTaskApi {
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &TaskServiceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn status_err(response: &Response) -> ApiError {
    match response.status() {
        404 => ApiError::NotFound,
        status => ApiError::Status(status),
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn fetch_user(&self, user: &str) -> Result<UserTasks, ApiError> {
        let response = Request::get(&self.url(&format!("users/{user}")))
            .send()
            .await
            .map_err(net_err)?;
        if !response.ok() {
            return Err(status_err(&response));
        }
        response
            .json::<UserTasks>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_user(&self, user: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!("users/{user}")))
            .send()
            .await
            .map_err(net_err)?;
        if !response.ok() {
            return Err(status_err(&response));
        }
        Ok(())
    }

    async fn create_task(&self, user: &str, task: &NewTask) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!("todos/{user}")))
            .json(task)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(net_err)?;
        if !response.ok() {
            return Err(status_err(&response));
        }
        Ok(())
    }

    async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("todos/{id}")))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(net_err)?;
        if !response.ok() {
            return Err(status_err(&response));
        }
        Ok(())
    }

    async fn replace_tasks(&self, user: &str, tasks: &[Task]) -> Result<(), ApiError> {
        let response = Request::put(&self.url(&format!("todos/{user}")))
            .json(&tasks)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(net_err)?;
        if !response.ok() {
            return Err(status_err(&response));
        }
        Ok(())
    }

    async fn clear_tasks(&self, user: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("todos/{user}")))
            .send()
            .await
            .map_err(net_err)?;
        if !response.ok() {
            return Err(status_err(&response));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpTaskApi::new(&TaskServiceConfig {
            base_url: "https://playground.4geeks.com/todo/".to_string(),
            ..TaskServiceConfig::default()
        });
        assert_eq!(
            api.url("users/demo"),
            "https://playground.4geeks.com/todo/users/demo"
        );
    }
}
