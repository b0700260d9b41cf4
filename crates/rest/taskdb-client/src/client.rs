//! reqwest-backed implementation of [`TaskApi`]

use crate::TaskApi;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use taskdb_types::{NewTask, TaskData, routes};
use tracing::{debug, warn};
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// HTTP client for the task server.
///
/// Routes are resolved against `base_url` the same way a browser resolves
/// them against the page location, so `base_url` is normally the URL of the
/// page hosting the app.
#[derive(Debug, Clone)]
pub struct TaskClient {
    client: reqwest::Client,
    base_url: Url,
}

impl TaskClient {
    pub fn builder(base_url: impl Into<String>) -> TaskClientBuilder {
        TaskClientBuilder::new(base_url)
    }

    /// Resolve a route against the base URL
    pub fn endpoint(&self, route: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(route)?)
    }

    fn request(&self, method: Method, route: &str) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(route)?;
        debug!("{} {}", method, url);

        Ok(self
            .client
            .request(method, url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        route: &str,
        body: &B,
    ) -> ClientResult<()> {
        let request = self.request(method, route)?.json(body);
        // Mutation responses carry nothing the client uses.
        Self::check_status(request.send().await?, route)?;
        Ok(())
    }

    fn check_status(response: Response, route: &str) -> ClientResult<Response> {
        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with status {}", route, status);
            return Err(ClientError::status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl TaskApi for TaskClient {
    async fn list_tasks(&self) -> ClientResult<Vec<TaskData>> {
        let response = self.request(Method::GET, routes::LIST)?.send().await?;
        let tasks: Vec<TaskData> = Self::check_status(response, routes::LIST)?.json().await?;

        debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn add_task(&self, task: &NewTask) -> ClientResult<()> {
        self.send_json(Method::POST, routes::ADD, task).await
    }

    async fn update_completed(&self, task: &TaskData) -> ClientResult<()> {
        self.send_json(Method::PATCH, routes::COMPLETED, task).await
    }

    async fn delete_task(&self, task: &TaskData) -> ClientResult<()> {
        self.send_json(Method::DELETE, routes::DELETE, task).await
    }
}

/// Builder for [`TaskClient`]
pub struct TaskClientBuilder {
    base_url: String,
    client: Option<reqwest::Client>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<std::time::Duration>,
}

impl TaskClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: None,
            #[cfg(not(target_arch = "wasm32"))]
            timeout: None,
        }
    }

    /// Reuse an existing reqwest client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Request timeout. Browsers apply their own transport defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ClientResult<TaskClient> {
        let base_url = Url::parse(&self.base_url)?;

        let client = match self.client {
            Some(client) => client,
            None => {
                #[allow(unused_mut)]
                let mut builder = reqwest::Client::builder();

                #[cfg(not(target_arch = "wasm32"))]
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                builder
                    .build()
                    .map_err(|e| ClientError::Build(e.to_string()))?
            }
        };

        Ok(TaskClient { client, base_url })
    }
}
