use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::client::{
    CompleteRequest, EngineClient, FailureRequest, FetchAndLockRequest, LockedTask,
    TopicSubscription,
};
use crate::error::EngineError;
use crate::task::TaskExecution;

/// The engine persists at most this many characters of an external task
/// error message.
const MAX_ERROR_MESSAGE_LEN: usize = 666;

/// A unit of work bound to an external task topic. Handlers read and write
/// process variables through the [`TaskExecution`] they are given.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    async fn execute(&self, execution: &mut TaskExecution) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct WorkerOptions {
    pub max_tasks: u32,
    pub lock_duration_ms: u64,
    pub poll_interval: Duration,
    pub retries: i32,
    pub retry_timeout_ms: u64,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            max_tasks: 10,
            lock_duration_ms: 30_000,
            poll_interval: Duration::from_secs(5),
            retries: 3,
            retry_timeout_ms: 5_000,
        }
    }
}

/// Polls the engine for locked external tasks and dispatches them to the
/// handler registered for their topic.
pub struct ExternalTaskWorker {
    client: EngineClient,
    worker_id: String,
    options: WorkerOptions,
    handlers: HashMap<String, Arc<dyn TaskHandler>>,
}

impl ExternalTaskWorker {
    pub fn new(client: EngineClient, worker_id: impl Into<String>) -> Self {
        Self {
            client,
            worker_id: worker_id.into(),
            options: WorkerOptions::default(),
            handlers: HashMap::new(),
        }
    }

    pub fn with_options(mut self, options: WorkerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn register(mut self, topic: &str, handler: Arc<dyn TaskHandler>) -> Self {
        self.handlers.insert(topic.to_string(), handler);
        self
    }

    fn subscriptions(&self) -> Vec<TopicSubscription> {
        self.handlers
            .keys()
            .map(|topic| TopicSubscription {
                topic_name: topic.clone(),
                lock_duration: self.options.lock_duration_ms,
            })
            .collect()
    }

    /// Fetches one batch of tasks and runs them. Returns how many tasks the
    /// engine handed out.
    pub async fn poll_once(&self) -> Result<usize, EngineError> {
        let request = FetchAndLockRequest {
            worker_id: self.worker_id.clone(),
            max_tasks: self.options.max_tasks,
            async_response_timeout: None,
            topics: self.subscriptions(),
        };

        let tasks = self.client.fetch_and_lock(&request).await?;
        let count = tasks.len();

        for task in tasks {
            self.dispatch(task).await;
        }
        Ok(count)
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!(
            "External task worker {} polling {} topic(s)",
            self.worker_id,
            self.handlers.len()
        );

        loop {
            match self.poll_once().await {
                Ok(0) => tokio::time::sleep(self.options.poll_interval).await,
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Task polling failed: {}", e);
                    tokio::time::sleep(self.options.poll_interval).await;
                }
            }
        }
    }

    async fn dispatch(&self, task: LockedTask) {
        let Some(handler) = self.handlers.get(&task.topic_name) else {
            tracing::warn!("No handler registered for topic {}", task.topic_name);
            return;
        };

        let previous_retries = task.retries;
        let mut execution = TaskExecution::new(task);
        let task_id = execution.task_id().to_string();
        let topic = execution.topic().to_string();

        match handler.execute(&mut execution).await {
            Ok(()) => {
                let (_, variables) = execution.into_parts();
                let request = CompleteRequest {
                    worker_id: self.worker_id.clone(),
                    variables,
                };
                if let Err(e) = self.client.complete_task(&task_id, &request).await {
                    tracing::error!("Failed to complete task {}: {}", task_id, e);
                }
            }
            Err(e) => {
                tracing::error!("Handler for topic {} failed: {:#}", topic, e);
                let request = FailureRequest {
                    worker_id: self.worker_id.clone(),
                    error_message: failure_message(&e),
                    retries: previous_retries
                        .map_or(self.options.retries, |r| (r - 1).max(0)),
                    retry_timeout: self.options.retry_timeout_ms,
                };
                if let Err(e) = self.client.report_failure(&task_id, &request).await {
                    tracing::error!("Failed to report failure for task {}: {}", task_id, e);
                }
            }
        }
    }
}

/// First line of the error chain, cut to the length the engine will keep.
fn failure_message(error: &anyhow::Error) -> String {
    let rendered = format!("{:#}", error);
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line.chars().take(MAX_ERROR_MESSAGE_LEN).collect()
}
