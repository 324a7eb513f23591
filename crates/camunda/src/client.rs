// REST client for the process engine's message correlation and
// external task API.
use contracts::VariableMap;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationRequest {
    pub message_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_variables: Option<VariableMap>,
    pub result_enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    pub result_type: String,
    #[serde(default)]
    pub process_instance: Option<ProcessInstance>,
    #[serde(default)]
    pub execution: Option<Execution>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    pub id: String,
    #[serde(default)]
    pub business_key: Option<String>,
    #[serde(default)]
    pub definition_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: String,
    #[serde(default)]
    pub process_instance_id: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FetchAndLockRequest {
    pub worker_id: String,
    pub max_tasks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_response_timeout: Option<u64>,
    pub topics: Vec<TopicSubscription>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TopicSubscription {
    pub topic_name: String,
    pub lock_duration: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LockedTask {
    pub id: String,
    #[serde(default)]
    pub topic_name: String,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub process_instance_id: Option<String>,
    #[serde(default)]
    pub business_key: Option<String>,
    #[serde(default)]
    pub variables: VariableMap,
    #[serde(default)]
    pub retries: Option<i32>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub worker_id: String,
    pub variables: VariableMap,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FailureRequest {
    pub worker_id: String,
    pub error_message: String,
    pub retries: i32,
    pub retry_timeout: u64,
}

#[derive(Clone)]
pub struct EngineClient {
    base_url: String,
    client: reqwest::Client,
}

impl EngineClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Correlates a message against waiting process instances. Returns one
    /// correlation result per matched instance.
    pub async fn correlate_message(
        &self,
        request: &CorrelationRequest,
    ) -> Result<Vec<CorrelationResult>, EngineError> {
        let url = format!("{}/message", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let results = response.json::<Vec<CorrelationResult>>().await?;
        Ok(results)
    }

    pub async fn fetch_and_lock(
        &self,
        request: &FetchAndLockRequest,
    ) -> Result<Vec<LockedTask>, EngineError> {
        let url = format!("{}/external-task/fetchAndLock", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let tasks = response.json::<Vec<LockedTask>>().await?;
        Ok(tasks)
    }

    pub async fn complete_task(
        &self,
        task_id: &str,
        request: &CompleteRequest,
    ) -> Result<(), EngineError> {
        let url = format!("{}/external-task/{}/complete", self.base_url, task_id);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    pub async fn report_failure(
        &self,
        task_id: &str,
        request: &FailureRequest,
    ) -> Result<(), EngineError> {
        let url = format!("{}/external-task/{}/failure", self.base_url, task_id);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    async fn api_error(response: reqwest::Response) -> EngineError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        EngineError::Api { status, body }
    }
}
