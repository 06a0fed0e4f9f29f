use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use jirabt_common::error::JiraBtError;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

use super::models::{ImportStatus, UploadMode};

/// Multipart field holding the CSV file.
pub const CSV_FIELD: &str = "csv-file";

#[derive(Debug, Clone)]
pub struct ImportClientConfig {
    /// Host REST root, ending with `/`.
    pub rest_path: String,
    pub timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("cannot read import file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ImportClientError> for JiraBtError {
    fn from(err: ImportClientError) -> Self {
        match err {
            ImportClientError::HttpError {
                status: StatusCode::NOT_FOUND,
                body,
            } => JiraBtError::NotFound(body),
            other => JiraBtError::Upstream(other.to_string()),
        }
    }
}

/// Source of import task snapshots, polled while an upload runs.
#[async_trait]
pub trait ImportTaskSource: Send + Sync {
    async fn fetch_task(&self, subscription: u32) -> Result<ImportStatus, ImportClientError>;
}

/// HTTP client of the host import endpoints.
#[derive(Clone)]
pub struct ImportClient {
    client: Client,
    config: ImportClientConfig,
}

impl ImportClient {
    pub fn new(config: ImportClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn base(&self, subscription: u32) -> String {
        format!("{}service/bt/jira/{subscription}", self.config.rest_path)
    }

    pub fn upload_url(&self, subscription: u32, mode: UploadMode, encoding: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base(subscription),
            mode.as_path(),
            urlencoding::encode(encoding)
        )
    }

    pub fn task_url(&self, subscription: u32) -> String {
        format!("{}/task", self.base(subscription))
    }

    /// Send a CSV file; the host answers once the import is over.
    pub async fn upload(
        &self,
        subscription: u32,
        mode: UploadMode,
        encoding: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<ImportStatus, ImportClientError> {
        let url = self.upload_url(subscription, mode, encoding);
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part(CSV_FIELD, part);

        tracing::info!(subscription, %mode, encoding, file_name, "uploading import file");
        let response = self.client.post(&url).multipart(form).send().await?;
        parse_status(response).await
    }

    pub async fn upload_file(
        &self,
        subscription: u32,
        mode: UploadMode,
        encoding: &str,
        path: &Path,
    ) -> Result<ImportStatus, ImportClientError> {
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "import.csv".to_string());
        self.upload(subscription, mode, encoding, &file_name, content)
            .await
    }
}

#[async_trait]
impl ImportTaskSource for ImportClient {
    async fn fetch_task(&self, subscription: u32) -> Result<ImportStatus, ImportClientError> {
        let response = self.client.get(self.task_url(subscription)).send().await?;
        parse_status(response).await
    }
}

async fn parse_status(response: reqwest::Response) -> Result<ImportStatus, ImportClientError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<ImportStatus>()
            .await
            .map_err(ImportClientError::RequestError);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ImportClientError::HttpError { status, body })
}
