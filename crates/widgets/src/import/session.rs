use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::client::{ImportClient, ImportClientError, ImportTaskSource};
use super::models::{ImportStatus, UploadMode};
use super::poller::UploadPoller;

#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub subscription: u32,
    pub mode: UploadMode,
    pub encoding: String,
    pub file: PathBuf,
}

#[derive(Debug)]
pub enum ImportOutcome {
    /// The host answered the upload; the import may still have failed at
    /// some step, see [`ImportStatus::failed`].
    Completed(ImportStatus),
    Failed {
        error: ImportClientError,
        /// Final task state fetched after the failure, if any.
        last: Option<ImportStatus>,
    },
}

impl ImportOutcome {
    pub fn status(&self) -> Option<&ImportStatus> {
        match self {
            ImportOutcome::Completed(status) => Some(status),
            ImportOutcome::Failed { last, .. } => last.as_ref(),
        }
    }
}

/// Upload a CSV file and report the task progress until the host answers.
pub async fn run_import<F>(
    client: Arc<ImportClient>,
    request: &ImportRequest,
    interval: Duration,
    mut on_progress: F,
) -> ImportOutcome
where
    F: FnMut(&ImportStatus),
{
    let mut poller = UploadPoller::new(Arc::clone(&client), request.subscription, interval);
    let mut progress = poller.subscribe();
    poller.schedule();

    let upload = client.upload_file(
        request.subscription,
        request.mode,
        &request.encoding,
        &request.file,
    );
    tokio::pin!(upload);

    let mut watching = true;
    let result = loop {
        tokio::select! {
            result = &mut upload => break result,
            changed = progress.changed(), if watching => {
                if changed.is_err() {
                    watching = false;
                    continue;
                }
                let status = progress.borrow_and_update().clone();
                if let Some(status) = status {
                    on_progress(&status);
                }
            }
        }
    };
    poller.unschedule();

    match result {
        Ok(status) => {
            tracing::info!(
                subscription = request.subscription,
                step = status.step,
                failed = status.failed,
                "import upload answered"
            );
            on_progress(&status);
            ImportOutcome::Completed(status)
        }
        Err(error) => {
            tracing::warn!(subscription = request.subscription, error = %error, "import upload failed");
            let last = match client.fetch_task(request.subscription).await {
                Ok(status) => {
                    on_progress(&status);
                    Some(status)
                }
                Err(err) => {
                    tracing::warn!(subscription = request.subscription, error = %err, "cannot fetch final task state");
                    poller.latest()
                }
            };
            ImportOutcome::Failed { error, last }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::client::ImportClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> Arc<ImportClient> {
        Arc::new(
            ImportClient::new(ImportClientConfig {
                rest_path: format!("{}/rest/", server.uri()),
                timeout: Duration::from_secs(5),
            })
            .unwrap(),
        )
    }

    fn csv_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jirabt-{}-{name}", std::process::id()));
        std::fs::write(&path, "id;type;status\n1;Bug;Open\n").unwrap();
        path
    }

    fn request(file: PathBuf) -> ImportRequest {
        ImportRequest {
            subscription: 3,
            mode: UploadMode::Validation,
            encoding: "UTF-8".to_string(),
            file,
        }
    }

    #[tokio::test]
    async fn progress_is_reported_while_uploading() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/service/bt/jira/3/validation/UTF-8"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(300))
                    .set_body_json(serde_json::json!({
                        "step": 12,
                        "start": 1767225600000u64,
                        "end": 1767225660000u64,
                        "changes": 1
                    })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/service/bt/jira/3/task"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "step": 2,
                "start": 1767225600000u64
            })))
            .mount(&server)
            .await;

        let file = csv_file("progress.csv");
        let mut seen = Vec::new();
        let outcome = run_import(
            client(&server),
            &request(file.clone()),
            Duration::from_millis(20),
            |status| seen.push(status.step),
        )
        .await;
        std::fs::remove_file(file).ok();

        match outcome {
            ImportOutcome::Completed(status) => {
                assert!(status.is_finished());
                assert_eq!(status.changes, Some(1));
            }
            other => panic!("expected completion, got: {other:?}"),
        }
        assert!(seen.contains(&2), "seen: {seen:?}");
        assert_eq!(seen.last(), Some(&12));
    }

    #[tokio::test]
    async fn failed_upload_fetches_final_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/service/bt/jira/3/validation/UTF-8"))
            .respond_with(ResponseTemplate::new(500).set_body_string("import failed"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/service/bt/jira/3/task"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "step": 5,
                "start": 1767225600000u64,
                "end": 1767225601000u64,
                "failed": true
            })))
            .mount(&server)
            .await;

        let file = csv_file("failed.csv");
        let outcome = run_import(
            client(&server),
            &request(file.clone()),
            Duration::from_secs(60),
            |_| {},
        )
        .await;
        std::fs::remove_file(file).ok();

        match &outcome {
            ImportOutcome::Failed { error, last } => {
                assert!(matches!(error, ImportClientError::HttpError { .. }));
                let last = last.as_ref().expect("final state");
                assert!(last.failed);
                assert_eq!(last.step, 5);
            }
            other => panic!("expected failure, got: {other:?}"),
        }
        assert_eq!(outcome.status().map(|s| s.step), Some(5));
    }

    #[tokio::test]
    async fn missing_file_fails_without_task() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/service/bt/jira/3/task"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let outcome = run_import(
            client(&server),
            &request(PathBuf::from("/nonexistent/jirabt.csv")),
            Duration::from_secs(60),
            |_| {},
        )
        .await;
        match outcome {
            ImportOutcome::Failed { error, last } => {
                assert!(matches!(error, ImportClientError::Io(_)));
                assert!(last.is_none());
            }
            other => panic!("expected failure, got: {other:?}"),
        }
    }
}
