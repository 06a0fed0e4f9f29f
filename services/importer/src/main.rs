mod settings;

use std::sync::Arc;

use chrono::Utc;
use jirabt_common::error::JiraBtError;
use jirabt_config::{init_tracing, AppConfig};
use jirabt_widgets::i18n::Locale;
use jirabt_widgets::import::{
    run_import, ImportClient, ImportClientConfig, ImportOutcome, UploadProgressView,
};

use crate::settings::ImportSettings;

#[tokio::main]
async fn main() {
    // Before init_tracing: this loads `.env`.
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    tracing::info!(service = "jirabt-importer", "starting");

    let settings = ImportSettings::from_env().expect("failed to load import settings");
    let messages = config
        .default_locale
        .parse::<Locale>()
        .unwrap_or_default()
        .messages();

    let client = ImportClient::new(ImportClientConfig {
        rest_path: config.rest_path.clone(),
        timeout: config.http_timeout(),
    })
    .expect("failed to create import client");

    tracing::info!(
        subscription = settings.subscription,
        file = %settings.file.display(),
        mode = %settings.mode,
        encoding = %settings.encoding,
        "import configured"
    );

    let mut last_step = 0;
    let outcome = run_import(
        Arc::new(client),
        &settings.request(),
        config.poll_interval(),
        |status| {
            if status.step == last_step && !status.is_finished() {
                return;
            }
            last_step = status.step;
            let view = UploadProgressView::build(status, messages, None, Utc::now());
            if let Some(step) = view.running_step() {
                tracing::info!(step = step.step, name = %step.name, "import running");
            }
        },
    )
    .await;

    let view = outcome
        .status()
        .map(|status| UploadProgressView::build(status, messages, None, Utc::now()));
    if let Some(view) = &view {
        for line in &view.summary {
            tracing::info!("{line}");
        }
        for alert in &view.alerts {
            tracing::warn!("{}", alert.message(messages));
        }
    }

    match outcome {
        ImportOutcome::Completed(status) if !status.failed => {
            let changes = status.changes.unwrap_or_default();
            tracing::info!(
                subscription = settings.subscription,
                changes,
                "{}",
                messages.import_succeeded(changes)
            );
        }
        ImportOutcome::Completed(status) => {
            let failed = view.as_ref().and_then(|v| v.failed_step()).map(|s| s.name.clone());
            tracing::error!(step = status.step, failed_step = ?failed, "{}", messages.import_failed);
            std::process::exit(1);
        }
        ImportOutcome::Failed { error, .. } => {
            let error = JiraBtError::from(error);
            tracing::error!(error = %error, "{}", messages.import_failed);
            std::process::exit(1);
        }
    }
}
