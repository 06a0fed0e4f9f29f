mod error;
mod extractors;
mod jira;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use jirabt_common::types::ServiceInfo;
use jirabt_config::{init_tracing, AppConfig};
use jirabt_widgets::features::JiraWidgets;
use jirabt_widgets::i18n::Locale;
use jirabt_widgets::render::DefaultRenderHelper;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub widgets: Arc<JiraWidgets<DefaultRenderHelper>>,
    pub default_locale: Locale,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let default_locale = config.default_locale.parse().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to the root locale");
            Locale::default()
        });
        Self {
            widgets: Arc::new(JiraWidgets::new(DefaultRenderHelper, config.rest_path.clone())),
            default_locale,
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("jirabt-api"))
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT_LANGUAGE]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(jira::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    tracing::info!(service = "jirabt-api", rest_path = %config.rest_path, "starting");

    let app = build_router(AppState::from_config(&config));
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
