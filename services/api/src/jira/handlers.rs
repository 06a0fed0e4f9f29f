use axum::extract::State;
use axum::Json;
use chrono::Utc;
use jirabt_widgets::import::UploadProgressView;
use jirabt_widgets::subscription::Subscription;

use crate::error::ApiError;
use crate::extractors::RequestLocale;
use crate::jira::requests::{ImportProgressRequest, SelectProjectRequest};
use crate::jira::responses::{
    DetailsResponse, ExportLinksResponse, HtmlResponse, ImportProgressResponse, MessagesResponse,
    PieResponse, SubscriptionResponse,
};
use crate::AppState;

pub async fn get_messages(RequestLocale(locale): RequestLocale) -> Json<MessagesResponse> {
    Json(MessagesResponse {
        locale,
        data: locale.messages(),
    })
}

pub async fn render_features(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Json(subscription): Json<Subscription>,
) -> Result<Json<HtmlResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let data = state
        .widgets
        .render_features(&subscription, locale.messages(), today)?;
    Ok(Json(HtmlResponse { data }))
}

pub async fn render_key(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Json(subscription): Json<Subscription>,
) -> Result<Json<HtmlResponse>, ApiError> {
    let data = state.widgets.render_key(&subscription, locale.messages())?;
    Ok(Json(HtmlResponse { data }))
}

pub async fn render_details(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Json(subscription): Json<Subscription>,
) -> Result<Json<DetailsResponse>, ApiError> {
    let data = state.widgets.render_details(&subscription, locale.messages())?;
    Ok(Json(DetailsResponse { data }))
}

pub async fn pie(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Json(subscription): Json<Subscription>,
) -> Result<Json<PieResponse>, ApiError> {
    let data = state.widgets.pie(&subscription, locale.messages())?;
    Ok(Json(PieResponse { data }))
}

pub async fn export_links(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Json(subscription): Json<Subscription>,
) -> Result<Json<ExportLinksResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let data = state
        .widgets
        .export_links(&subscription, locale.messages(), today)?;
    let count = data.len();
    Ok(Json(ExportLinksResponse { data, count }))
}

pub async fn select_project(
    Json(body): Json<SelectProjectRequest>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let mut subscription = body.subscription;
    subscription.select_project(&body.project)?;
    Ok(Json(SubscriptionResponse { data: subscription }))
}

pub async fn import_progress(
    RequestLocale(locale): RequestLocale,
    Json(body): Json<ImportProgressRequest>,
) -> Json<ImportProgressResponse> {
    let data = UploadProgressView::build(
        &body.status,
        locale.messages(),
        body.validation_error.as_ref(),
        Utc::now(),
    );
    if data.should_stop_polling() {
        tracing::debug!(step = body.status.step, failed = body.status.failed, "import progress final");
    }
    Json(ImportProgressResponse { data })
}
