use jirabt_widgets::export::ExportLink;
use jirabt_widgets::features::Details;
use jirabt_widgets::i18n::{Locale, Messages};
use jirabt_widgets::import::UploadProgressView;
use jirabt_widgets::status::PiePayload;
use jirabt_widgets::subscription::Subscription;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub locale: Locale,
    pub data: &'static Messages,
}

#[derive(Debug, Serialize)]
pub struct HtmlResponse {
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub data: Details,
}

#[derive(Debug, Serialize)]
pub struct PieResponse {
    pub data: PiePayload,
}

#[derive(Debug, Serialize)]
pub struct ExportLinksResponse {
    pub data: Vec<ExportLink>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ImportProgressResponse {
    pub data: UploadProgressView,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub data: Subscription,
}
