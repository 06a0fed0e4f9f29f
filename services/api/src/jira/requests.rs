use jirabt_widgets::import::{ImportStatus, ValidationError};
use jirabt_widgets::subscription::{ProjectChoice, Subscription};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImportProgressRequest {
    pub status: ImportStatus,
    #[serde(default)]
    pub validation_error: Option<ValidationError>,
}

#[derive(Debug, Deserialize)]
pub struct SelectProjectRequest {
    pub subscription: Subscription,
    pub project: ProjectChoice,
}
