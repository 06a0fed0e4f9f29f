use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How far the host goes with an uploaded CSV file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadMode {
    /// Validate the input syntax only.
    #[serde(alias = "syntax")]
    Syntax,
    /// Validate the input against the JIRA database.
    #[default]
    #[serde(alias = "validation")]
    Validation,
    /// Validate and count the entries that would be created.
    #[serde(alias = "preview")]
    Preview,
    /// Validate and insert data.
    #[serde(alias = "full")]
    Full,
}

impl UploadMode {
    /// Path segment of the upload endpoint.
    pub fn as_path(self) -> &'static str {
        match self {
            UploadMode::Syntax => "syntax",
            UploadMode::Validation => "validation",
            UploadMode::Preview => "preview",
            UploadMode::Full => "full",
        }
    }
}

impl fmt::Display for UploadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for UploadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "syntax" => Ok(UploadMode::Syntax),
            "validation" => Ok(UploadMode::Validation),
            "preview" => Ok(UploadMode::Preview),
            "full" => Ok(UploadMode::Full),
            other => Err(format!("unknown upload mode: {other}")),
        }
    }
}

/// Import task state as reported by the host (`.../{subscription}/task`).
///
/// Counters are absent until the step computing them has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStatus {
    /// 1-based index of the current step.
    #[serde(default)]
    pub step: u32,
    pub mode: Option<UploadMode>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failed: bool,
    pub pkey: Option<String>,
    pub jira: Option<u32>,
    pub jira_version: Option<String>,

    pub issues: Option<u32>,
    pub changes: Option<u32>,
    pub status_changes: Option<u32>,
    pub min_issue: Option<u32>,
    pub max_issue: Option<u32>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub issue_from: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub issue_to: Option<DateTime<Utc>>,

    pub priorities: Option<u32>,
    pub statuses: Option<u32>,
    pub types: Option<u32>,
    pub resolutions: Option<u32>,
    pub users: Option<u32>,
    pub custom_fields: Option<u32>,

    pub components: Option<u32>,
    pub versions: Option<u32>,
    pub labels: Option<u32>,

    pub new_components: Option<u32>,
    pub new_versions: Option<u32>,
    pub new_issues: Option<u32>,
    pub new_labels: Option<u32>,

    pub can_synchronize_jira: Option<bool>,
    pub script_runner: Option<bool>,
    pub synchronized_jira: Option<bool>,
}

impl ImportStatus {
    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    pub fn mode_or_default(&self) -> UploadMode {
        self.mode.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("FULL".parse::<UploadMode>().unwrap(), UploadMode::Full);
        assert_eq!(" preview ".parse::<UploadMode>().unwrap(), UploadMode::Preview);
        assert!("everything".parse::<UploadMode>().is_err());
    }

    #[test]
    fn mode_json_accepts_both_cases() {
        let upper: UploadMode = serde_json::from_str("\"SYNTAX\"").unwrap();
        let lower: UploadMode = serde_json::from_str("\"syntax\"").unwrap();
        assert_eq!(upper, UploadMode::Syntax);
        assert_eq!(lower, UploadMode::Syntax);
        assert_eq!(serde_json::to_string(&UploadMode::Full).unwrap(), "\"FULL\"");
    }

    #[test]
    fn deserialize_running_task() {
        let json = r#"{
            "step": 3,
            "mode": "VALIDATION",
            "start": 1767225600000,
            "failed": false,
            "pkey": "PRJ",
            "jira": 10000,
            "changes": 42,
            "newIssues": 2
        }"#;
        let status: ImportStatus = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(status.step, 3);
        assert_eq!(status.mode, Some(UploadMode::Validation));
        assert_eq!(
            status.start,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(!status.is_finished());
        assert_eq!(status.changes, Some(42));
        assert_eq!(status.new_issues, Some(2));
        assert_eq!(status.issues, None);
    }

    #[test]
    fn deserialize_finished_task_with_nulls() {
        let json = r#"{"step": 29, "start": 1767225600000, "end": 1767225660000, "failed": false, "issues": null, "canSynchronizeJira": true, "scriptRunner": false}"#;
        let status: ImportStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_finished());
        assert_eq!(status.can_synchronize_jira, Some(true));
        assert_eq!(status.script_runner, Some(false));
        assert_eq!(status.mode_or_default(), UploadMode::Validation);
    }

    #[test]
    fn deserialize_empty_object() {
        let status: ImportStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, ImportStatus::default());
    }
}
