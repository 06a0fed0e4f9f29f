use std::collections::BTreeMap;

use jirabt_common::error::{JiraBtError, JiraBtResult};
use serde::{Deserialize, Serialize};

use crate::status::StatusCounts;

pub const PARAMETER_URL: &str = "service:bt:jira:url";
pub const PARAMETER_PKEY: &str = "service:bt:jira:pkey";
pub const PARAMETER_PROJECT: &str = "service:bt:jira:project";
pub const PARAMETER_HELP: &str = "service:bt:help";

/// JIRA project snapshot with unresolved issue counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraProject {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Unresolved issues per status, in source order.
    #[serde(default)]
    pub statuses: StatusCounts,
    /// Unresolved issues per priority, in source order.
    #[serde(default)]
    pub priorities: StatusCounts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionData {
    #[serde(default)]
    pub project: JiraProject,
}

/// Project picked in the subscription form: `name` is the key, `id` the
/// JIRA identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectChoice {
    pub id: u32,
    pub name: String,
}

/// A subscription of a project to the JIRA bug tracker, as sent by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u32,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub data: SubscriptionData,
}

impl Subscription {
    /// Required, non-blank parameter value.
    pub fn parameter(&self, key: &str) -> JiraBtResult<&str> {
        self.parameters
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                JiraBtError::Validation(format!(
                    "subscription {} has no '{key}' parameter",
                    self.id
                ))
            })
    }

    /// JIRA base URL without trailing slash.
    pub fn jira_url(&self) -> JiraBtResult<&str> {
        Ok(self.parameter(PARAMETER_URL)?.trim_end_matches('/'))
    }

    pub fn pkey(&self) -> JiraBtResult<&str> {
        self.parameter(PARAMETER_PKEY)
    }

    pub fn help_url(&self) -> Option<&str> {
        self.parameters.get(PARAMETER_HELP).map(String::as_str)
    }

    pub fn project(&self) -> &JiraProject {
        &self.data.project
    }

    /// Fill the key and project identifier parameters from a picked project.
    pub fn select_project(&mut self, choice: &ProjectChoice) -> JiraBtResult<()> {
        let name = choice.name.trim();
        if name.is_empty() {
            return Err(JiraBtError::Validation(format!(
                "project {} has no key",
                choice.id
            )));
        }
        self.parameters
            .insert(PARAMETER_PKEY.to_owned(), name.to_owned());
        self.parameters
            .insert(PARAMETER_PROJECT.to_owned(), choice.id.to_string());
        Ok(())
    }
}
