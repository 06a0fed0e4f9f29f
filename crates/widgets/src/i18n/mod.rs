//! Locale message bundles for the JIRA widgets.
//!
//! Templates use positional `{0}`, `{1}`... placeholders, filled by [`fill`].

mod en;
mod fr;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &en::MESSAGES,
            Locale::Fr => &fr::MESSAGES,
        }
    }

    /// Match a language tag such as `fr`, `fr-FR` or `fr_CA` on its primary subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == primary)
    }

    /// Pick the supported locale with the highest quality from an
    /// `Accept-Language` header value. Equal qualities keep header order.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Locale, f32)> = None;
        for part in header.split(',') {
            let mut pieces = part.split(';');
            let tag = pieces.next().unwrap_or_default();
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if quality <= 0.0 {
                continue;
            }
            if let Some(locale) = Self::from_tag(tag) {
                if best.map_or(true, |(_, q)| quality > q) {
                    best = Some((locale, quality));
                }
            }
        }
        best.map(|(locale, _)| locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unsupported locale: {s}"))
    }
}

/// Replace `{n}` placeholders with the matching argument.
/// Placeholders without an argument are left untouched.
pub fn fill(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), &arg.to_string());
    }
    out
}

#[derive(Debug, Serialize)]
pub struct ErrorMessages {
    #[serde(rename = "jira-database")]
    pub jira_database: &'static str,
    #[serde(rename = "jira-project")]
    pub jira_project: &'static str,
    #[serde(rename = "jira-admin")]
    pub jira_admin: &'static str,
}

/// Words used by the import progress summary.
#[derive(Debug, Serialize)]
pub struct SummaryMessages {
    pub started: &'static str,
    pub ended: &'static str,
    pub project: &'static str,
    /// `{0}` changes
    pub changes: &'static str,
    /// `{0}` issues
    pub for_issues: &'static str,
    pub required: &'static str,
    pub imported: &'static str,
    pub new: &'static str,
    pub done_full: &'static str,
    pub done_valid: &'static str,
    pub jira_admin_alert: &'static str,
    pub script_runner_alert: &'static str,
    pub jira_cache_alert: &'static str,
}

/// Plural nouns for the dependency counters.
#[derive(Debug, Serialize)]
pub struct DependencyNouns {
    pub priorities: &'static str,
    pub statuses: &'static str,
    pub types: &'static str,
    pub resolutions: &'static str,
    pub users: &'static str,
    pub custom_fields: &'static str,
    pub components: &'static str,
    pub versions: &'static str,
    pub labels: &'static str,
    pub issues: &'static str,
}

/// Labels of the subscription parameters, keyed like the parameters.
#[derive(Debug, Serialize)]
pub struct ParameterLabels {
    #[serde(rename = "service:bt:jira:url")]
    pub url: &'static str,
    #[serde(rename = "service:bt:jira:user")]
    pub user: &'static str,
    #[serde(rename = "service:bt:jira:password")]
    pub password: &'static str,
    #[serde(rename = "service:bt:jira:project")]
    pub project: &'static str,
    #[serde(rename = "service:bt:jira:jdbc-url")]
    pub jdbc_url: &'static str,
    #[serde(rename = "service:bt:jira:jdbc-user")]
    pub jdbc_user: &'static str,
    #[serde(rename = "service:bt:jira:jdbc-password")]
    pub jdbc_password: &'static str,
    #[serde(rename = "service:bt:jira:jdbc-driver")]
    pub jdbc_driver: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Messages {
    pub steps: &'static [&'static str],
    #[serde(rename = "import-succeed")]
    pub import_succeed: &'static str,
    #[serde(rename = "import-failed")]
    pub import_failed: &'static str,
    pub export: &'static str,
    #[serde(rename = "service:bt:jira:url-pkey")]
    pub url_pkey: &'static str,
    #[serde(rename = "service:bt:jira:csv")]
    pub csv: &'static str,
    #[serde(rename = "service:bt:jira:sla-xls")]
    pub sla_xls: &'static str,
    #[serde(rename = "service:bt:jira:sla-csv")]
    pub sla_csv: &'static str,
    #[serde(rename = "service:bt:jira:sla-csv-full")]
    pub sla_csv_full: &'static str,
    #[serde(rename = "service:bt:jira:sla-csv-status")]
    pub sla_csv_status: &'static str,
    #[serde(rename = "service:bt:jira:import")]
    pub import: &'static str,
    #[serde(rename = "service:bt:jira:pkey")]
    pub pkey: &'static str,
    #[serde(rename = "service:bt:jira:status")]
    pub status: &'static str,
    #[serde(rename = "service:bt:sla:priorities")]
    pub priorities: &'static str,
    pub name: &'static str,
    #[serde(rename = "service:bt:help")]
    pub help: &'static str,
    #[serde(rename = "jira-database-success")]
    pub jira_database_success: &'static str,
    #[serde(rename = "jira-project-success")]
    pub jira_project_success: &'static str,
    #[serde(rename = "jira-admin-success")]
    pub jira_admin_success: &'static str,
    #[serde(flatten)]
    pub parameters: ParameterLabels,
    pub error: ErrorMessages,
    pub summary: SummaryMessages,
    pub dependencies: DependencyNouns,
    /// chrono format of short date-times in the summary.
    pub short_datetime: &'static str,
}

impl Messages {
    /// Name of a 1-based import step.
    pub fn step(&self, step: u32) -> Option<&'static str> {
        let index = usize::try_from(step).ok()?.checked_sub(1)?;
        self.steps.get(index).copied()
    }

    pub fn step_or_number(&self, step: u32) -> String {
        self.step(step)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{step}"))
    }

    pub fn import_succeeded(&self, changes: u32) -> String {
        fill(self.import_succeed, &[&changes])
    }

    pub fn status_tooltip(
        &self,
        color: &str,
        label: &str,
        value: u64,
        total: u64,
        percent: u32,
    ) -> String {
        fill(self.status, &[&color, &label, &value, &total, &percent])
    }
}
