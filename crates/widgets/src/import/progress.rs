//! View model of the import dialog: step history, outcome and summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{fill, Messages};

use super::models::{ImportStatus, UploadMode};

/// Visible steps before older ones collapse behind `[...]`.
pub const VISIBLE_STEPS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Done,
    Running,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepLine {
    pub step: u32,
    pub name: String,
    pub state: StepState,
}

/// Static alerts of the dialog, shown after a full import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticAlert {
    JiraAdmin,
    ScriptRunner,
    JiraCache,
}

impl StaticAlert {
    pub fn message(self, messages: &Messages) -> &'static str {
        match self {
            StaticAlert::JiraAdmin => messages.summary.jira_admin_alert,
            StaticAlert::ScriptRunner => messages.summary.script_runner_alert,
            StaticAlert::JiraCache => messages.summary.jira_cache_alert,
        }
    }
}

/// Form field rejected by the host before or while importing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadProgressView {
    /// Names of the steps hidden behind `[...]`.
    pub collapsed: Vec<String>,
    pub steps: Vec<StepLine>,
    /// Validation alert, shown above everything else.
    pub error: Option<String>,
    /// Success banner once the task has ended.
    pub banner: Option<String>,
    pub alerts: Vec<StaticAlert>,
    pub summary: Vec<String>,
    pub stop_polling: bool,
}

impl UploadProgressView {
    pub fn build(
        status: &ImportStatus,
        messages: &Messages,
        validation: Option<&ValidationError>,
        now: DateTime<Utc>,
    ) -> Self {
        let last = status.step;
        let first = if last > VISIBLE_STEPS { last - (VISIBLE_STEPS - 1) } else { 1 };

        let collapsed = (1..first).map(|i| messages.step_or_number(i)).collect();
        let mut steps: Vec<StepLine> = (first..last)
            .map(|i| StepLine {
                step: i,
                name: messages.step_or_number(i),
                state: StepState::Done,
            })
            .collect();

        let mut view = Self {
            collapsed,
            steps: Vec::new(),
            error: None,
            banner: None,
            alerts: Vec::new(),
            summary: Vec::new(),
            stop_polling: false,
        };

        if status.failed || validation.is_some() {
            if status.failed {
                steps.push(StepLine {
                    step: last,
                    name: messages.step_or_number(last),
                    state: StepState::Failed,
                });
            }
            if let Some(error) = validation {
                view.error = Some(format!("{} {}", error.field, error.message));
            }
            view.stop_polling = true;
        } else if status.is_finished() {
            let mode = status.mode_or_default();
            view.banner = Some(
                if mode == UploadMode::Full {
                    messages.summary.done_full
                } else {
                    messages.summary.done_valid
                }
                .to_string(),
            );
            if mode == UploadMode::Full {
                view.alerts = full_import_alerts(status);
            }
            view.stop_polling = true;
        } else {
            steps.push(StepLine {
                step: last,
                name: messages.step_or_number(last),
                state: StepState::Running,
            });
        }

        view.steps = steps;
        view.summary = summary(status, messages, now);
        view
    }

    pub fn running_step(&self) -> Option<&StepLine> {
        self.steps.iter().find(|s| s.state == StepState::Running)
    }

    pub fn failed_step(&self) -> Option<&StepLine> {
        self.steps.iter().find(|s| s.state == StepState::Failed)
    }

    /// Ended, failed, or rejected by validation.
    pub fn should_stop_polling(&self) -> bool {
        self.stop_polling
    }
}

/// JIRA cache synchronization outcome of a full import.
pub fn full_import_alerts(status: &ImportStatus) -> Vec<StaticAlert> {
    if status.can_synchronize_jira != Some(true) {
        vec![StaticAlert::JiraAdmin]
    } else if status.script_runner == Some(false) {
        vec![StaticAlert::ScriptRunner]
    } else if status.synchronized_jira == Some(false) {
        vec![StaticAlert::JiraCache]
    } else {
        Vec::new()
    }
}

fn summary(status: &ImportStatus, messages: &Messages, now: DateTime<Utc>) -> Vec<String> {
    let words = &messages.summary;
    let mut lines = Vec::new();

    if let Some(start) = status.start {
        let started = format!("{} {}", words.started, start.format(messages.short_datetime));
        let line = match status.end {
            Some(end) => format!(
                "{started}, {} {} ({})",
                words.ended,
                end.format(messages.short_datetime),
                format_duration(end - start)
            ),
            None => format!("{started} {}", format_duration(now - start)),
        };
        lines.push(line);
    }

    if let Some(pkey) = &status.pkey {
        let jira = status.jira.map(|j| j.to_string()).unwrap_or_default();
        lines.push(format!("{} : {pkey} ({jira})", words.project));
    }

    if let Some(changes) = non_zero(status.changes) {
        let mut line = fill(words.changes, &[&changes]);
        if let Some(issues) = non_zero(status.issues) {
            line.push(' ');
            line.push_str(&fill(words.for_issues, &[&issues]));
        }
        lines.push(line);
    }

    lines.extend(required_dependencies(status, messages));
    lines.extend(imported_dependencies(status, messages));
    lines.extend(new_dependencies(status, messages));
    lines
}

fn required_dependencies(status: &ImportStatus, messages: &Messages) -> Option<String> {
    let nouns = &messages.dependencies;
    let triggered = [status.priorities, status.statuses, status.types, status.resolutions]
        .into_iter()
        .any(|c| non_zero(c).is_some());
    if !triggered {
        return None;
    }
    dependency_line(
        messages.summary.required,
        &[
            (status.priorities, nouns.priorities),
            (status.statuses, nouns.statuses),
            (status.types, nouns.types),
            (status.resolutions, nouns.resolutions),
            (status.users, nouns.users),
            (status.custom_fields, nouns.custom_fields),
        ],
    )
}

fn imported_dependencies(status: &ImportStatus, messages: &Messages) -> Option<String> {
    let nouns = &messages.dependencies;
    dependency_line(
        messages.summary.imported,
        &[
            (status.components, nouns.components),
            (status.versions, nouns.versions),
            (status.labels, nouns.labels),
        ],
    )
}

fn new_dependencies(status: &ImportStatus, messages: &Messages) -> Option<String> {
    let nouns = &messages.dependencies;
    dependency_line(
        messages.summary.new,
        &[
            (status.new_components, nouns.components),
            (status.new_versions, nouns.versions),
            (status.new_issues, nouns.issues),
            (status.new_labels, nouns.labels),
        ],
    )
}

/// `Header: 3 statuses, 2 types`, or `None` when every counter is zero.
fn dependency_line(header: &str, counters: &[(Option<u32>, &str)]) -> Option<String> {
    let parts: Vec<String> = counters
        .iter()
        .filter_map(|(count, noun)| non_zero(*count).map(|c| format!("{c} {noun}")))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("{header}: {}", parts.join(", ")))
    }
}

fn non_zero(count: Option<u32>) -> Option<u32> {
    count.filter(|c| *c > 0)
}

/// Compact elapsed time, e.g. `1h 02m 03s`, `4m 05s`, `12s`.
pub fn format_duration(duration: chrono::Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 9, 30, 0).unwrap()
    }

    fn running(step: u32) -> ImportStatus {
        ImportStatus {
            step,
            mode: Some(UploadMode::Validation),
            start: Some(start()),
            ..ImportStatus::default()
        }
    }

    fn names(lines: &[StepLine]) -> Vec<(u32, StepState)> {
        lines.iter().map(|l| (l.step, l.state)).collect()
    }

    #[test]
    fn early_steps_are_all_visible() {
        let view = UploadProgressView::build(&running(3), Locale::En.messages(), None, start());
        assert!(view.collapsed.is_empty());
        assert_eq!(
            names(&view.steps),
            vec![(1, StepState::Done), (2, StepState::Done), (3, StepState::Running)]
        );
        assert_eq!(view.running_step().unwrap().name, "Read CSV data");
        assert!(!view.stop_polling);
    }

    #[test]
    fn history_is_shortened_to_four_items() {
        let view = UploadProgressView::build(&running(7), Locale::En.messages(), None, start());
        assert_eq!(
            view.collapsed,
            vec![
                "Validate subscription settings",
                "Validate JIRA version",
                "Read CSV data"
            ]
        );
        assert_eq!(
            names(&view.steps),
            vec![
                (4, StepState::Done),
                (5, StepState::Done),
                (6, StepState::Done),
                (7, StepState::Running)
            ]
        );
    }

    #[test]
    fn step_four_is_not_collapsed() {
        let view = UploadProgressView::build(&running(4), Locale::En.messages(), None, start());
        assert!(view.collapsed.is_empty());
        assert_eq!(view.steps.len(), 4);
    }

    #[test]
    fn failed_step_stops_polling() {
        let mut status = running(5);
        status.failed = true;
        status.end = Some(start());
        let view = UploadProgressView::build(&status, Locale::En.messages(), None, start());
        assert_eq!(view.failed_step().unwrap().step, 5);
        assert!(view.running_step().is_none());
        assert!(view.banner.is_none());
        assert!(view.stop_polling);
    }

    #[test]
    fn validation_error_is_reported() {
        let error = ValidationError {
            field: "csv-file".to_string(),
            message: "Invalid header".to_string(),
        };
        let view =
            UploadProgressView::build(&running(3), Locale::En.messages(), Some(&error), start());
        assert_eq!(view.error.as_deref(), Some("csv-file Invalid header"));
        assert!(view.failed_step().is_none());
        assert!(view.running_step().is_none());
        assert!(view.stop_polling);
    }

    #[test]
    fn finished_validation_shows_valid_file_banner() {
        let mut status = running(14);
        status.end = Some(start() + chrono::Duration::seconds(75));
        let view = UploadProgressView::build(&status, Locale::Fr.messages(), None, start());
        assert_eq!(view.banner.as_deref(), Some("Fichier valide"));
        assert!(view.alerts.is_empty());
        assert!(view.stop_polling);
        assert_eq!(
            view.summary[0],
            "Démarré 10/02/2026 09:30, terminé 10/02/2026 09:31 (1m 15s)"
        );
    }

    #[test]
    fn finished_full_import_reports_cache_alerts() {
        let mut status = running(29);
        status.mode = Some(UploadMode::Full);
        status.end = Some(start());

        let view = UploadProgressView::build(&status, Locale::En.messages(), None, start());
        assert_eq!(view.banner.as_deref(), Some("Done"));
        assert_eq!(view.alerts, vec![StaticAlert::JiraAdmin]);

        status.can_synchronize_jira = Some(true);
        status.script_runner = Some(false);
        assert_eq!(full_import_alerts(&status), vec![StaticAlert::ScriptRunner]);

        status.script_runner = Some(true);
        status.synchronized_jira = Some(false);
        assert_eq!(full_import_alerts(&status), vec![StaticAlert::JiraCache]);

        status.synchronized_jira = Some(true);
        assert!(full_import_alerts(&status).is_empty());
    }

    #[test]
    fn running_summary_shows_elapsed_time() {
        let now = start() + chrono::Duration::seconds(3725);
        let view = UploadProgressView::build(&running(2), Locale::En.messages(), None, now);
        assert_eq!(view.summary[0], "Started 02/10/2026 09:30 1h 02m 05s");
    }

    #[test]
    fn summary_lists_project_changes_and_dependencies() {
        let mut status = running(20);
        status.pkey = Some("PRJ".to_string());
        status.jira = Some(10074);
        status.changes = Some(120);
        status.issues = Some(30);
        status.statuses = Some(4);
        status.types = Some(0);
        status.users = Some(6);
        status.versions = Some(2);
        status.new_issues = Some(3);
        status.new_labels = Some(1);

        let view = UploadProgressView::build(&status, Locale::En.messages(), None, start());
        assert_eq!(
            &view.summary[1..],
            &[
                "Project : PRJ (10074)".to_string(),
                "Issues : 120 changes for 30 issues".to_string(),
                "Required dependencies: 4 statuses, 6 users".to_string(),
                "Imported dependencies: 2 versions".to_string(),
                "New dependencies: 3 issues, 1 labels".to_string(),
            ]
        );
    }

    #[test]
    fn users_alone_do_not_trigger_required_line() {
        let mut status = running(12);
        status.users = Some(6);
        status.custom_fields = Some(2);
        let view = UploadProgressView::build(&status, Locale::En.messages(), None, start());
        assert!(view.summary.iter().all(|l| !l.starts_with("Required")));
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(chrono::Duration::seconds(0)), "0s");
        assert_eq!(format_duration(chrono::Duration::seconds(65)), "1m 05s");
        assert_eq!(format_duration(chrono::Duration::seconds(-4)), "0s");
        assert_eq!(format_duration(chrono::Duration::seconds(7322)), "2h 02m 02s");
    }
}
