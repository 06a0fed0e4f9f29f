use super::{DependencyNouns, ErrorMessages, Messages, ParameterLabels, SummaryMessages};

pub(super) static MESSAGES: Messages = Messages {
    steps: &[
        "Validate subscription settings",
        "Validate JIRA version",
        "Read CSV data",
        "Validate syntax of the changes",
        "Validate chronology and PKEY constant",
        "Collect required data for the issues",
        "Validate required statuses",
        "Validate required priorities",
        "Validate required resolutions",
        "Validate required types",
        "Validate required custom fields",
        "Validate required users",
        "Convert texts to identifiers",
        "Compute the changes",
        "Compute the labels",
        "Compute the workflow types",
        "Validate the workflow statuses",
        "Validate the resolution statuses",
        "Compute the new components",
        "Compute the new versions",
        "Compute the issues to update",
        "Create new components",
        "Create new versions",
        "Create issues",
        "Associate components and versions",
        "Set custom field values",
        "Associate labels",
        "Create status changes history",
        "Synchronize JIRA cache and index",
    ],
    import_succeed: "Import succeed, '{0}' changes",
    import_failed: "Import failed",
    export: "Export",
    url_pkey: "JIRA home page of this project",
    csv: "Simple data, CSV (;) file",
    sla_xls: "SLA, Excel 2003+ file",
    sla_csv: "SLA and few data, CSV (;) file",
    sla_csv_full: "SLA and data, CSV (;) file (slow)",
    sla_csv_status: "Status history, CSV (;)",
    import: "Import history from CSV (;)",
    pkey: "Key",
    status: "<span style=\"color: {0}\">&#9679;</span>&nbsp;Unresolved<br>{1} : {2}/{3} ({4}%)<br>Click to see issues.",
    priorities: "Unresolved issues by priority",
    name: "Name",
    help: "Help",
    jira_database_success: "Connection succeeded, detected version is {0}",
    jira_project_success: "Project {0}",
    jira_admin_success: "Administrator access succeeded",
    parameters: ParameterLabels {
        url: "Base URL",
        user: "Console user",
        password: "Console password",
        project: "Project identifier",
        jdbc_url: "JDBC URL",
        jdbc_user: "JDBC user",
        jdbc_password: "JDBC password",
        jdbc_driver: "JDBC driver class name",
    },
    error: ErrorMessages {
        jira_database: "Connection failed : {0}",
        jira_project: "Invalid PKEY or id",
        jira_admin: "Administrator access failed",
    },
    summary: SummaryMessages {
        started: "Started",
        ended: "ended",
        project: "Project",
        changes: "Issues : {0} changes",
        for_issues: "for {0} issues",
        required: "Required dependencies",
        imported: "Imported dependencies",
        new: "New dependencies",
        done_full: "Done",
        done_valid: "Valid file",
        jira_admin_alert: "JIRA administrator access is required to synchronize the JIRA cache",
        script_runner_alert: "ScriptRunner plugin is not installed, JIRA cache has not been synchronized",
        jira_cache_alert: "JIRA cache has not been synchronized, a JIRA re-index is required",
    },
    dependencies: DependencyNouns {
        priorities: "priorities",
        statuses: "statuses",
        types: "types",
        resolutions: "resolutions",
        users: "users",
        custom_fields: "custom fields",
        components: "components",
        versions: "versions",
        labels: "labels",
        issues: "issues",
    },
    short_datetime: "%m/%d/%Y %H:%M",
};
