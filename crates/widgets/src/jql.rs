/// JQL filters on the unresolved issues of a project, and the issue navigator
/// URLs opening them.
#[derive(Debug, Clone, Copy)]
pub struct IssueFilter<'a> {
    jira_url: &'a str,
    pkey: &'a str,
}

impl<'a> IssueFilter<'a> {
    pub fn new(jira_url: &'a str, pkey: &'a str) -> Self {
        Self {
            jira_url: jira_url.trim_end_matches('/'),
            pkey,
        }
    }

    /// `project = KEY AND resolution = NULL`
    pub fn unresolved(&self) -> String {
        format!(
            "project = {} AND resolution = NULL",
            escape_jql_value(self.pkey)
        )
    }

    /// Unresolved issues in one status, or in any of several statuses.
    pub fn by_statuses(&self, statuses: &[&str]) -> String {
        format!("{} AND {}", self.unresolved(), status_clause(statuses))
    }

    pub fn by_priority(&self, priority: &str) -> String {
        format!("{} AND priority = {}", self.unresolved(), quote(priority))
    }

    pub fn navigator_url(&self, jql: &str) -> String {
        format!(
            "{}/issues/?jql={}",
            self.jira_url,
            urlencoding::encode(jql)
        )
    }

    pub fn browse_url(&self) -> String {
        format!("{}/browse/{}", self.jira_url, self.pkey)
    }
}

/// `status = "A"` for one status, `(status = "A" OR status = "B")` for more.
fn status_clause(statuses: &[&str]) -> String {
    let terms: Vec<String> = statuses
        .iter()
        .map(|s| format!("status = {}", quote(s)))
        .collect();
    match terms.len() {
        1 => terms.into_iter().next().unwrap_or_default(),
        _ => format!("({})", terms.join(" OR ")),
    }
}

/// Bare identifiers stay as is, anything else is quoted.
fn escape_jql_value(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        value.to_string()
    } else {
        quote(value)
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_filter() {
        let filter = IssueFilter::new("https://jira", "PRJ");
        assert_eq!(filter.unresolved(), "project = PRJ AND resolution = NULL");
    }

    #[test]
    fn single_status() {
        let filter = IssueFilter::new("https://jira", "PRJ");
        assert_eq!(
            filter.by_statuses(&["In Progress"]),
            "project = PRJ AND resolution = NULL AND status = \"In Progress\""
        );
    }

    #[test]
    fn multiple_statuses_are_or_combined() {
        let filter = IssueFilter::new("https://jira", "PRJ");
        assert_eq!(
            filter.by_statuses(&["Open", "Reopened", "Closed"]),
            "project = PRJ AND resolution = NULL AND (status = \"Open\" OR status = \"Reopened\" OR status = \"Closed\")"
        );
    }

    #[test]
    fn priority_filter() {
        let filter = IssueFilter::new("https://jira", "PRJ");
        assert_eq!(
            filter.by_priority("Blocker"),
            "project = PRJ AND resolution = NULL AND priority = \"Blocker\""
        );
    }

    #[test]
    fn navigator_url_is_percent_encoded() {
        let filter = IssueFilter::new("https://jira/", "PRJ");
        let url = filter.navigator_url(&filter.by_statuses(&["Open"]));
        assert_eq!(
            url,
            "https://jira/issues/?jql=project%20%3D%20PRJ%20AND%20resolution%20%3D%20NULL%20AND%20status%20%3D%20%22Open%22"
        );
    }

    #[test]
    fn browse_url() {
        let filter = IssueFilter::new("https://jira/", "PRJ");
        assert_eq!(filter.browse_url(), "https://jira/browse/PRJ");
    }

    #[test]
    fn key_with_hyphen_is_quoted() {
        let filter = IssueFilter::new("https://jira", "MY-PRJ");
        assert!(filter.unresolved().starts_with("project = \"MY-PRJ\""));
    }

    #[test]
    fn quotes_inside_status_are_escaped() {
        assert_eq!(status_clause(&["Say \"hi\""]), "status = \"Say \\\"hi\\\"\"");
    }
}
