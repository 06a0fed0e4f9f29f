use crate::jql::IssueFilter;
use crate::render::{html_escape, RenderHelper};
use crate::status::StatusCounts;

/// Font Awesome icon and colour class of the standard JIRA priorities.
pub const PRIORITY_ICONS: &[(&str, &str)] = &[
    ("BLOCKER", "ban text-danger"),
    ("CRITICAL", "exclamation text-danger"),
    ("MAJOR", "sort-up text-danger"),
    ("MINOR", "sort-down text-info"),
    ("TRIVIAL", "sort-down text-success"),
];

/// Icon of priorities outside [`PRIORITY_ICONS`].
pub const UNKNOWN_PRIORITY_ICON: &str = "ellipsis-v text-danger";

/// Case-insensitive icon lookup.
pub fn priority_icon(priority: &str) -> &'static str {
    PRIORITY_ICONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(priority))
        .map(|(_, icon)| *icon)
        .unwrap_or(UNKNOWN_PRIORITY_ICON)
}

/// Unresolved issues per priority, each linked to its issue navigator search,
/// separated by `" - "`.
pub fn render_priorities(
    priorities: &StatusCounts,
    filter: &IssueFilter<'_>,
    helper: &dyn RenderHelper,
) -> String {
    priorities
        .iter()
        .map(|entry| {
            let url = filter.navigator_url(&filter.by_priority(&entry.label));
            format!(
                "<a target=\"_blank\" href=\"{}\" data-container=\"#_ucDiv\" data-toggle=\"tooltip\" title=\"{}\">{}{}</a>",
                html_escape(&url),
                html_escape(&entry.label),
                helper.icon(priority_icon(&entry.label)),
                entry.count
            )
        })
        .collect::<Vec<_>>()
        .join(" - ")
}
