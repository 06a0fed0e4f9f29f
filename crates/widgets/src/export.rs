use chrono::NaiveDate;
use jirabt_common::error::JiraBtResult;
use serde::Serialize;

use crate::i18n::Messages;
use crate::render::{html_escape, RenderHelper, ServiceLink};
use crate::subscription::Subscription;

/// Export files produced by the host for a JIRA subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    SlaShortCsv,
    SlaFullCsv,
    SimpleCsv,
    StatusCsv,
    SlaXls,
}

impl ExportKind {
    /// Menu order.
    pub const ALL: [ExportKind; 5] = [
        ExportKind::SlaShortCsv,
        ExportKind::SlaFullCsv,
        ExportKind::SimpleCsv,
        ExportKind::StatusCsv,
        ExportKind::SlaXls,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            ExportKind::SlaShortCsv => "-short.csv",
            ExportKind::SlaFullCsv => "-full.csv",
            ExportKind::SimpleCsv => "-simple.csv",
            ExportKind::StatusCsv => "-status.csv",
            ExportKind::SlaXls => ".xml",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ExportKind::SlaXls => "file-excel-o menu-icon",
            _ => "file-text-o menu-icon",
        }
    }

    pub fn title(self, messages: &Messages) -> &'static str {
        match self {
            ExportKind::SlaShortCsv => messages.sla_csv,
            ExportKind::SlaFullCsv => messages.sla_csv_full,
            ExportKind::SimpleCsv => messages.csv,
            ExportKind::StatusCsv => messages.sla_csv_status,
            ExportKind::SlaXls => messages.sla_xls,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportLink {
    pub kind: ExportKind,
    pub file_name: String,
    pub href: String,
    pub title: &'static str,
    pub icon: &'static str,
}

/// `{pkey}-{subscription}-{YYYY-MM-DD}`, shared by all the export files.
pub fn file_stem(subscription: &Subscription, date: NaiveDate) -> JiraBtResult<String> {
    Ok(format!(
        "{}-{}-{}",
        subscription.pkey()?,
        subscription.id,
        date.format("%Y-%m-%d")
    ))
}

/// Download links of the export menu, in menu order.
pub fn export_links(
    rest_path: &str,
    subscription: &Subscription,
    date: NaiveDate,
    messages: &Messages,
) -> JiraBtResult<Vec<ExportLink>> {
    let stem = file_stem(subscription, date)?;
    Ok(ExportKind::ALL
        .into_iter()
        .map(|kind| {
            let file_name = format!("{stem}{}", kind.suffix());
            ExportLink {
                kind,
                href: format!("{rest_path}service/bt/jira/{}/{file_name}", subscription.id),
                file_name,
                title: kind.title(messages),
                icon: kind.icon(),
            }
        })
        .collect())
}

/// Dropdown button holding the download links.
pub fn render_export_group(
    links: &[ExportLink],
    messages: &Messages,
    helper: &dyn RenderHelper,
) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            let anchor = helper.service_link(&ServiceLink {
                icon: link.icon,
                href: &link.href,
                text: Some(link.title),
                attributes: " download",
                ..ServiceLink::default()
            });
            format!("<li>{anchor}</li>")
        })
        .collect();
    format!(
        "<div class=\"btn-group btn-link feature\" data-container=\"body\" data-toggle=\"tooltip\" title=\"{}\"><i class=\"fa fa-download\" data-toggle=\"dropdown\"></i><ul class=\"dropdown-menu dropdown-menu-right\">{items}</ul></div>",
        html_escape(messages.export)
    )
}
