use serde::Serialize;

use crate::i18n::Messages;
use crate::jql::IssueFilter;
use crate::render::{html_escape, RenderHelper};

use super::aggregate::{AggregationResult, Bucket};

/// Slice colours, by offset. The last one is for the "other" bucket.
pub const SLICE_COLORS: [&str; 5] = ["#478EC7", "#EA632B", "#205081", "#D04437", "#A7A7A7"];

pub const COMPACT_SIZE: &str = "20px";
pub const ZOOMED_SIZE: &str = "64px";

/// Static options of the pie widget.
#[derive(Debug, Clone, Serialize)]
pub struct PieStyle {
    pub slice_colors: [&'static str; 5],
    pub offset: i32,
    pub compact_size: &'static str,
    pub zoomed_size: &'static str,
    pub border_width: u32,
    pub border_color: &'static str,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            slice_colors: SLICE_COLORS,
            offset: -90,
            compact_size: COMPACT_SIZE,
            zoomed_size: ZOOMED_SIZE,
            border_width: 2,
            border_color: "#ffffff",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub value: u64,
    pub label: String,
    pub statuses: Vec<String>,
    pub color: &'static str,
    pub percent: u32,
    pub tooltip: String,
    /// Issue navigator URL listing the unresolved issues of this slice.
    pub url: String,
}

/// Everything a generic pie chart widget needs to draw the status summary.
#[derive(Debug, Clone, Serialize)]
pub struct PiePayload {
    pub values: Vec<u64>,
    pub labels: Vec<String>,
    pub total: u64,
    pub slices: Vec<PieSlice>,
    pub style: PieStyle,
}

impl PiePayload {
    pub fn build(
        result: &AggregationResult,
        filter: &IssueFilter<'_>,
        messages: &Messages,
        helper: &dyn RenderHelper,
    ) -> Self {
        let total = result.total();
        let slices: Vec<PieSlice> = result
            .buckets()
            .enumerate()
            .map(|(offset, bucket)| slice(offset, bucket, total, filter, messages, helper))
            .collect();

        Self {
            values: slices.iter().map(|s| s.value).collect(),
            labels: slices.iter().map(|s| s.label.clone()).collect(),
            total,
            slices,
            style: PieStyle::default(),
        }
    }

    pub fn tooltip(&self, offset: usize) -> Option<&str> {
        self.slices.get(offset).map(|s| s.tooltip.as_str())
    }

    /// URL to open when a slice is clicked; `None` for a click outside the slices.
    pub fn click_url(&self, offset: usize) -> Option<&str> {
        self.slices.get(offset).map(|s| s.url.as_str())
    }
}

fn slice(
    offset: usize,
    bucket: Bucket<'_>,
    total: u64,
    filter: &IssueFilter<'_>,
    messages: &Messages,
    helper: &dyn RenderHelper,
) -> PieSlice {
    let color = SLICE_COLORS[offset % SLICE_COLORS.len()];
    let value = bucket.count();
    let label = bucket.label();
    let statuses = bucket.labels();
    let percent = if total == 0 {
        0
    } else {
        helper.round_percent(value as f64 / total as f64 * 100.0)
    };

    PieSlice {
        value,
        tooltip: messages.status_tooltip(color, &html_escape(&label), value, total, percent),
        url: filter.navigator_url(&filter.by_statuses(&statuses)),
        statuses: statuses.into_iter().map(str::to_string).collect(),
        label,
        color,
        percent,
    }
}
