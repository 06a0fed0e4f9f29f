use chrono::NaiveDate;
use jirabt_common::error::JiraBtResult;
use serde::Serialize;

use crate::export::{export_links, render_export_group, ExportLink};
use crate::i18n::Messages;
use crate::jql::IssueFilter;
use crate::priorities::render_priorities;
use crate::render::{html_escape, CarouselItem, RenderHelper, ServiceLink};
use crate::status::{aggregate_with_policy, AggregationPolicy, PiePayload};
use crate::subscription::Subscription;

/// Placeholder element the host replaces with the pie chart.
pub const PIE_PLACEHOLDER: &str = "<span class=\"jira-pie\"></span>";

/// Carousel slide shown first in the details view (the priorities).
const DETAILS_ACTIVE_SLIDE: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct DetailsFeatures {
    pub placeholder: &'static str,
    pub pie: PiePayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct Details {
    pub key: String,
    pub features: DetailsFeatures,
}

/// Renders the JIRA parts of a subscription row.
pub struct JiraWidgets<H: RenderHelper> {
    helper: H,
    rest_path: String,
    policy: AggregationPolicy,
}

impl<H: RenderHelper> JiraWidgets<H> {
    pub fn new(helper: H, rest_path: impl Into<String>) -> Self {
        Self {
            helper,
            rest_path: rest_path.into(),
            policy: AggregationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn helper(&self) -> &H {
        &self.helper
    }

    /// Home link, export menu, import dialog link and help link.
    pub fn render_features(
        &self,
        subscription: &Subscription,
        messages: &Messages,
        today: NaiveDate,
    ) -> JiraBtResult<String> {
        let filter = filter(subscription)?;
        let mut out = self.helper.service_link(&ServiceLink {
            icon: "home",
            href: &filter.browse_url(),
            tooltip: Some(messages.url_pkey),
            attributes: " target=\"_blank\"",
            ..ServiceLink::default()
        });

        let links = self.export_links(subscription, messages, today)?;
        out.push_str(&render_export_group(&links, messages, &self.helper));

        out.push_str(&self.helper.service_link(&ServiceLink {
            icon: "upload",
            href: "#importPopup",
            tooltip: Some(messages.import),
            attributes: " class=\"dropdown-toggle\" role=\"button\" data-toggle=\"modal\"",
            ..ServiceLink::default()
        }));

        out.push_str(
            &self
                .helper
                .service_help_link(subscription.help_url(), messages.help),
        );
        Ok(out)
    }

    pub fn export_links(
        &self,
        subscription: &Subscription,
        messages: &Messages,
        today: NaiveDate,
    ) -> JiraBtResult<Vec<ExportLink>> {
        export_links(&self.rest_path, subscription, today, messages)
    }

    pub fn render_key(&self, subscription: &Subscription, messages: &Messages) -> JiraBtResult<String> {
        Ok(self.helper.key(messages.pkey, subscription.pkey()?))
    }

    /// Carousel of the key, the project description and the priorities.
    pub fn render_details_key(
        &self,
        subscription: &Subscription,
        messages: &Messages,
    ) -> JiraBtResult<String> {
        let filter = filter(subscription)?;
        let project = subscription.project();
        let items = [
            CarouselItem::new(messages.pkey, self.render_key(subscription, messages)?),
            CarouselItem::new(
                messages.name,
                html_escape(project.description.as_deref().unwrap_or_default()),
            ),
            CarouselItem::new(
                messages.priorities,
                render_priorities(&project.priorities, &filter, &self.helper),
            ),
        ];
        Ok(self.helper.carousel(&items, DETAILS_ACTIVE_SLIDE))
    }

    pub fn pie(&self, subscription: &Subscription, messages: &Messages) -> JiraBtResult<PiePayload> {
        let filter = filter(subscription)?;
        let statuses = &subscription.project().statuses;
        let result = aggregate_with_policy(statuses.iter().cloned(), self.policy);
        tracing::debug!(
            subscription = subscription.id,
            statuses = statuses.len(),
            buckets = result.len(),
            "status pie aggregated"
        );
        Ok(PiePayload::build(&result, &filter, messages, &self.helper))
    }

    pub fn render_details_features(
        &self,
        subscription: &Subscription,
        messages: &Messages,
    ) -> JiraBtResult<DetailsFeatures> {
        Ok(DetailsFeatures {
            placeholder: PIE_PLACEHOLDER,
            pie: self.pie(subscription, messages)?,
        })
    }

    pub fn render_details(&self, subscription: &Subscription, messages: &Messages) -> JiraBtResult<Details> {
        Ok(Details {
            key: self.render_details_key(subscription, messages)?,
            features: self.render_details_features(subscription, messages)?,
        })
    }
}

fn filter(subscription: &Subscription) -> JiraBtResult<IssueFilter<'_>> {
    Ok(IssueFilter::new(subscription.jira_url()?, subscription.pkey()?))
}
