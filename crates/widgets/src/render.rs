//! Host rendering helpers injected into the JIRA widgets.

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Round a percentage half-up to an integer. Negative or NaN input gives 0.
pub fn round_percent(percent: f64) -> u32 {
    if percent.is_nan() || percent <= 0.0 {
        return 0;
    }
    (percent + 0.5).floor() as u32
}

/// A link to a feature of the subscribed service.
#[derive(Debug, Clone, Default)]
pub struct ServiceLink<'a> {
    pub icon: &'a str,
    pub href: &'a str,
    /// Already localized tooltip.
    pub tooltip: Option<&'a str>,
    /// Already localized text displayed next to the icon.
    pub text: Option<&'a str>,
    /// Raw extra attributes, e.g. ` download` or ` target="_blank"`.
    pub attributes: &'a str,
}

/// One `[name, value]` pair of a details carousel. `value` is HTML.
#[derive(Debug, Clone)]
pub struct CarouselItem {
    pub name: String,
    pub value: String,
}

impl CarouselItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Rendering capabilities provided by the host application.
pub trait RenderHelper: Send + Sync {
    fn icon(&self, icon: &str) -> String;

    fn service_link(&self, link: &ServiceLink<'_>) -> String;

    /// Help link, empty when the subscription has no help URL.
    fn service_help_link(&self, help_url: Option<&str>, title: &str) -> String;

    fn key(&self, title: &str, value: &str) -> String;

    fn carousel(&self, items: &[CarouselItem], active: usize) -> String;

    fn round_percent(&self, percent: f64) -> u32 {
        round_percent(percent)
    }
}

/// Bootstrap / Font Awesome flavoured markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderHelper;

impl RenderHelper for DefaultRenderHelper {
    fn icon(&self, icon: &str) -> String {
        format!("<i class=\"fa fa-{}\"></i>", html_escape(icon))
    }

    fn service_link(&self, link: &ServiceLink<'_>) -> String {
        let tooltip = link
            .tooltip
            .map(|t| format!(" data-toggle=\"tooltip\" title=\"{}\"", html_escape(t)))
            .unwrap_or_default();
        let text = link
            .text
            .map(|t| format!(" {}", html_escape(t)))
            .unwrap_or_default();
        format!(
            "<a href=\"{}\"{}{}>{}{}</a>",
            html_escape(link.href),
            link.attributes,
            tooltip,
            self.icon(link.icon),
            text
        )
    }

    fn service_help_link(&self, help_url: Option<&str>, title: &str) -> String {
        match help_url {
            Some(url) if !url.is_empty() => self.service_link(&ServiceLink {
                icon: "question-circle-o",
                href: url,
                tooltip: Some(title),
                attributes: " target=\"_blank\"",
                ..ServiceLink::default()
            }),
            _ => String::new(),
        }
    }

    fn key(&self, title: &str, value: &str) -> String {
        format!(
            "<span data-toggle=\"tooltip\" title=\"{}\" class=\"text-muted\">{}</span>",
            html_escape(title),
            html_escape(value)
        )
    }

    fn carousel(&self, items: &[CarouselItem], active: usize) -> String {
        let active = if items.is_empty() { 0 } else { active.min(items.len() - 1) };
        let mut out = String::from("<div class=\"carousel slide\" data-interval=\"false\"><div class=\"carousel-inner\">");
        for (index, item) in items.iter().enumerate() {
            let class = if index == active { "item active" } else { "item" };
            out.push_str(&format!(
                "<div class=\"{class}\"><span class=\"carousel-name\">{}</span> {}</div>",
                html_escape(&item.name),
                item.value
            ));
        }
        out.push_str("</div></div>");
        out
    }
}
