use crate::domain::ClassificationResult;

use super::markup::Element;

const WARNING_ICON: &str = "M12 9V13M12 17H12.01M21 12C21 16.9706 16.9706 21 12 21C7.02944 21 3 16.9706 3 12C3 7.02944 7.02944 3 12 3C16.9706 3 21 7.02944 21 12Z";
const CHECK_ICON: &str = "M9 12L11 14L15 10M21 12C21 16.9706 16.9706 21 12 21C7.02944 21 3 16.9706 3 12C3 7.02944 7.02944 3 12 3C16.9706 3 21 7.02944 21 12Z";
const TEXT_BAR_CELLS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Spam,
    Ham,
    Error,
}

impl BadgeVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Ham => "ham",
            Self::Error => "error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spam => "SPAM DETECTED",
            Self::Ham => "LEGITIMATE EMAIL",
            Self::Error => "Error",
        }
    }

    fn emoji(self) -> Option<&'static str> {
        match self {
            Self::Spam => Some("🚨"),
            Self::Ham => Some("✅"),
            Self::Error => None,
        }
    }

    fn icon_path(self) -> &'static str {
        match self {
            Self::Ham => CHECK_ICON,
            Self::Spam | Self::Error => WARNING_ICON,
        }
    }

    fn display_label(self) -> String {
        match self.emoji() {
            Some(emoji) => format!("{} {}", emoji, self.label()),
            None => self.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceDisplay {
    /// `confidence * 100` rounded to one decimal, e.g. `"97.3"`.
    pub percent: String,
}

impl ConfidenceDisplay {
    pub fn from_score(confidence: f64) -> Self {
        Self {
            percent: format!("{:.1}", confidence * 100.0),
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percent)
    }

    fn text_bar(&self) -> String {
        let filled = self
            .percent
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .map(|p| ((p / 100.0) * TEXT_BAR_CELLS as f64).round())
            .map(|cells| cells.clamp(0.0, TEXT_BAR_CELLS as f64) as usize)
            .unwrap_or(0);
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(TEXT_BAR_CELLS - filled)
        )
    }
}

/// Everything the results container shows for one outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    pub badge: BadgeVariant,
    pub confidence: Option<ConfidenceDisplay>,
    pub heading: &'static str,
    pub message: String,
}

pub fn render_result(result: &ClassificationResult) -> ResultDisplay {
    if !(0.0..=1.0).contains(&result.confidence) {
        tracing::warn!(
            target: "render",
            confidence = result.confidence,
            "confidence outside [0, 1]; rendering as received"
        );
    }

    let confidence = ConfidenceDisplay::from_score(result.confidence);
    let (badge, heading, message) = if result.is_spam {
        (
            BadgeVariant::Spam,
            "Warning:",
            format!(
                "This email has been classified as spam with {} confidence. It may contain unwanted or malicious content. Exercise caution and avoid clicking any links or downloading attachments.",
                confidence.label()
            ),
        )
    } else {
        (
            BadgeVariant::Ham,
            "Safe:",
            format!(
                "This email appears to be legitimate with {} confidence. However, always verify the sender's identity and be cautious with sensitive information.",
                confidence.label()
            ),
        )
    };

    ResultDisplay {
        badge,
        confidence: Some(confidence),
        heading,
        message,
    }
}

pub fn render_error(message: &str) -> ResultDisplay {
    ResultDisplay {
        badge: BadgeVariant::Error,
        confidence: None,
        heading: "Error:",
        message: message.to_string(),
    }
}

impl ResultDisplay {
    pub fn to_markup(&self) -> Element {
        let badge = Element::new("div")
            .class(format!("result-badge {}", self.badge.class_name()))
            .child(badge_icon(self.badge.icon_path()))
            .child(Element::new("span").text(self.badge.display_label()));

        let mut root = Element::new("div").class("result-display").child(badge);

        if let Some(confidence) = &self.confidence {
            root = root.child(
                Element::new("div")
                    .class("confidence-section")
                    .child(
                        Element::new("p")
                            .class("confidence-label")
                            .text("Confidence Score"),
                    )
                    .child(
                        Element::new("div")
                            .class("confidence-bar-container")
                            .child(
                                Element::new("div")
                                    .class("confidence-bar")
                                    .attr("style", confidence.bar_style()),
                            ),
                    )
                    .child(
                        Element::new("p")
                            .class("confidence-value")
                            .text(confidence.label()),
                    ),
            );
        }

        root.child(
            Element::new("div").class("result-message").child(
                Element::new("p")
                    .child(Element::new("strong").text(self.heading))
                    .text(format!(" {}", self.message)),
            ),
        )
    }

    pub fn to_html(&self) -> String {
        self.to_markup().to_html()
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![self.badge.display_label()];
        if let Some(confidence) = &self.confidence {
            lines.push(format!(
                "Confidence Score: {} {}",
                confidence.label(),
                confidence.text_bar()
            ));
        }
        lines.push(format!("{} {}", self.heading, self.message));
        lines.join("\n")
    }
}

fn badge_icon(path: &'static str) -> Element {
    Element::new("svg")
        .class("badge-icon")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .child(
            Element::new("path")
                .attr("d", path)
                .attr("stroke", "currentColor")
                .attr("stroke-width", "2")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(is_spam: bool, confidence: f64) -> ClassificationResult {
        ClassificationResult {
            prediction: if is_spam { "spam" } else { "ham" }.into(),
            confidence,
            is_spam,
        }
    }

    #[test]
    fn spam_verdict_renders_spam_badge_and_bar() {
        let display = render_result(&verdict(true, 0.973));
        assert_eq!(display.badge, BadgeVariant::Spam);

        let markup = display.to_markup();
        let badge = markup.find_by_class("result-badge").unwrap();
        assert_eq!(badge.attr_value("class"), Some("result-badge spam"));
        assert_eq!(badge.text_content(), "🚨 SPAM DETECTED");
        assert_eq!(
            markup.find_by_class("confidence-bar").unwrap().attr_value("style"),
            Some("width: 97.3%")
        );
        assert_eq!(
            markup.find_by_class("confidence-value").unwrap().text_content(),
            "97.3%"
        );
        assert!(display.message.contains("Exercise caution"));
    }

    #[test]
    fn ham_verdict_renders_ham_badge() {
        let display = render_result(&verdict(false, 0.5));
        assert_eq!(display.badge, BadgeVariant::Ham);

        let markup = display.to_markup();
        assert!(markup.find_by_class("ham").is_some());
        assert!(markup.find_by_class("spam").is_none());
        assert_eq!(
            markup.find_by_class("confidence-value").unwrap().text_content(),
            "50.0%"
        );
        assert!(display.message.contains("verify the sender's identity"));
        assert_eq!(display.heading, "Safe:");
    }

    #[test]
    fn out_of_range_confidence_is_not_clamped() {
        let display = render_result(&verdict(true, 1.25));
        let confidence = display.confidence.unwrap();
        assert_eq!(confidence.label(), "125.0%");
        assert_eq!(confidence.bar_style(), "width: 125.0%");
    }

    #[test]
    fn error_display_escapes_backend_message() {
        let display = render_error("<img src=x onerror=alert(1)>");
        assert_eq!(display.badge, BadgeVariant::Error);
        assert!(display.confidence.is_none());

        let html = display.to_html();
        assert!(html.contains("result-badge error"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));

        let message = display
            .to_markup()
            .find_by_class("result-message")
            .unwrap()
            .text_content();
        assert_eq!(message, "Error: <img src=x onerror=alert(1)>");
    }

    #[test]
    fn text_rendering_summarizes_verdict() {
        let text = render_result(&verdict(true, 0.5)).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "🚨 SPAM DETECTED");
        assert_eq!(
            lines[1],
            "Confidence Score: 50.0% [##########----------]"
        );
        assert!(lines[2].starts_with("Warning: This email has been classified as spam"));
    }
}
