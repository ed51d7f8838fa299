use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Partial,
    Failure,
}

/// Boxed end-of-command summary
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    outcome: Outcome,
    stats: Vec<(String, usize)>,
    errors: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            title: title.into(),
            outcome,
            stats: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Success)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Partial)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Failure)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = match self.outcome {
            Outcome::Success => (
                PanelStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            ),
            Outcome::Partial => (
                PanelStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            ),
            Outcome::Failure => (
                PanelStyle::Error,
                Icon::Error,
                ColoredText::error(self.title.as_str()),
            ),
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut panel = Panel::with_title(header).style(style);

        if !self.stats.is_empty() {
            panel.add_empty();
            for (label, count) in &self.stats {
                panel.add_line(format!("{} {}", count, label));
            }
        }

        let rows = [(&self.errors, Icon::Error), (&self.warnings, Icon::Warning)];
        for (messages, icon) in rows {
            if messages.is_empty() {
                continue;
            }
            panel.add_empty();
            for message in messages {
                panel.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    message
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            panel.add_empty();
            panel.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        panel.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success_icon_in_title() {
        let mut summary = ResultSummary::success("Inventory complete");
        summary.add_stat("required files present", 47);

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[OK] Inventory complete"));
        assert!(rendered.contains("47 required files present"));
    }

    #[test]
    fn failure_lists_errors_before_warnings() {
        let mut summary = ResultSummary::failure("Audit aborted");
        summary.add_warning("w");
        summary.add_error("e");

        let rendered = summary.render(false, false);
        let e = rendered.find("[FAIL] e").unwrap();
        let w = rendered.find("[WARN] w").unwrap();
        assert!(e < w);
    }
}
