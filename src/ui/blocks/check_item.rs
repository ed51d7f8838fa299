use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
    /// Not applicable (absent optional file)
    Skipped,
}

impl CheckStatus {
    fn icon(self) -> Icon {
        match self {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
            CheckStatus::Skipped => Icon::Pending,
        }
    }
}

/// One indented result row: icon, label and an optional trailing note
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub label: String,
    pub status: CheckStatus,
    pub note: Option<String>,
}

impl CheckItem {
    pub fn new(status: CheckStatus, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status,
            note: None,
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn render(&self, indent: usize, supports_color: bool, supports_unicode: bool) -> String {
        let icon = self.status.icon().colored(supports_color, supports_unicode);
        let mut out = format!("{}{} {}", " ".repeat(indent), icon, self.label);

        if let Some(note) = &self.note {
            let note = match self.status {
                CheckStatus::Pass => ColoredText::dim(note.as_str()),
                CheckStatus::Skipped => ColoredText::dim(note.as_str()),
                CheckStatus::Warning => ColoredText::warning(note.as_str()),
                CheckStatus::Error => ColoredText::error(note.as_str()),
            };
            out.push_str(&format!(" ({})", note.render(supports_color)));
        }

        out.push('\n');
        out
    }
}
