use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Added,
    Audit,
    Bundle,
    Lock,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Added) => theme::icons::ADDED,
            (true, Icon::Audit) => theme::icons::AUDIT,
            (true, Icon::Bundle) => theme::icons::BUNDLE,
            (true, Icon::Lock) => theme::icons::LOCK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Added) => theme::icons_ascii::ADDED,
            (false, Icon::Audit) => theme::icons_ascii::AUDIT,
            (false, Icon::Bundle) => theme::icons_ascii::BUNDLE,
            (false, Icon::Lock) => theme::icons_ascii::LOCK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Added => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Audit | Icon::Bundle | Icon::Lock => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
