use auditpack::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render unknown-key warnings for stderr
pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!("Unknown config key '{}' in {}", w.key, location))
                .render(ui.color)
        ));

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json || warnings.is_empty() {
        return;
    }
    eprint!("{}", render_config_warnings(warnings, ui));
}
