use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for menu output. Every field is a no-op style when color is off.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
    pub muted: Style,
    pub menu_key: Style,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        let pick = |styled: Style| if color { styled } else { Style::new() };
        Self {
            header: pick(Style::new().cyan().bold()),
            success: pick(Style::new().green().bold()),
            error: pick(Style::new().red().bold()),
            warn: pick(Style::new().yellow()),
            info: pick(Style::new().blue()),
            dim: pick(Style::new().dimmed()),
            muted: pick(Style::new().bright_black().italic()),
            menu_key: pick(Style::new().cyan()),
        }
    }

    /// Color only for an interactive stdout, and never when `NO_COLOR` is set.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && console::Term::stdout().is_term())
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
