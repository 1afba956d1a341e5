//! Visual theme and styling.

use console::Style;

/// Terminal colors for the dependency report.
#[derive(Debug, Clone)]
pub struct DotTheme {
    /// Style for `OK` tags (green).
    pub ok: Style,
    /// Style for missing tags (red).
    pub missing: Style,
    /// Style for install hints (yellow).
    pub hint: Style,
    /// Style for skipped checks (dim).
    pub dim: Style,
}

impl Default for DotTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DotTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            missing: Style::new().red(),
            hint: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            missing: Style::new(),
            hint: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// `<label> OK`
    pub fn format_ok(&self, label: &str) -> String {
        format!("{} {}", label, self.ok.apply_to("OK"))
    }

    /// `<label> <reason>` with the reason in red.
    pub fn format_missing(&self, label: &str, reason: &str) -> String {
        format!("{} {}", label, self.missing.apply_to(reason))
    }

    /// A whole hint line in yellow.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }

    /// `<label> <reason>` with the reason dimmed.
    pub fn format_skipped(&self, label: &str, reason: &str) -> String {
        format!("{} {}", label, self.dim.apply_to(reason))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
