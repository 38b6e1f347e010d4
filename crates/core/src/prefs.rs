/// Light/dark UI theme, the only persisted preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Canonical storage text (`light` / `dark`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses persisted text, falling back to `Light` on anything unknown.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// App-wide user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    theme: Theme,
}

impl Preferences {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Rehydrates preferences from persisted storage.
    #[must_use]
    pub fn from_persisted(theme_text: &str) -> Self {
        Self {
            theme: Theme::from_persisted(theme_text),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }
}
