/// localStorage key holding `"true"` / `"false"`.
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Class toggled on `<html>` for dark styles.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// A stored preference wins; without one, follow the system setting.
    pub fn resolve(stored: Option<bool>, prefers_dark: bool) -> Self {
        Self::from_dark(stored.unwrap_or(prefers_dark))
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(Theme::resolve(Some(false), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(true), false), Theme::Dark);
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(!Theme::default().is_dark());
    }
}
