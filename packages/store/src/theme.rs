//! Display theme preference, persisted under the `theme` key.

use crate::substrate::{keys, Substrate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Also the CSS class put on the app container.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stored preference; dark when unset or unrecognised.
    pub fn load(substrate: &impl Substrate) -> Self {
        substrate
            .get(keys::THEME)
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    pub fn save(self, substrate: &impl Substrate) {
        substrate.set(keys::THEME, self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_default_is_dark() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Dark);
        store.set(keys::THEME, "sepia");
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_and_save() {
        let store = MemoryStore::new();
        let theme = Theme::load(&store).toggled();
        theme.save(&store);
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Theme::Light);
        assert_eq!(theme.toggled(), Theme::Dark);
    }
}
