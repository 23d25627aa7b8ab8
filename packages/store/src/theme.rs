//! Colour scheme preference, persisted next to the session.

use crate::storage::KeyValueStore;

/// Storage key holding the chosen theme (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "akram_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Stored preference; missing or unknown values fall back to dark.
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        storage
            .get(THEME_KEY)
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn save(self, storage: &dyn KeyValueStore) {
        storage.set(THEME_KEY, self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, TOKEN_KEY};
    use crate::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_defaults_to_dark() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::load(&storage), Theme::Dark);

        storage.set(THEME_KEY, "sepia");
        assert_eq!(Theme::load(&storage), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = MemoryStorage::new();
        let next = Theme::load(&storage).toggled();
        next.save(&storage);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(Theme::load(&storage), Theme::Light);

        Theme::Light.toggled().save(&storage);
        assert_eq!(Theme::load(&storage), Theme::Dark);
    }

    #[test]
    fn test_logout_keeps_theme() {
        let storage = MemoryStorage::new();
        Theme::Light.save(&storage);
        storage.set(TOKEN_KEY, "tok");

        let mut session = SessionStore::new(Arc::new(storage.clone()));
        session.logout();

        assert!(storage.get(TOKEN_KEY).is_none());
        assert_eq!(Theme::load(&storage), Theme::Light);
    }
}
