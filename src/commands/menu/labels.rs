use crate::core::constants::FALLBACK_LABEL;
use crate::core::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_TAG_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("main", "Information"),
        ("jadibot", "Sub Bot"),
        ("downloader", "Downloads"),
        ("game", "Games"),
        ("gacha", "Gacha RPG"),
        ("rg", "Registration"),
        ("group", "Groups"),
        ("nable", "Features"),
        ("nsfw", "NSFW +18"),
        ("buscadores", "Search Tools"),
        ("sticker", "Stickers"),
        ("econ", "Economy"),
        ("convertidor", "Converters"),
        ("logo", "Logo Generator"),
        ("tools", "Tools"),
        ("randow", "Random"),
        ("efec", "Audio Effects"),
        ("owner", "Creator"),
    ])
});

/// Primary tag to section title. Lookups never fail.
#[derive(Debug, Clone)]
pub struct CategoryLabelMap {
    labels: HashMap<String, String>,
    fallback: String,
}

impl CategoryLabelMap {
    /// No labels at all; every tag resolves to `fallback`.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            labels: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Built-in labels, then `[tags]` overrides, with the configured fallback.
    pub fn from_config(config: &Config) -> Self {
        let mut map = Self::default();
        map.fallback = config.menu.fallback_label.clone();
        map.extend(config.tag_labels.clone());
        map
    }

    pub fn insert(&mut self, tag: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.labels.insert(tag.into(), label.into());
        self
    }

    pub fn resolve(&self, tag: &str) -> &str {
        self.labels
            .get(tag)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for CategoryLabelMap {
    fn default() -> Self {
        Self {
            labels: DEFAULT_TAG_LABELS
                .iter()
                .map(|(tag, label)| (tag.to_string(), label.to_string()))
                .collect(),
            fallback: FALLBACK_LABEL.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for CategoryLabelMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (tag, label) in iter {
            self.insert(tag, label);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryLabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::empty(FALLBACK_LABEL);
        map.extend(iter);
        map
    }
}
