//! draw.io style descriptor parsing (`key=value;key=value;...`)

use std::collections::HashMap;

/// Lower-cased view of a style string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    entries: HashMap<String, String>,
}

impl Style {
    /// Look up a key. Keys are stored lower-cased, so the lookup is too.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    /// True when `key` is present with exactly `value` (lower-cased).
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a style string. Fragments without `=` are dropped; never fails.
pub fn parse_style(raw: &str) -> Style {
    let entries = raw
        .split(';')
        .filter_map(|part| part.split_once('='))
        .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_lowercase()))
        .collect();
    Style { entries }
}
