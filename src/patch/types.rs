//! Patch set definitions

use std::fmt;

use serde_json::{
    Map,
    Value,
};

/// Name of the top-level section that a patch replaces wholesale.
pub const PARENT_SECTION: &str = "parent";

/// Locales covered by the patch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// English
    En,
    /// Russian
    Ru,
    /// Uzbek (Latin script)
    Uz,
}

impl Locale {
    /// All locales in table order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::Uz];

    /// Language code, also the stem of the locale file.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uz => "uz",
        }
    }

    /// File name of the locale document (e.g. `ru.json`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single `document[section][key] = value` overwrite.
///
/// The section must already exist in the document; it is never created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOverride {
    pub section: &'static str,
    pub key: &'static str,
    pub value: &'static str,
}

/// Literal patch applied to one locale document.
#[derive(Debug, Clone, Copy)]
pub struct PatchSet {
    pub locale: Locale,

    /// Replacement for the whole `parent` section, in output order.
    pub parent: &'static [(&'static str, &'static str)],

    /// Key overwrites inside existing sections, applied after `parent`.
    pub overrides: &'static [SectionOverride],

    /// Console line printed once the document has been written.
    pub confirmation: &'static str,
}

impl PatchSet {
    /// Build the `parent` section as a JSON object.
    #[must_use]
    pub fn parent_section(&self) -> Map<String, Value> {
        self.parent
            .iter()
            .map(|(key, value)| ((*key).to_string(), Value::String((*value).to_string())))
            .collect()
    }

    /// Keys of the `parent` section in order.
    pub fn parent_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parent.iter().map(|(key, _)| *key)
    }

    /// Override targets as `(section, key)` pairs.
    pub fn override_targets(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.overrides.iter().map(|o| (o.section, o.key))
    }
}
