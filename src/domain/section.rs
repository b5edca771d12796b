// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered sections of key/value pairs.

use crate::domain::RawValue;

/// Name of the bootstrap section every store carries.
///
/// Keys that appear before any section header live here. The section never
/// reaches a generated sample.
pub const MAIN_SECTION: &str = "main";

/// How keys are compared and stored.
///
/// The setting is fixed when a store is opened and is carried over from a
/// source store to the sample created from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    /// Keys keep the case they were written with
    #[default]
    Sensitive,
    /// Keys are lower-cased
    Insensitive,
}

impl CaseSensitivity {
    /// Builds the setting from a "retain case" flag.
    pub fn from_retain_case(retain_case: bool) -> Self {
        if retain_case {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }

    /// Applies the setting to a key.
    pub fn normalize(&self, key: &str) -> String {
        match self {
            CaseSensitivity::Sensitive => key.to_string(),
            CaseSensitivity::Insensitive => key.to_lowercase(),
        }
    }
}

/// A named, ordered group of unique keys.
///
/// # Examples
///
/// ```
/// use samplify::domain::{RawValue, Section};
///
/// let mut section = Section::new("db");
/// section.set("port", RawValue::from(5432));
/// section.set("port", RawValue::from(5433));
/// assert_eq!(section.len(), 1);
/// assert_eq!(section.get("port"), Some(&RawValue::from(5433)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    name: String,
    entries: Vec<(String, RawValue)>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets a key, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: RawValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a key.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the entries as owned pairs.
    pub fn to_items(&self) -> Vec<(String, RawValue)> {
        self.entries.clone()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the section has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds a section by name, creating it at the end if needed.
pub(crate) fn section_mut<'a>(sections: &'a mut Vec<Section>, name: &str) -> &'a mut Section {
    match sections.iter().position(|s| s.name() == name) {
        Some(index) => &mut sections[index],
        None => {
            sections.push(Section::new(name));
            let last = sections.len() - 1;
            &mut sections[last]
        }
    }
}
