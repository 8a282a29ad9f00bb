// ABOUTME: Insertion-ordered, deduplicated set of names (muscle groups, exercise names)
// ABOUTME: Gives generated labels and serialized output a stable iteration order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Deduplicated set of strings that iterates in first-insertion order
///
/// Membership tests are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl NameSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning `true` if it was not present yet
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_owned());
        self.order.push(name.to_owned());
        true
    }

    /// Insert every name of another set, keeping this set's order first
    pub fn union_with(&mut self, other: &Self) {
        for name in other.iter() {
            self.insert(name);
        }
    }

    /// Whether the set contains `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Whether the set contains every one of `names`
    #[must_use]
    pub fn contains_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.contains(name))
    }

    /// Whether the set contains at least one of `names`
    #[must_use]
    pub fn contains_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.contains(name))
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First inserted name
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for NameSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> Extend<&'a str> for NameSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<'a> IntoIterator for &'a NameSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.order
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl Serialize for NameSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.order)
    }
}

impl<'de> Deserialize<'de> for NameSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().map(String::as_str).collect())
    }
}
