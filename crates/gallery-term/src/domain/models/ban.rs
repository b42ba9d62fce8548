#[cfg(test)]
#[path = "ban_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::Artwork;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum BanKind {
    Artist,
    Origin,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BanRule {
    pub kind: BanKind,
    pub value: String,
}

impl BanRule {
    pub fn new(kind: BanKind, value: &str) -> BanRule {
        return BanRule {
            kind,
            value: value.to_string(),
        };
    }

    /// Exact, case-sensitive comparison against the matching attribute.
    pub fn matches(&self, artwork: &Artwork) -> bool {
        return artwork.attribute(self.kind) == Some(self.value.as_str());
    }
}

/// Ordered ban rules, unique by `(kind, value)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanList {
    rules: Vec<BanRule>,
}

impl BanList {
    /// Appends the rule unless `value` is blank or the pair is already banned.
    /// Returns whether the list changed.
    pub fn add(&mut self, kind: BanKind, value: &str) -> bool {
        if value.trim().is_empty() || self.contains(kind, value) {
            return false;
        }

        self.rules.push(BanRule::new(kind, value));
        return true;
    }

    pub fn remove(&mut self, kind: BanKind, value: &str) -> bool {
        let before = self.rules.len();
        self.rules
            .retain(|rule| !(rule.kind == kind && rule.value == value));
        return self.rules.len() != before;
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn contains(&self, kind: BanKind, value: &str) -> bool {
        return self
            .rules
            .iter()
            .any(|rule| rule.kind == kind && rule.value == value);
    }

    pub fn matches(&self, artwork: &Artwork) -> bool {
        return self.rules.iter().any(|rule| rule.matches(artwork));
    }

    pub fn get(&self, index: usize) -> Option<&BanRule> {
        return self.rules.get(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &BanRule> {
        return self.rules.iter();
    }

    pub fn len(&self) -> usize {
        return self.rules.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.rules.is_empty();
    }
}
