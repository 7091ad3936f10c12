//! Classification rules and the tables holding them.

use serde::{Deserialize, Serialize};

/// One entry of a classification table.
///
/// Keywords are lower-cased on construction so matching against a normalized
/// label is a plain substring test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationRule<A> {
    pub key: String,
    includes: Vec<String>,
    excludes: Vec<String>,
    fallback: Option<String>,
    pub attributes: A,
}

impl<A> ClassificationRule<A> {
    pub fn new(
        key: &str,
        includes: &[&str],
        excludes: &[&str],
        fallback: Option<&str>,
        attributes: A,
    ) -> Self {
        Self::from_owned(
            key.to_string(),
            includes.iter().map(|s| s.to_string()).collect(),
            excludes.iter().map(|s| s.to_string()).collect(),
            fallback.map(str::to_string),
            attributes,
        )
    }

    pub(crate) fn from_owned(
        key: String,
        includes: Vec<String>,
        excludes: Vec<String>,
        fallback: Option<String>,
        attributes: A,
    ) -> Self {
        let normalize = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            key,
            includes: normalize(includes),
            excludes: normalize(excludes),
            fallback: fallback.filter(|f| !f.trim().is_empty()),
            attributes,
        }
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// `label` must already be normalized.
    pub(crate) fn is_included_by(&self, label: &str) -> bool {
        self.includes.iter().any(|k| label.contains(k.as_str()))
    }

    /// `label` must already be normalized.
    pub(crate) fn is_excluded_by(&self, label: &str) -> bool {
        self.excludes.iter().any(|k| label.contains(k.as_str()))
    }
}

/// Ordered, immutable rule table. Table order is the classification tie-break.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable<A> {
    rules: Vec<ClassificationRule<A>>,
}

impl<A> RuleTable<A> {
    pub fn new(rules: Vec<ClassificationRule<A>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClassificationRule<A>] {
        &self.rules
    }

    /// First rule carrying `key`.
    pub fn get(&self, key: &str) -> Option<&ClassificationRule<A>> {
        self.rules.iter().find(|r| r.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.rules.first().map(|r| r.key.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Attributes of a building-level activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingAttributes {
    /// Design live load in kPa.
    pub liveload_kpa: f64,
    /// Building category, e.g. "commercial" or "institutional".
    pub category: String,
}

/// Attributes of a space-level `"<activity>::<buildingtype>"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceAttributes {
    pub activity: String,
    pub building_type: String,
}

impl SpaceAttributes {
    /// Splits a namespaced key. A key without `::` belongs to the "common" bucket.
    pub fn from_key(key: &str) -> Self {
        match key.split_once("::") {
            Some((activity, building_type)) => Self {
                activity: activity.to_string(),
                building_type: building_type.to_string(),
            },
            None => Self {
                activity: key.to_string(),
                building_type: "common".to_string(),
            },
        }
    }
}
