//! Keyword classification of free-text labels.
//!
//! 1. every rule with an include keyword found in the label is a candidate;
//! 2. fallbacks of the matching rules are collected in table order;
//! 3. every key whose rule has an exclude keyword found in the label is
//!    removed from the candidates, whichever rule matched it;
//! 4. the first remaining candidate (table order) wins;
//! 5. otherwise the first fallback naming a table key, otherwise the table's
//!    first key.

use super::rule::RuleTable;
use crate::error::{AutozoneError, Result};

/// How a classification was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyOutcome {
    Matched(String),
    Fallback(String),
    /// Nothing matched, the table's first key was used.
    Default(String),
}

impl ClassifyOutcome {
    pub fn key(&self) -> &str {
        match self {
            Self::Matched(k) | Self::Fallback(k) | Self::Default(k) => k,
        }
    }

    pub fn into_key(self) -> String {
        match self {
            Self::Matched(k) | Self::Fallback(k) | Self::Default(k) => k,
        }
    }

    /// Whether a rule of the table, or one of its fallbacks, fired.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::Default(_))
    }
}

pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Classifies `label` and reports which step produced the key.
pub fn classify_outcome<A>(label: &str, table: &RuleTable<A>) -> Result<ClassifyOutcome> {
    let Some(first_key) = table.first_key() else {
        return Err(AutozoneError::Classification(
            "classification table is empty".to_string(),
        ));
    };
    let label = normalize_label(label);

    let matched: Vec<_> = table
        .rules()
        .iter()
        .filter(|r| r.is_included_by(&label))
        .collect();
    // Fallbacks come from the rules that matched, not the first rule of a key.
    let fallbacks: Vec<&str> = matched.iter().filter_map(|r| r.fallback()).collect();
    let mut candidates: Vec<&str> = matched.iter().map(|r| r.key.as_str()).collect();

    let excluded: Vec<&str> = table
        .rules()
        .iter()
        .filter(|r| r.is_excluded_by(&label))
        .map(|r| r.key.as_str())
        .collect();
    candidates.retain(|c| !excluded.contains(c));

    if let Some(key) = candidates.first() {
        return Ok(ClassifyOutcome::Matched(key.to_string()));
    }
    if let Some(key) = fallbacks.iter().find(|f| table.contains_key(f)) {
        return Ok(ClassifyOutcome::Fallback(key.to_string()));
    }
    Ok(ClassifyOutcome::Default(first_key.to_string()))
}

/// Classifies `label` against `table`. Fails only on an empty table.
pub fn classify<A>(label: &str, table: &RuleTable<A>) -> Result<String> {
    classify_outcome(label, table).map(ClassifyOutcome::into_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rule::ClassificationRule;

    fn care_health() -> RuleTable<()> {
        RuleTable::new(vec![
            ClassificationRule::new("care", &["care"], &[], None, ()),
            ClassificationRule::new(
                "health",
                &["care"],
                &["health", "multi", "residential"],
                None,
                (),
            ),
        ])
    }

    #[test]
    fn test_exclusion_precedence() {
        let table = care_health();
        assert_eq!(classify("Long-term care", &table).unwrap(), "care");
        let clinic = classify("Health-care clinic", &table).unwrap();
        assert_ne!(clinic, "health");
        assert_eq!(clinic, "care");
    }

    #[test]
    fn test_exclusion_is_global_across_duplicate_keys() {
        // The second "care" rule never matches by include, but its exclude
        // list still strikes the key matched by the first rule.
        let table = RuleTable::new(vec![
            ClassificationRule::new("care", &["care"], &[], None, ()),
            ClassificationRule::new("care", &["nursing"], &["clinic"], None, ()),
            ClassificationRule::new("health", &["clinic"], &[], None, ()),
        ]);
        assert_eq!(classify("care clinic", &table).unwrap(), "health");
    }

    #[test]
    fn test_fallback_comes_from_matching_duplicate() {
        let table = RuleTable::new(vec![
            ClassificationRule::new("lobby", &["lobby"], &[], None, ()),
            ClassificationRule::new("care", &["nursing"], &[], None, ()),
            ClassificationRule::new("care", &["care"], &["clinic"], Some("office"), ()),
            ClassificationRule::new("office", &["office"], &[], None, ()),
        ]);
        assert_eq!(
            classify_outcome("care clinic", &table).unwrap(),
            ClassifyOutcome::Fallback("office".to_string())
        );
    }

    #[test]
    fn test_table_order_breaks_ties() {
        let table = RuleTable::new(vec![
            ClassificationRule::new("school", &["school"], &[], None, ()),
            ClassificationRule::new("office", &["office"], &[], None, ()),
        ]);
        // "office" appears first in the label but "school" first in the table.
        assert_eq!(classify("office of the school", &table).unwrap(), "school");
    }

    #[test]
    fn test_fallback_used_when_all_candidates_excluded() {
        let table = RuleTable::new(vec![
            ClassificationRule::new("office", &["office"], &[], None, ()),
            ClassificationRule::new("bogus", &["x"], &[], None, ()),
            ClassificationRule::new("retail", &["store"], &["dept"], Some("nowhere"), ()),
            ClassificationRule::new("warehouse", &["depot"], &["dept"], Some("office"), ()),
        ]);
        let outcome = classify_outcome("dept store depot", &table).unwrap();
        // "nowhere" is not a table key, so the second fallback wins.
        assert_eq!(outcome, ClassifyOutcome::Fallback("office".to_string()));
        assert!(outcome.is_hit());
    }

    #[test]
    fn test_default_is_first_key() {
        let table = care_health();
        let outcome = classify_outcome("Parking garage", &table).unwrap();
        assert_eq!(outcome, ClassifyOutcome::Default("care".to_string()));
        assert!(!outcome.is_hit());
    }

    #[test]
    fn test_empty_table_fails() {
        let table: RuleTable<()> = RuleTable::new(vec![]);
        assert!(matches!(
            classify("office", &table),
            Err(AutozoneError::Classification(_))
        ));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let table = care_health();
        let labels = ["Long-term care", "Health-care clinic", "", "CARE"];
        for label in labels {
            assert_eq!(
                classify(label, &table).unwrap(),
                classify(label, &table).unwrap()
            );
        }
    }
}
