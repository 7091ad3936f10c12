//! Building-level activity resolution.

use super::keyword::{ClassifyOutcome, classify_outcome};
use super::reference::ReferenceData;
use crate::error::{AutozoneError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Building activity used when nothing else applies.
pub const DEFAULT_ACTIVITY: &str = "office";

/// Bucket of space keys shared by all building types.
const COMMON_BUCKET: &str = "common";

/// Which source decided the building activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTier {
    /// Explicit override by the caller.
    Override,
    /// Building type stated in the model.
    StatedType,
    /// Floor area of the classified spaces.
    SpaceAreas,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingActivity {
    pub key: String,
    pub tier: ActivityTier,
    pub category: String,
    pub liveload_kpa: f64,
}

/// Building activity implied by a common-space activity.
pub fn common_activity_building(activity: &str) -> &'static str {
    match activity {
        "audience" | "classroom" | "teachinglab" => "school",
        "sales" | "laundry" | "pharmacy" => "retail",
        "dining" | "cuisine" => "restaurant",
        "rooms" => "hotel",
        "recreation" => "exercise",
        "cell" => "penitentiary",
        "storage" => "warehouse",
        "lounge" => "leisure",
        _ => DEFAULT_ACTIVITY,
    }
}

/// Resolves the building activity.
///
/// `spaces` yields `(space key, floor area)` for every counted space. The first
/// source that yields wins: a valid override, then the stated building type,
/// then the building type bucket holding the most floor area.
pub fn resolve_building_activity<'a>(
    override_key: Option<&str>,
    stated_type: Option<&str>,
    spaces: impl IntoIterator<Item = (&'a str, f64)>,
    reference: &ReferenceData,
) -> Result<BuildingActivity> {
    if reference.buildings.is_empty() {
        return Err(AutozoneError::Classification(
            "building type table is empty".to_string(),
        ));
    }

    if let Some(key) = override_key {
        if reference.buildings.contains_key(key) {
            debug!("Building activity {key} taken from override");
            return activity(key, ActivityTier::Override, reference);
        }
        warn!("Ignoring unknown building activity override {key}");
    }

    if let Some(label) = stated_type {
        match classify_outcome(label, &reference.buildings)? {
            ClassifyOutcome::Matched(key) | ClassifyOutcome::Fallback(key) => {
                debug!("Building activity {key} classified from stated type {label:?}");
                return activity(&key, ActivityTier::StatedType, reference);
            }
            ClassifyOutcome::Default(_) => {
                debug!("Stated building type {label:?} matches no building activity");
            }
        }
    }

    let key = prevailing_activity(spaces, reference);
    debug!("Building activity {key} derived from space floor areas");
    activity(&key, ActivityTier::SpaceAreas, reference)
}

fn activity(key: &str, tier: ActivityTier, reference: &ReferenceData) -> Result<BuildingActivity> {
    let rule = reference
        .buildings
        .get(key)
        .or_else(|| reference.buildings.get(DEFAULT_ACTIVITY))
        .or_else(|| reference.buildings.rules().first())
        .ok_or_else(|| AutozoneError::Classification("building type table is empty".to_string()))?;
    Ok(BuildingActivity {
        key: rule.key.clone(),
        tier,
        category: rule.attributes.category.clone(),
        liveload_kpa: rule.attributes.liveload_kpa,
    })
}

fn prevailing_activity<'a>(
    spaces: impl IntoIterator<Item = (&'a str, f64)>,
    reference: &ReferenceData,
) -> String {
    // (bucket or activity, area) pairs in space table order
    let mut by_building: Vec<(&str, f64)> = Vec::new();
    let mut by_activity: Vec<(&str, f64)> = Vec::new();
    for rule in reference.spaces.rules() {
        let building = rule.attributes.building_type.as_str();
        if !by_building.iter().any(|(b, _)| *b == building) {
            by_building.push((building, 0.0));
        }
        let activity = rule.attributes.activity.as_str();
        if building == COMMON_BUCKET && !by_activity.iter().any(|(a, _)| *a == activity) {
            by_activity.push((activity, 0.0));
        }
    }

    for (key, area) in spaces {
        let Some(rule) = reference.spaces.get(key) else {
            continue;
        };
        let attrs = &rule.attributes;
        if let Some(entry) = by_building.iter_mut().find(|(b, _)| *b == attrs.building_type) {
            entry.1 += area;
        }
        if attrs.building_type == COMMON_BUCKET {
            if let Some(entry) = by_activity.iter_mut().find(|(a, _)| *a == attrs.activity) {
                entry.1 += area;
            }
        }
    }

    let Some(bucket) = first_max(&by_building) else {
        return DEFAULT_ACTIVITY.to_string();
    };
    if bucket != COMMON_BUCKET {
        return bucket.to_string();
    }
    first_max(&by_activity)
        .map(common_activity_building)
        .unwrap_or(DEFAULT_ACTIVITY)
        .to_string()
}

/// Entry with the largest positive area, earliest on ties.
fn first_max<'a>(areas: &[(&'a str, f64)]) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for &(key, area) in areas {
        if area > best.map_or(0.0, |(_, a)| a) {
            best = Some((key, area));
        }
    }
    best.map(|(k, _)| k)
}
