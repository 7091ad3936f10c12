//! Per-space working records passed between pipeline stages.

use crate::hvac::category::SystemSelectionCategory;
use crate::model::{ArenaId, HorizontalPlacement, ScheduleLetter, SystemNumber, VerticalPlacement};
use std::collections::HashMap;

/// Everything the pipeline learns about one counted space.
///
/// Created by the activity classifier. System selection fills in placement,
/// schedule, loads and the system, wildcard resolution completes the system.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceRecord {
    pub id: ArenaId,
    pub name: String,
    pub floor_area_m2: f64,
    /// Label the space activity was classified from.
    pub raw_label: String,
    /// Space table key, `"<activity>::<buildingtype>"`.
    pub space_activity: String,
    pub standards_space_type: String,
    pub standards_building_type: String,
    /// Model name of the space type, thermostats are keyed by it.
    pub space_type_name: String,
    pub story: String,
    /// Tagged with the sentinel undefined space type.
    pub is_undefined: bool,
    pub horizontal_placement: Option<HorizontalPlacement>,
    pub vertical_placement: Option<VerticalPlacement>,
    /// Schedule letter as classified, possibly `*`.
    pub raw_schedule_letter: Option<ScheduleLetter>,
    /// Schedule letter used for zoning, `*` replaced by the dominant letter.
    pub schedule_letter: Option<ScheduleLetter>,
    pub is_dwelling_unit: bool,
    pub system_selection_category: Option<SystemSelectionCategory>,
    pub system_number: Option<SystemNumber>,
    pub heating_load_kw: f64,
    pub cooling_load_kw: f64,
    /// Neighbour whose system a wildcard space copied.
    pub resolved_from: Option<String>,
}

impl SpaceRecord {
    pub fn new(id: ArenaId, name: &str, story: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            floor_area_m2: 0.0,
            raw_label: String::new(),
            space_activity: String::new(),
            standards_space_type: String::new(),
            standards_building_type: String::new(),
            space_type_name: String::new(),
            story: story.to_string(),
            is_undefined: false,
            horizontal_placement: None,
            vertical_placement: None,
            raw_schedule_letter: None,
            schedule_letter: None,
            is_dwelling_unit: false,
            system_selection_category: None,
            system_number: None,
            heating_load_kw: 0.0,
            cooling_load_kw: 0.0,
            resolved_from: None,
        }
    }

    /// Records that take part in zoning.
    pub fn is_zoned(&self) -> bool {
        !self.is_undefined
    }
}

/// Space records in space-name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceRecords(pub Vec<SpaceRecord>);

impl SpaceRecords {
    pub fn iter(&self) -> impl Iterator<Item = &SpaceRecord> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SpaceRecord> {
        self.0.iter_mut()
    }

    pub fn get(&self, name: &str) -> Option<&SpaceRecord> {
        self.0.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Distinct schedule letters in the order they were first classified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleLetters(pub Vec<ScheduleLetter>);

/// Zone multipliers by space name. Unlisted spaces have multiplier 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceMultipliers(pub HashMap<String, u32>);

impl SpaceMultipliers {
    pub fn get(&self, space: &str) -> u32 {
        self.0.get(space).copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_defaults_to_one() {
        let multipliers = SpaceMultipliers(HashMap::from([("Suite".to_string(), 4)]));
        assert_eq!(multipliers.get("Suite"), 4);
        assert_eq!(multipliers.get("Lobby"), 1);
    }
}
