//! Audit trail of the decisions taken for each space.

use crate::model::{HorizontalPlacement, ScheduleLetter, VerticalPlacement};
use crate::record::SpaceRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTrace {
    pub space: String,
    pub story: String,
    pub space_activity: String,
    pub standards_space_type: String,
    pub system_selection_category: Option<String>,
    pub raw_schedule_letter: Option<ScheduleLetter>,
    pub schedule_letter: Option<ScheduleLetter>,
    pub horizontal_placement: Option<HorizontalPlacement>,
    pub vertical_placement: Option<VerticalPlacement>,
    pub is_dwelling_unit: bool,
    pub heating_load_kw: f64,
    pub cooling_load_kw: f64,
    pub system_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_from: Option<String>,
    pub thermal_zone: Option<String>,
}

impl SpaceTrace {
    pub fn from_record(record: &SpaceRecord, thermal_zone: Option<&str>) -> Self {
        Self {
            space: record.name.clone(),
            story: record.story.clone(),
            space_activity: record.space_activity.clone(),
            standards_space_type: record.standards_space_type.clone(),
            system_selection_category: record
                .system_selection_category
                .map(|c| c.as_str().to_string()),
            raw_schedule_letter: record.raw_schedule_letter,
            schedule_letter: record.schedule_letter,
            horizontal_placement: record.horizontal_placement,
            vertical_placement: record.vertical_placement,
            is_dwelling_unit: record.is_dwelling_unit,
            heating_load_kw: record.heating_load_kw,
            cooling_load_kw: record.cooling_load_kw,
            system_number: record.system_number.map(|s| s.get()),
            resolved_from: record.resolved_from.clone(),
            thermal_zone: thermal_zone.map(str::to_string),
        }
    }
}

/// Per-space trace in space-name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace(pub Vec<SpaceTrace>);
