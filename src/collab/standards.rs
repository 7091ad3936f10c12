use crate::error::{AutozoneError, Result};
use crate::model::{ScheduleLetter, SpaceType};
use anyhow::Context;
use serde::{Deserialize, Serialize};

const NECB_SPACE_TYPE_PROPERTIES: &str = include_str!("../../data/necb_space_type_properties.json");

/// Standards row of a (space type, building type) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTypeProperties {
    pub space_type: String,
    pub building_type: String,
    /// NECB HVAC system selection category; `None` when the row carries none.
    #[serde(rename = "necb_hvac_system_selection_type")]
    pub system_selection_category: Option<String>,
    /// NECB schedule letter `A`..`I` or `*`.
    #[serde(rename = "necb_schedule_type")]
    pub schedule_type: String,
}

/// Standards lookup keyed by `(standards_space_type, standards_building_type)`.
pub trait StandardsLookup {
    fn space_type_properties(
        &self,
        standards_space_type: &str,
        standards_building_type: &str,
    ) -> Option<&SpaceTypeProperties>;
}

/// Classifies a space type into its NECB occupancy schedule letter.
pub trait ScheduleClassifier {
    fn schedule_letter(&self, space_type: &SpaceType) -> Result<ScheduleLetter>;
}

/// Tabulated standards data.
#[derive(Debug, Clone, Default)]
pub struct StandardsTable {
    rows: Vec<SpaceTypeProperties>,
}

impl StandardsTable {
    pub fn new(rows: Vec<SpaceTypeProperties>) -> Self {
        Self { rows }
    }

    /// NECB 2011 space type properties shipped with the crate.
    pub fn necb2011() -> anyhow::Result<Self> {
        Self::from_json_str(NECB_SPACE_TYPE_PROPERTIES)
            .context("Failed to load embedded NECB space type properties")
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let rows: Vec<SpaceTypeProperties> =
            serde_json::from_str(json).context("Failed to deserialize space type properties")?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[SpaceTypeProperties] {
        &self.rows
    }
}

impl StandardsLookup for StandardsTable {
    fn space_type_properties(
        &self,
        standards_space_type: &str,
        standards_building_type: &str,
    ) -> Option<&SpaceTypeProperties> {
        self.rows.iter().find(|r| {
            r.space_type == standards_space_type && r.building_type == standards_building_type
        })
    }
}

impl ScheduleClassifier for StandardsTable {
    fn schedule_letter(&self, space_type: &SpaceType) -> Result<ScheduleLetter> {
        let row = self
            .space_type_properties(
                &space_type.standards_space_type,
                &space_type.standards_building_type,
            )
            .ok_or_else(|| {
                AutozoneError::Classification(format!(
                    "no schedule type for space type {}",
                    space_type.name
                ))
            })?;
        row.schedule_type.parse()
    }
}
