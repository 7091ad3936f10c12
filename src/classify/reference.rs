//! NECB reference tables.
//!
//! Both tables are JSON arrays of `{key, includes, excludes, fallback}` rows.
//! Building rows additionally carry `category` and `liveload` (kPa). The NECB
//! tables are embedded in the crate; custom tables can be read from disk.

use super::rule::{BuildingAttributes, ClassificationRule, RuleTable, SpaceAttributes};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const NECB_BUILDING_TYPES: &str = include_str!("../../data/necb_building_types.json");
const NECB_SPACE_TYPES: &str = include_str!("../../data/necb_space_types.json");

#[derive(Debug, Deserialize)]
struct BuildingRow {
    key: String,
    category: String,
    liveload: f64,
    #[serde(default)]
    includes: Vec<String>,
    #[serde(default)]
    excludes: Vec<String>,
    #[serde(default)]
    fallback: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpaceRow {
    key: String,
    #[serde(default)]
    includes: Vec<String>,
    #[serde(default)]
    excludes: Vec<String>,
    #[serde(default)]
    fallback: Option<String>,
}

impl From<BuildingRow> for ClassificationRule<BuildingAttributes> {
    fn from(row: BuildingRow) -> Self {
        let attributes = BuildingAttributes {
            liveload_kpa: row.liveload,
            category: row.category,
        };
        ClassificationRule::from_owned(
            row.key,
            row.includes,
            row.excludes,
            row.fallback,
            attributes,
        )
    }
}

impl From<SpaceRow> for ClassificationRule<SpaceAttributes> {
    fn from(row: SpaceRow) -> Self {
        let attributes = SpaceAttributes::from_key(&row.key);
        ClassificationRule::from_owned(
            row.key,
            row.includes,
            row.excludes,
            row.fallback,
            attributes,
        )
    }
}

/// Building- and space-level classification tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub buildings: RuleTable<BuildingAttributes>,
    pub spaces: RuleTable<SpaceAttributes>,
}

impl ReferenceData {
    pub fn new(
        buildings: RuleTable<BuildingAttributes>,
        spaces: RuleTable<SpaceAttributes>,
    ) -> Self {
        Self { buildings, spaces }
    }

    /// Tables shipped with the crate.
    pub fn necb() -> Result<Self> {
        Self::from_json_strs(NECB_BUILDING_TYPES, NECB_SPACE_TYPES)
            .context("Failed to load embedded NECB reference tables")
    }

    pub fn from_json_strs(building_json: &str, space_json: &str) -> Result<Self> {
        let buildings: Vec<BuildingRow> = serde_json::from_str(building_json)
            .context("Failed to deserialize building type table")?;
        let spaces: Vec<SpaceRow> =
            serde_json::from_str(space_json).context("Failed to deserialize space type table")?;
        Ok(Self::from_rows(buildings, spaces))
    }

    /// Reads both tables from JSON files.
    pub fn from_files(building_path: &Path, space_path: &Path) -> Result<Self> {
        let buildings: Vec<BuildingRow> = read_json(building_path)?;
        let spaces: Vec<SpaceRow> = read_json(space_path)?;
        Ok(Self::from_rows(buildings, spaces))
    }

    fn from_rows(buildings: Vec<BuildingRow>, spaces: Vec<SpaceRow>) -> Self {
        Self {
            buildings: RuleTable::new(buildings.into_iter().map(Into::into).collect()),
            spaces: RuleTable::new(spaces.into_iter().map(Into::into).collect()),
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize table from: {}", path.display()))
}
