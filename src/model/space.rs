//! Spaces, stories and the enumerated attributes used for zoning.

use crate::HasName;
use crate::UID;
use crate::error::{AutozoneError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NECB HVAC system archetype, 0 (unconditioned) to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SystemNumber(u8);

impl SystemNumber {
    pub const UNCONDITIONED: Self = Self(0);
    pub const MAX: u8 = 7;

    pub fn new(n: u8) -> Option<Self> {
        (n <= Self::MAX).then_some(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_conditioned(self) -> bool {
        self.0 != 0
    }

    /// All system numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for SystemNumber {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("system number out of range: {value}"))
    }
}

impl From<SystemNumber> for u8 {
    fn from(value: SystemNumber) -> Self {
        value.0
    }
}

impl fmt::Display for SystemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NECB occupancy schedule type. `Wildcard` (`*`) follows the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScheduleLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    #[serde(rename = "*")]
    Wildcard,
}

impl ScheduleLetter {
    /// Letters a thermal zone can be keyed by.
    pub const ZONING: [Self; 9] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::Wildcard => "*",
        }
    }
}

impl FromStr for ScheduleLetter {
    type Err = AutozoneError;

    fn from_str(s: &str) -> Result<Self> {
        let letter = s.trim();
        if letter == "*" {
            return Ok(Self::Wildcard);
        }
        Self::ZONING
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(letter))
            .ok_or_else(|| {
                AutozoneError::validation(
                    "schedule type",
                    s,
                    &["A", "B", "C", "D", "E", "F", "G", "H", "I", "*"],
                )
            })
    }
}

impl fmt::Display for ScheduleLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a space on its floor plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPlacement {
    North,
    East,
    West,
    South,
    Core,
}

impl HorizontalPlacement {
    /// Enumeration order used when forming zone groups.
    pub const ALL: [Self; 5] = [Self::North, Self::East, Self::West, Self::South, Self::Core];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::West => "west",
            Self::South => "south",
            Self::Core => "core",
        }
    }
}

impl fmt::Display for HorizontalPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a space's story within the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPlacement {
    Ground,
    Middle,
    Top,
    /// Single-story building: both ground and top.
    Single,
}

/// Standards space type assigned to a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceType {
    /// Model name, e.g. "Space Function Office - enclosed". Thermostats are keyed by it.
    pub name: String,
    pub standards_space_type: String,
    pub standards_building_type: String,
}

impl SpaceType {
    /// Sentinel standards space type of unconditioned, unzoned spaces.
    pub const UNDEFINED: &'static str = "- undefined -";

    pub fn new(name: &str, standards_space_type: &str, standards_building_type: &str) -> Self {
        Self {
            name: name.to_string(),
            standards_space_type: standards_space_type.to_string(),
            standards_building_type: standards_building_type.to_string(),
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.standards_space_type == Self::UNDEFINED
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub name: String,
}

impl HasName for Story {
    fn get_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    /// Name of the building story holding the space.
    pub story: String,
    pub space_type: Option<SpaceType>,
    /// Whether the floor area counts toward the building total.
    pub part_of_total_floor_area: bool,
    pub thermal_zone: Option<UID>,
}

impl HasName for Space {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Space {
    pub fn new(name: &str, story: &str, space_type: Option<SpaceType>) -> Self {
        Self {
            name: name.to_string(),
            story: story.to_string(),
            space_type,
            part_of_total_floor_area: true,
            thermal_zone: None,
        }
    }

    /// Marks the space as not counted toward the building floor area.
    pub fn uncounted(mut self) -> Self {
        self.part_of_total_floor_area = false;
        self
    }

    pub fn is_undefined(&self) -> bool {
        self.space_type.as_ref().is_some_and(SpaceType::is_undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_number_range() {
        assert!(SystemNumber::new(7).is_some());
        assert!(SystemNumber::new(8).is_none());
        assert_eq!(SystemNumber::all().count(), 8);
        assert!(!SystemNumber::UNCONDITIONED.is_conditioned());
    }

    #[test]
    fn test_schedule_letter_parse() {
        assert_eq!("c".parse::<ScheduleLetter>().unwrap(), ScheduleLetter::C);
        assert_eq!(" * ".parse::<ScheduleLetter>().unwrap(), ScheduleLetter::Wildcard);
        assert!(matches!(
            "J".parse::<ScheduleLetter>(),
            Err(AutozoneError::Validation { .. })
        ));
    }

    #[test]
    fn test_undefined_space() {
        let st = SpaceType::new("Space Function - undefined -", "- undefined -", "Office");
        let space = Space::new("Plenum", "Level 1", Some(st));
        assert!(space.is_undefined());
        assert!(!Space::new("Room", "Level 1", None).is_undefined());
    }

    #[test]
    fn test_placement_serde_is_lowercase() {
        let json = serde_json::to_string(&HorizontalPlacement::Core).unwrap();
        assert_eq!(json, "\"core\"");
    }
}
