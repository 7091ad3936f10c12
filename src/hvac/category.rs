//! NECB system selection categories and the system selection table.

use crate::error::{AutozoneError, Result};
use crate::model::SystemNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cooling load above which data processing areas get a four-pipe fan coil.
pub const DATA_PROCESSING_COOLING_KW: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemSelectionCategory {
    Undefined,
    AssemblyArea,
    GeneralArea,
    DataProcessingArea,
    AutomotiveArea,
    HistoricalCollectionsArea,
    HospitalArea,
    IndoorArena,
    IndustrialArea,
    ResidentialAccommodationArea,
    SleepingArea,
    SupermarketFoodServicesArea,
    SupermarketFoodServicesAreaVented,
    WarehouseArea,
    WarehouseAreaRefrigerated,
    /// System follows the spaces around it.
    Wildcard,
}

impl SystemSelectionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "- undefined -",
            Self::AssemblyArea => "Assembly Area",
            Self::GeneralArea => "General Area",
            Self::DataProcessingArea => "Data Processing Area",
            Self::AutomotiveArea => "Automotive Area",
            Self::HistoricalCollectionsArea => "Historical Collections Area",
            Self::HospitalArea => "Hospital Area",
            Self::IndoorArena => "Indoor Arena",
            Self::IndustrialArea => "Industrial Area",
            Self::ResidentialAccommodationArea => "Residential/Accommodation Area",
            Self::SleepingArea => "Sleeping Area",
            Self::SupermarketFoodServicesArea => "Supermarket/Food Services Area",
            Self::SupermarketFoodServicesAreaVented => "Supermarket/Food Services Area - vented",
            Self::WarehouseArea => "Warehouse Area",
            Self::WarehouseAreaRefrigerated => "Warehouse Area - refrigerated",
            Self::Wildcard => "Wildcard",
        }
    }

    /// Parses an optional standards value. An absent category is unconditioned.
    pub fn from_standards(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Self::Undefined),
            Some(v) => v.parse(),
        }
    }

    /// Selects the system for a space of this category.
    ///
    /// Returns `(system, is_dwelling_unit)`. The system is `None` for wildcard
    /// spaces, which take the system of a neighbour.
    pub fn select_system(self, stories: u32, cooling_load_kw: f64) -> (Option<SystemNumber>, bool) {
        let n = match self {
            Self::Undefined => 0,
            Self::AssemblyArea => {
                if stories <= 4 {
                    3
                } else {
                    6
                }
            }
            Self::GeneralArea => {
                if stories <= 2 {
                    3
                } else {
                    6
                }
            }
            Self::DataProcessingArea => {
                if cooling_load_kw > DATA_PROCESSING_COOLING_KW {
                    2
                } else {
                    1
                }
            }
            Self::AutomotiveArea => 4,
            Self::HistoricalCollectionsArea => 2,
            Self::HospitalArea => 3,
            Self::IndoorArena => 7,
            Self::IndustrialArea => 3,
            Self::ResidentialAccommodationArea => return (SystemNumber::new(1), true),
            Self::SleepingArea => return (SystemNumber::new(3), true),
            Self::SupermarketFoodServicesArea => 3,
            Self::SupermarketFoodServicesAreaVented => 4,
            Self::WarehouseArea => 4,
            Self::WarehouseAreaRefrigerated => 5,
            Self::Wildcard => return (None, false),
        };
        (SystemNumber::new(n), false)
    }
}

impl FromStr for SystemSelectionCategory {
    type Err = AutozoneError;

    fn from_str(s: &str) -> Result<Self> {
        let category = match s.trim() {
            "- undefined -" => Self::Undefined,
            "Assembly Area" => Self::AssemblyArea,
            "General Area" => Self::GeneralArea,
            "Data Processing Area" => Self::DataProcessingArea,
            "Automotive Area" => Self::AutomotiveArea,
            "Historical Collections Area" => Self::HistoricalCollectionsArea,
            "Hospital Area" => Self::HospitalArea,
            "Indoor Arena" => Self::IndoorArena,
            "Industrial Area" => Self::IndustrialArea,
            // NECB data spells it both ways.
            "Residential/Accommodation Area" | "Residential/Accomodation Area" => {
                Self::ResidentialAccommodationArea
            }
            "Sleeping Area" => Self::SleepingArea,
            "Supermarket/Food Services Area" => Self::SupermarketFoodServicesArea,
            "Supermarket/Food Services Area - vented" => Self::SupermarketFoodServicesAreaVented,
            "Warehouse Area" => Self::WarehouseArea,
            "Warehouse Area - refrigerated" => Self::WarehouseAreaRefrigerated,
            "Wildcard" => Self::Wildcard,
            other => {
                return Err(AutozoneError::Classification(format!(
                    "NECB HVAC system selection type {other} not valid"
                )));
            }
        };
        Ok(category)
    }
}

impl fmt::Display for SystemSelectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
