//! Equipment configuration: fuel-type sets and their validated form.

use crate::error::{AutozoneError, Result};
use crate::model::SystemNumber;
use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FUEL_TYPE_SETS: &str = include_str!("../../data/fuel_type_sets.json");

/// Declares a closed set of configuration strings as an enum.
///
/// Parsing is exact and case-sensitive, failures report the admissible set.
macro_rules! admissible_values {
    (
        $(#[$meta:meta])*
        $name:ident, $parameter:literal, { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            pub const PARAMETER: &'static str = $parameter;

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Parses `value`, naming `parameter` in the error.
            pub fn parse_as(parameter: &str, value: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == value)
                    .ok_or_else(|| AutozoneError::validation(parameter, value, &[$($text),+]))
            }
        }

        impl FromStr for $name {
            type Err = AutozoneError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_as(Self::PARAMETER, s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

admissible_values!(
    /// Fuel burnt by the building boiler.
    BoilerFuel, "boiler_fueltype", {
        NaturalGas => "NaturalGas",
        Electricity => "Electricity",
        PropaneGas => "PropaneGas",
        FuelOilNo1 => "FuelOil#1",
        FuelOilNo2 => "FuelOil#2",
        Coal => "Coal",
        Diesel => "Diesel",
        Gasoline => "Gasoline",
        OtherFuel1 => "OtherFuel1",
    }
);

admissible_values!(
    /// Heating medium of baseboards and hydronic-capable coils.
    HeatingMedium, "baseboard_type", {
        HotWater => "Hot Water",
        Electric => "Electric",
    }
);

admissible_values!(
    ChillerType, "chiller_type", {
        Scroll => "Scroll",
        Centrifugal => "Centrifugal",
        RotaryScrew => "Rotary Screw",
        Reciprocating => "Reciprocating",
    }
);

admissible_values!(
    MauCoolingType, "mau_cooling_type", {
        Dx => "DX",
        Hydronic => "Hydronic",
    }
);

admissible_values!(
    /// Heating coil of the packaged rooftop unit (system 3).
    RooftopHeatingCoil, "heating_coil_type_sys3", {
        Electric => "Electric",
        Gas => "Gas",
        Dx => "DX",
    }
);

admissible_values!(
    /// Heating coil of the make-up air unit (system 4).
    MakeUpAirHeatingCoil, "heating_coil_type_sys4", {
        Electric => "Electric",
        Gas => "Gas",
    }
);

admissible_values!(
    /// Supply fan control of the built-up VAV system.
    FanType, "fan_type", {
        AirfoilRidingCurve => "AF_or_BI_rdg_fancurve",
        AirfoilInletVanes => "AF_or_BI_inletvanes",
        ForwardCurvedInletVanes => "fc_inletvanes",
        VariableSpeedDrive => "var_speed_drive",
    }
);

impl HeatingMedium {
    pub fn is_hot_water(self) -> bool {
        self == Self::HotWater
    }
}

/// Unvalidated equipment configuration as read from JSON or built by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelTypeSet {
    pub name: String,
    pub boiler_fueltype: String,
    pub baseboard_type: String,
    /// Whether system 1 carries a make-up air unit.
    pub mau_type: bool,
    pub mau_heating_coil_type: String,
    pub mau_cooling_type: String,
    pub chiller_type: String,
    pub heating_coil_type_sys3: String,
    pub heating_coil_type_sys4: String,
    pub heating_coil_type_sys6: String,
    pub fan_type: String,
}

impl FuelTypeSet {
    /// Every preset shipped with the crate.
    pub fn presets() -> anyhow::Result<Vec<Self>> {
        serde_json::from_str(FUEL_TYPE_SETS).context("Failed to deserialize fuel type sets")
    }

    /// Preset by name, e.g. "NaturalGas", "Electricity" or "FuelOilNo2".
    pub fn named(name: &str) -> anyhow::Result<Self> {
        Self::presets()?
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| anyhow!("Unknown fuel type set: {name}"))
    }

    pub fn validate(&self) -> Result<SystemFuelDefaults> {
        SystemFuelDefaults::try_from(self)
    }
}

/// Validated equipment configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFuelDefaults {
    pub boiler_fuel: BoilerFuel,
    pub baseboard: HeatingMedium,
    pub make_up_air: bool,
    pub mau_heating_coil: HeatingMedium,
    pub mau_cooling: MauCoolingType,
    pub chiller: ChillerType,
    pub rooftop_heating_coil: RooftopHeatingCoil,
    pub make_up_air_heating_coil: MakeUpAirHeatingCoil,
    pub vav_heating_coil: HeatingMedium,
    pub fan: FanType,
}

impl TryFrom<&FuelTypeSet> for SystemFuelDefaults {
    type Error = AutozoneError;

    fn try_from(set: &FuelTypeSet) -> Result<Self> {
        Ok(Self {
            boiler_fuel: set.boiler_fueltype.parse()?,
            baseboard: set.baseboard_type.parse()?,
            make_up_air: set.mau_type,
            mau_heating_coil: HeatingMedium::parse_as(
                "mau_heating_coil_type",
                &set.mau_heating_coil_type,
            )?,
            mau_cooling: set.mau_cooling_type.parse()?,
            chiller: set.chiller_type.parse()?,
            rooftop_heating_coil: set.heating_coil_type_sys3.parse()?,
            make_up_air_heating_coil: set.heating_coil_type_sys4.parse()?,
            vav_heating_coil: HeatingMedium::parse_as(
                "heating_coil_type_sys6",
                &set.heating_coil_type_sys6,
            )?,
            fan: set.fan_type.parse()?,
        })
    }
}

impl SystemFuelDefaults {
    /// Whether equipment of `system` is served by the building hot-water loop.
    pub fn requires_hot_water_loop(&self, system: SystemNumber) -> bool {
        match system.get() {
            1 => self.mau_heating_coil.is_hot_water() || self.baseboard.is_hot_water(),
            2 | 5 | 7 => true,
            3 | 4 => self.baseboard.is_hot_water(),
            6 => self.vav_heating_coil.is_hot_water() || self.baseboard.is_hot_water(),
            _ => false,
        }
    }
}
