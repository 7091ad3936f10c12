//! Equipment templates handed to the equipment builder.

use crate::UID;
use crate::hvac::config::{
    ChillerType, FanType, HeatingMedium, MakeUpAirHeatingCoil, MauCoolingType, RooftopHeatingCoil,
    SystemFuelDefaults,
};
use crate::model::SystemNumber;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanCoilKind {
    /// Four-pipe fan coil (systems 2 and 7).
    FourPipe,
    /// Two-pipe fan coil (system 5).
    TwoPipe,
}

/// Equipment archetype with the parameters its builder consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum SystemTemplate {
    /// System 1: unitary AC with baseboard heating, optionally with a make-up air unit.
    UnitaryAcBaseboard {
        make_up_air: bool,
        mau_heating_coil: HeatingMedium,
        mau_cooling: MauCoolingType,
        baseboard: HeatingMedium,
    },
    /// Systems 2, 5 and 7.
    FanCoil {
        kind: FanCoilKind,
        chiller: ChillerType,
        mau_cooling: MauCoolingType,
    },
    /// System 3: single-zone packaged rooftop unit with baseboard heating.
    PackagedRooftop {
        heating_coil: RooftopHeatingCoil,
        baseboard: HeatingMedium,
    },
    /// System 4: single-zone make-up air unit with baseboard heating.
    MakeUpAir {
        heating_coil: MakeUpAirHeatingCoil,
        baseboard: HeatingMedium,
    },
    /// System 6: multi-zone built-up VAV with baseboard heating.
    BuiltUpVav {
        heating_coil: HeatingMedium,
        baseboard: HeatingMedium,
        chiller: ChillerType,
        fan: FanType,
    },
}

impl SystemTemplate {
    /// Template of a conditioned system. `None` for system 0.
    pub fn for_system(system: SystemNumber, defaults: &SystemFuelDefaults) -> Option<Self> {
        let template = match system.get() {
            1 => Self::UnitaryAcBaseboard {
                make_up_air: defaults.make_up_air,
                mau_heating_coil: defaults.mau_heating_coil,
                mau_cooling: defaults.mau_cooling,
                baseboard: defaults.baseboard,
            },
            2 | 7 => Self::FanCoil {
                kind: FanCoilKind::FourPipe,
                chiller: defaults.chiller,
                mau_cooling: defaults.mau_cooling,
            },
            3 => Self::PackagedRooftop {
                heating_coil: defaults.rooftop_heating_coil,
                baseboard: defaults.baseboard,
            },
            4 => Self::MakeUpAir {
                heating_coil: defaults.make_up_air_heating_coil,
                baseboard: defaults.baseboard,
            },
            5 => Self::FanCoil {
                kind: FanCoilKind::TwoPipe,
                chiller: defaults.chiller,
                mau_cooling: defaults.mau_cooling,
            },
            6 => Self::BuiltUpVav {
                heating_coil: defaults.vav_heating_coil,
                baseboard: defaults.baseboard,
                chiller: defaults.chiller,
                fan: defaults.fan,
            },
            _ => return None,
        };
        Some(template)
    }
}

/// Zones of one system number bound to their equipment template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemTemplateBinding {
    pub system_number: SystemNumber,
    pub template: SystemTemplate,
    pub zones: Vec<UID>,
    /// Zone names, parallel to `zones`.
    pub zone_names: Vec<String>,
}
