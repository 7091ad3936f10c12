//! Thermal zones and the plant objects shared between them.
//!
//! Hierarchy: BuildingModel → ThermalZone → Space

use crate::HasName;
use crate::UID;
use crate::hvac::config::BoilerFuel;
use crate::model::arena::ArenaId;
use crate::model::space::SystemNumber;
use serde::{Deserialize, Serialize};

/// Dual-setpoint thermostat registered per space type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thermostat {
    pub name: String,
    pub heating_setpoint_schedule: String,
    pub cooling_setpoint_schedule: String,
}

impl Thermostat {
    pub fn new(
        name: &str,
        heating_setpoint_schedule: &str,
        cooling_setpoint_schedule: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            heating_setpoint_schedule: heating_setpoint_schedule.to_string(),
            cooling_setpoint_schedule: cooling_setpoint_schedule.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThermalZone {
    pub name: String,
    pub uid: UID,
    pub system_number: SystemNumber,
    pub multiplier: u32,
    pub thermostat: Option<Thermostat>,
    /// Set when an idealized air system serves the zone instead of real equipment.
    pub ideal_loads: bool,
    spaces: Vec<ArenaId>,
}

impl HasName for ThermalZone {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl ThermalZone {
    pub fn new(name: &str, system_number: SystemNumber) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            system_number,
            multiplier: 1,
            thermostat: None,
            ideal_loads: false,
            spaces: Vec::new(),
        }
    }

    pub fn spaces(&self) -> &[ArenaId] {
        &self.spaces
    }

    pub(crate) fn add_space(&mut self, space: ArenaId) {
        if !self.spaces.contains(&space) {
            self.spaces.push(space);
        }
    }
}

/// Building-wide hot-water plant loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotWaterLoop {
    pub name: String,
    pub uid: UID,
    pub boiler_fuel: BoilerFuel,
}

impl HotWaterLoop {
    pub fn new(boiler_fuel: BoilerFuel) -> Self {
        Self {
            name: "Hot Water Loop".to_string(),
            uid: UID::new(),
            boiler_fuel,
        }
    }
}
