//! Top-level entry point: classification, zoning and system assignment.

use crate::classify::{ActivityClassifier, BuildingActivity};
use crate::collab::EquipmentTemplateBuilder;
use crate::error::{AutozoneError, Result};
use crate::framework::{AutozoneContext, Bus, Pipeline};
use crate::hvac::{
    FuelTypeSet, SpaceSystemSelector, SystemAssigner, WildcardResolver, ZoneGrouper,
};
use crate::model::{BuildingModel, ScheduleLetter};
use crate::record::{ScheduleLetters, SpaceMultipliers};
use crate::trace::{SpaceTrace, Trace};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutozoneOptions {
    pub fuel: FuelTypeSet,
    /// Attach idealized air systems instead of real equipment.
    #[serde(default)]
    pub ideal_loads: bool,
    /// Building table key used instead of the classified building activity.
    #[serde(default)]
    pub building_activity_override: Option<String>,
    /// Zone multipliers by space name.
    #[serde(default)]
    pub space_multipliers: HashMap<String, u32>,
}

impl AutozoneOptions {
    pub fn new(fuel: FuelTypeSet) -> Self {
        Self {
            fuel,
            ideal_loads: false,
            building_activity_override: None,
            space_multipliers: HashMap::new(),
        }
    }

    /// Options using a named fuel-type preset.
    pub fn with_fuel_preset(name: &str) -> anyhow::Result<Self> {
        Ok(Self::new(FuelTypeSet::named(name)?))
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize autozone options")
    }

    pub fn with_ideal_loads(mut self, ideal_loads: bool) -> Self {
        self.ideal_loads = ideal_loads;
        self
    }

    pub fn with_building_activity(mut self, key: &str) -> Self {
        self.building_activity_override = Some(key.to_string());
        self
    }

    pub fn with_space_multiplier(mut self, space: &str, multiplier: u32) -> Self {
        self.space_multipliers.insert(space.to_string(), multiplier);
        self
    }

    fn validate_multipliers(&self) -> Result<()> {
        let mut names: Vec<&String> = self.space_multipliers.keys().collect();
        names.sort();
        for name in names {
            let m = self.space_multipliers[name];
            if m == 0 {
                return Err(AutozoneError::validation(
                    &format!("space multiplier of {name}"),
                    "0",
                    &["an integer >= 1"],
                ));
            }
        }
        Ok(())
    }
}

/// Outcome of a successful run, serializable for auditing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutozoneReport {
    pub building_activity: BuildingActivity,
    /// Distinct schedule letters as classified, `*` included.
    pub schedule_letters: Vec<ScheduleLetter>,
    pub trace: Vec<SpaceTrace>,
}

impl AutozoneReport {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize autozone report")
    }
}

/// Runs the autozoning pipeline against a set of collaborators.
pub struct Autozone<'a> {
    ctx: AutozoneContext<'a>,
}

impl<'a> Autozone<'a> {
    pub fn new(ctx: AutozoneContext<'a>) -> Self {
        Self { ctx }
    }

    /// Zones `model` and provisions its HVAC systems.
    ///
    /// Configuration is validated before the model is touched. On any other
    /// error the model may be partially zoned and should be discarded.
    pub fn run(
        &self,
        model: &mut BuildingModel,
        builder: &mut dyn EquipmentTemplateBuilder,
        options: &AutozoneOptions,
    ) -> Result<AutozoneReport> {
        let defaults = options.fuel.validate()?;
        options.validate_multipliers()?;
        info!(
            "Autozoning building {} with fuel set {}",
            model.name, options.fuel.name
        );

        let mut bus = Bus::new();
        bus.put(SpaceMultipliers(options.space_multipliers.clone()));

        let mut pipeline = Pipeline::new()
            .with_stage(
                ActivityClassifier::new().with_override(options.building_activity_override.clone()),
            )
            .with_stage(SpaceSystemSelector::new())
            .with_stage(WildcardResolver::new())
            .with_stage(ZoneGrouper::new())
            .with_stage(
                SystemAssigner::new(builder, defaults).with_ideal_loads(options.ideal_loads),
            );
        pipeline.run(&self.ctx, model, &mut bus)?;

        let building_activity = bus.take::<BuildingActivity>().ok_or_else(|| {
            AutozoneError::InvalidModel("building activity was not resolved".to_string())
        })?;
        let schedule_letters = bus.take::<ScheduleLetters>().unwrap_or_default().0;
        let trace = bus.take::<Trace>().unwrap_or_default().0;
        info!(
            "Autozoning finished: {} thermal zones, {} system bindings",
            model.thermal_zones().len(),
            model.system_bindings().len()
        );
        Ok(AutozoneReport {
            building_activity,
            schedule_letters,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_json_defaults() {
        let json = r#"{
            "fuel": {
                "name": "custom",
                "boiler_fueltype": "PropaneGas",
                "baseboard_type": "Electric",
                "mau_type": false,
                "mau_heating_coil_type": "Electric",
                "mau_cooling_type": "DX",
                "chiller_type": "Centrifugal",
                "heating_coil_type_sys3": "DX",
                "heating_coil_type_sys4": "Gas",
                "heating_coil_type_sys6": "Electric",
                "fan_type": "fc_inletvanes"
            }
        }"#;
        let options = AutozoneOptions::from_json_str(json).unwrap();
        assert!(!options.ideal_loads);
        assert!(options.space_multipliers.is_empty());
        assert!(options.fuel.validate().is_ok());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let options = AutozoneOptions::with_fuel_preset("NaturalGas")
            .unwrap()
            .with_space_multiplier("Suite", 0);
        assert!(matches!(
            options.validate_multipliers(),
            Err(AutozoneError::Validation { .. })
        ));
    }
}
