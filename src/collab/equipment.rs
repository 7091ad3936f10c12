use crate::error::Result;
use crate::hvac::template::SystemTemplateBinding;
use crate::model::{HotWaterLoop, SystemNumber, ThermalZone};

/// Builds HVAC equipment in the host model.
///
/// One call per populated system number, plus the shared hot-water loop and
/// idealized air systems.
pub trait EquipmentTemplateBuilder {
    fn add_hot_water_loop(&mut self, hw_loop: &HotWaterLoop) -> Result<()>;

    fn build(
        &mut self,
        binding: &SystemTemplateBinding,
        hot_water_loop: Option<&HotWaterLoop>,
    ) -> Result<()>;

    fn add_ideal_loads(&mut self, zone: &ThermalZone) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuilderCall {
    HotWaterLoop(String),
    System {
        system_number: SystemNumber,
        zones: Vec<String>,
        with_hot_water_loop: bool,
    },
    IdealLoads(String),
}

/// Builder that only records what it was asked to build.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuilder {
    pub calls: Vec<BuilderCall>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// System numbers built, in call order.
    pub fn built_systems(&self) -> Vec<SystemNumber> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BuilderCall::System { system_number, .. } => Some(*system_number),
                _ => None,
            })
            .collect()
    }
}

impl EquipmentTemplateBuilder for RecordingBuilder {
    fn add_hot_water_loop(&mut self, hw_loop: &HotWaterLoop) -> Result<()> {
        self.calls.push(BuilderCall::HotWaterLoop(hw_loop.name.clone()));
        Ok(())
    }

    fn build(
        &mut self,
        binding: &SystemTemplateBinding,
        hot_water_loop: Option<&HotWaterLoop>,
    ) -> Result<()> {
        self.calls.push(BuilderCall::System {
            system_number: binding.system_number,
            zones: binding.zone_names.clone(),
            with_hot_water_loop: hot_water_loop.is_some(),
        });
        Ok(())
    }

    fn add_ideal_loads(&mut self, zone: &ThermalZone) -> Result<()> {
        self.calls.push(BuilderCall::IdealLoads(zone.name.clone()));
        Ok(())
    }
}
