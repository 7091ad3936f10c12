use super::config::SystemFuelDefaults;
use super::template::{SystemTemplate, SystemTemplateBinding};
use super::zoning::ZoneGroups;
use crate::collab::EquipmentTemplateBuilder;
use crate::error::{AutozoneError, Result};
use crate::framework::{AutozoneContext, Bus, Stage};
use crate::model::{BuildingModel, HotWaterLoop, SystemNumber};
use tracing::{debug, info};

/// Provisions HVAC equipment for the zones created by the zone grouper.
///
/// Either one idealized air system per thermal zone, or the shared hot-water
/// loop (when any populated system needs it) followed by one template binding
/// per populated system number.
pub struct SystemAssigner<'b> {
    builder: &'b mut dyn EquipmentTemplateBuilder,
    defaults: SystemFuelDefaults,
    ideal_loads: bool,
}

impl<'b> SystemAssigner<'b> {
    pub fn new(
        builder: &'b mut dyn EquipmentTemplateBuilder,
        defaults: SystemFuelDefaults,
    ) -> Self {
        Self {
            builder,
            defaults,
            ideal_loads: false,
        }
    }

    pub fn with_ideal_loads(mut self, ideal_loads: bool) -> Self {
        self.ideal_loads = ideal_loads;
        self
    }

    fn assign_ideal_loads(&mut self, model: &mut BuildingModel) -> Result<()> {
        let mut count = 0;
        for zone in model.thermal_zones() {
            self.builder.add_ideal_loads(zone)?;
            count += 1;
        }
        for zone in model.thermal_zones_mut() {
            zone.ideal_loads = true;
        }
        info!("Attached ideal loads to {count} thermal zones");
        Ok(())
    }

    fn assign_systems(&mut self, model: &mut BuildingModel, groups: &ZoneGroups) -> Result<()> {
        let populated: Vec<SystemNumber> = SystemNumber::all()
            .filter(|s| s.is_conditioned())
            .filter(|s| groups.for_system(*s).next().is_some())
            .collect();

        if populated
            .iter()
            .any(|s| self.defaults.requires_hot_water_loop(*s))
        {
            let hw_loop = HotWaterLoop::new(self.defaults.boiler_fuel);
            self.builder.add_hot_water_loop(&hw_loop)?;
            info!("Added hot water loop fired by {}", hw_loop.boiler_fuel);
            model.set_hot_water_loop(hw_loop);
        }

        for system in populated {
            let Some(template) = SystemTemplate::for_system(system, &self.defaults) else {
                continue;
            };
            let mut binding = SystemTemplateBinding {
                system_number: system,
                template,
                zones: Vec::new(),
                zone_names: Vec::new(),
            };
            for group in groups.for_system(system) {
                for (uid, space) in group.zones.iter().zip(group.spaces.iter()) {
                    let name = model
                        .thermal_zone(uid)
                        .map(|z| z.name.clone())
                        .ok_or_else(|| {
                            AutozoneError::InvalidModel(format!("zone of space {space} is missing"))
                        })?;
                    binding.zones.push(uid.clone());
                    binding.zone_names.push(name);
                }
            }

            let hw_loop = if self.defaults.requires_hot_water_loop(system) {
                model.hot_water_loop()
            } else {
                None
            };
            debug!(
                "Building system {} for {} zones",
                system,
                binding.zones.len()
            );
            self.builder.build(&binding, hw_loop)?;
            model.add_system_binding(binding);
        }
        Ok(())
    }
}

impl Stage for SystemAssigner<'_> {
    fn name(&self) -> &'static str {
        "system_assigner"
    }

    fn run(
        &mut self,
        _ctx: &AutozoneContext,
        model: &mut BuildingModel,
        bus: &mut Bus,
    ) -> Result<()> {
        if self.ideal_loads {
            self.assign_ideal_loads(model)?;
        } else {
            let groups = bus.require::<ZoneGroups>()?;
            self.assign_systems(model, groups)?;
        }
        check_zone_assignment(model)
    }
}

/// Every counted space outside the sentinel undefined type must have a zone.
///
/// All offenders are reported in one error.
pub fn check_zone_assignment(model: &BuildingModel) -> Result<()> {
    let unzoned: Vec<String> = model
        .unzoned_spaces()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    if unzoned.is_empty() {
        Ok(())
    } else {
        Err(AutozoneError::PostCondition { spaces: unzoned })
    }
}
