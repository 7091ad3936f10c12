//! Building model container - the object the pipeline mutates.
//!
//! Hierarchy: BuildingModel → Story → Space, with thermal zones created by
//! zoning and equipment bindings created by system assignment.

pub mod graph;

use crate::UID;
use crate::error::{AutozoneError, Result};
use crate::hvac::template::SystemTemplateBinding;
use crate::model::arena::{ArenaId, NamedArena, ObjectRef};
use crate::model::space::{Space, Story};
use crate::model::zone::{HotWaterLoop, ThermalZone};
use crate::{HasName, SortByName};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct BuildingModel {
    pub name: String,
    /// Building type as stated in the model, e.g. "Office" or "School/university".
    pub standards_building_type: Option<String>,
    /// Number of above-ground stories, multipliers included.
    pub above_ground_stories: Option<u32>,
    stories: Vec<Story>,
    spaces: NamedArena<Space>,
    thermal_zones: NamedArena<ThermalZone>,
    zone_ids: HashMap<UID, ArenaId>,
    hot_water_loop: Option<HotWaterLoop>,
    system_bindings: Vec<SystemTemplateBinding>,
}

impl HasName for BuildingModel {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl BuildingModel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_standards_building_type(mut self, building_type: &str) -> Self {
        self.standards_building_type = Some(building_type.to_string());
        self
    }

    pub fn with_above_ground_stories(mut self, stories: u32) -> Self {
        self.above_ground_stories = Some(stories);
        self
    }

    /// Adds a story. Story names must be unique.
    pub fn add_story(&mut self, name: &str) -> Result<()> {
        if self.stories.iter().any(|s| s.name == name) {
            return Err(AutozoneError::InvalidModel(format!(
                "story is already present: {name}"
            )));
        }
        self.stories.push(Story {
            name: name.to_string(),
        });
        Ok(())
    }

    /// Returns stories sorted by name.
    pub fn stories(&self) -> Vec<&Story> {
        let mut stories: Vec<&Story> = self.stories.iter().collect();
        stories.as_mut_slice().sort_by_name();
        stories
    }

    /// 1-based position of a story in name order.
    pub fn story_number(&self, name: &str) -> Option<usize> {
        self.stories()
            .iter()
            .position(|s| s.name == name)
            .map(|i| i + 1)
    }

    /// Adds a space. Its story must already exist.
    pub fn add_space(&mut self, space: Space) -> Result<ArenaId> {
        if !self.stories.iter().any(|s| s.name == space.story) {
            return Err(AutozoneError::InvalidModel(format!(
                "space {} references unknown story {}",
                space.name, space.story
            )));
        }
        self.spaces.insert(space)
    }

    pub fn space<'a>(&self, r: impl Into<ObjectRef<'a>>) -> Option<&Space> {
        self.spaces.resolve(r)
    }

    pub fn space_id(&self, name: &str) -> Option<ArenaId> {
        self.spaces.id_of(name)
    }

    /// Returns spaces sorted by name.
    pub fn spaces(&self) -> Vec<(ArenaId, &Space)> {
        self.spaces
            .ids_by_name()
            .into_iter()
            .filter_map(|id| self.spaces.get(id).map(|s| (id, s)))
            .collect()
    }

    /// Adds a thermal zone. Zone names must be unique.
    pub fn add_thermal_zone(&mut self, zone: ThermalZone) -> Result<UID> {
        let uid = zone.uid.clone();
        let id = self.thermal_zones.insert(zone)?;
        self.zone_ids.insert(uid.clone(), id);
        Ok(uid)
    }

    /// Places a space in a thermal zone.
    pub fn assign_space(&mut self, space: ArenaId, zone: &UID) -> Result<()> {
        let zone_id = *self
            .zone_ids
            .get(zone)
            .ok_or_else(|| AutozoneError::InvalidModel(format!("unknown thermal zone {zone}")))?;
        let target = self
            .spaces
            .get_mut(space)
            .ok_or_else(|| AutozoneError::InvalidModel(format!("unknown space {space:?}")))?;
        target.thermal_zone = Some(zone.clone());
        if let Some(z) = self.thermal_zones.get_mut(zone_id) {
            z.add_space(space);
        }
        Ok(())
    }

    pub fn thermal_zone(&self, uid: &UID) -> Option<&ThermalZone> {
        self.zone_ids
            .get(uid)
            .and_then(|id| self.thermal_zones.get(*id))
    }

    pub fn thermal_zone_by_name(&self, name: &str) -> Option<&ThermalZone> {
        self.thermal_zones.resolve(name)
    }

    pub fn thermal_zones_mut(&mut self) -> impl Iterator<Item = &mut ThermalZone> {
        self.thermal_zones.iter_mut()
    }

    /// Returns thermal zones sorted by name.
    pub fn thermal_zones(&self) -> Vec<&ThermalZone> {
        self.thermal_zones
            .ids_by_name()
            .into_iter()
            .filter_map(|id| self.thermal_zones.get(id))
            .collect()
    }

    /// Removes every thermal zone and unlinks all spaces from them.
    pub fn remove_thermal_zones(&mut self) {
        self.thermal_zones.clear();
        self.zone_ids.clear();
        for space in self.spaces.iter_mut() {
            space.thermal_zone = None;
        }
    }

    pub fn hot_water_loop(&self) -> Option<&HotWaterLoop> {
        self.hot_water_loop.as_ref()
    }

    pub fn set_hot_water_loop(&mut self, hw_loop: HotWaterLoop) {
        self.hot_water_loop = Some(hw_loop);
    }

    pub fn system_bindings(&self) -> &[SystemTemplateBinding] {
        &self.system_bindings
    }

    pub fn add_system_binding(&mut self, binding: SystemTemplateBinding) {
        self.system_bindings.push(binding);
    }

    /// Counted spaces that must have a thermal zone but have none.
    pub fn unzoned_spaces(&self) -> Vec<&Space> {
        self.spaces()
            .into_iter()
            .map(|(_, s)| s)
            .filter(|s| s.part_of_total_floor_area && !s.is_undefined() && s.thermal_zone.is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::space::{SpaceType, SystemNumber};

    fn office() -> Option<SpaceType> {
        Some(SpaceType::new(
            "Space Function Office - enclosed",
            "Office - enclosed",
            "Office",
        ))
    }

    #[test]
    fn test_space_requires_existing_story() {
        let mut model = BuildingModel::new("b");
        let err = model.add_space(Space::new("Office", "Level 1", office()));
        assert!(matches!(err, Err(AutozoneError::InvalidModel(_))));
        model.add_story("Level 1").unwrap();
        assert!(model.add_space(Space::new("Office", "Level 1", office())).is_ok());
    }

    #[test]
    fn test_story_number_follows_name_order() {
        let mut model = BuildingModel::new("b");
        model.add_story("Level 2").unwrap();
        model.add_story("Level 1").unwrap();
        assert_eq!(model.story_number("Level 1"), Some(1));
        assert_eq!(model.story_number("Level 2"), Some(2));
        assert_eq!(model.story_number("Roof"), None);
    }

    #[test]
    fn test_assign_and_remove_zones() {
        let mut model = BuildingModel::new("b");
        model.add_story("Level 1").unwrap();
        let id = model.add_space(Space::new("Office", "Level 1", office())).unwrap();
        let uid = model
            .add_thermal_zone(ThermalZone::new("Office ZN", SystemNumber::new(3).unwrap()))
            .unwrap();
        model.assign_space(id, &uid).unwrap();
        assert_eq!(model.space(id).unwrap().thermal_zone.as_ref(), Some(&uid));
        assert_eq!(model.thermal_zone(&uid).unwrap().spaces(), &[id]);
        assert!(model.unzoned_spaces().is_empty());

        model.remove_thermal_zones();
        assert!(model.thermal_zones().is_empty());
        assert!(model.thermal_zone(&uid).is_none());
        assert_eq!(model.unzoned_spaces().len(), 1);
    }

    #[test]
    fn test_zones_resolve_by_uid() {
        let mut model = BuildingModel::new("b");
        let system = SystemNumber::new(3).unwrap();
        let uids: Vec<UID> = (0..50)
            .map(|i| {
                model
                    .add_thermal_zone(ThermalZone::new(&format!("Zone {i}"), system))
                    .unwrap()
            })
            .collect();
        for (i, uid) in uids.iter().enumerate() {
            assert_eq!(model.thermal_zone(uid).unwrap().name, format!("Zone {i}"));
        }
        assert!(model.thermal_zone(&UID::from("missing")).is_none());
        let err = model.add_thermal_zone(ThermalZone::new("Zone 0", system));
        assert!(err.is_err());
        assert_eq!(model.thermal_zones().len(), 50);
    }

    #[test]
    fn test_unzoned_skips_undefined_and_uncounted() {
        let mut model = BuildingModel::new("b");
        model.add_story("Level 1").unwrap();
        let undefined = SpaceType::new("Space Function - undefined -", "- undefined -", "Office");
        model
            .add_space(Space::new("Plenum", "Level 1", Some(undefined)))
            .unwrap();
        model
            .add_space(Space::new("Shaft", "Level 1", office()).uncounted())
            .unwrap();
        assert!(model.unzoned_spaces().is_empty());
    }
}
