use crate::error::{AutozoneError, Result};
use crate::framework::{AutozoneContext, Bus, Stage};
use crate::model::{
    ArenaId, BuildingModel, HorizontalPlacement, ScheduleLetter, SystemNumber, ThermalZone,
};
use crate::record::{SpaceMultipliers, SpaceRecord, SpaceRecords};
use crate::trace::{SpaceTrace, Trace};
use crate::UID;
use std::collections::HashMap;
use tracing::{debug, info};

/// Spaces sharing a key may share HVAC equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneGroupKey<'a> {
    pub system_number: SystemNumber,
    pub story: &'a str,
    pub schedule_letter: ScheduleLetter,
    pub horizontal_placement: HorizontalPlacement,
    pub is_dwelling_unit: bool,
}

/// Non-empty group of spaces with identical keys and the zones created for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGroup {
    pub system_number: SystemNumber,
    pub story: String,
    /// 1-based position of the story in name order.
    pub story_index: usize,
    pub schedule_letter: ScheduleLetter,
    pub horizontal_placement: HorizontalPlacement,
    pub is_dwelling_unit: bool,
    pub spaces: Vec<String>,
    /// One zone per space, parallel to `spaces`.
    pub zones: Vec<UID>,
}

/// Zone groups in enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneGroups(pub Vec<ZoneGroup>);

impl ZoneGroups {
    /// Groups served by `system`.
    pub fn for_system(&self, system: SystemNumber) -> impl Iterator<Item = &ZoneGroup> {
        self.0.iter().filter(move |g| g.system_number == system)
    }
}

/// Replaces the model's thermal zones by one zone per space.
///
/// Groups are enumerated by system, story, schedule letter, horizontal
/// placement and dwelling flag. Spaces of the sentinel undefined type are not
/// zoned. Publishes [`ZoneGroups`] and the per-space [`Trace`].
#[derive(Debug, Clone, Default)]
pub struct ZoneGrouper;

impl ZoneGrouper {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for ZoneGrouper {
    fn name(&self) -> &'static str {
        "zone_grouper"
    }

    fn run(
        &mut self,
        ctx: &AutozoneContext,
        model: &mut BuildingModel,
        bus: &mut Bus,
    ) -> Result<()> {
        let multipliers = bus.get::<SpaceMultipliers>().cloned().unwrap_or_default();
        let records = bus.require::<SpaceRecords>()?;

        let buckets = group_records(records)?;
        let story_names: Vec<String> = model.stories().iter().map(|s| s.name.clone()).collect();

        model.remove_thermal_zones();
        let mut groups = Vec::new();
        let mut zone_of: HashMap<ArenaId, String> = HashMap::new();
        for system_number in SystemNumber::all() {
            for (story_pos, story) in story_names.iter().enumerate() {
                for schedule_letter in ScheduleLetter::ZONING {
                    for horizontal_placement in HorizontalPlacement::ALL {
                        for is_dwelling_unit in [true, false] {
                            let key = ZoneGroupKey {
                                system_number,
                                story,
                                schedule_letter,
                                horizontal_placement,
                                is_dwelling_unit,
                            };
                            let Some(members) = buckets.get(&key) else {
                                continue;
                            };
                            let mut group = ZoneGroup {
                                system_number,
                                story: story.clone(),
                                story_index: story_pos + 1,
                                schedule_letter,
                                horizontal_placement,
                                is_dwelling_unit,
                                spaces: Vec::new(),
                                zones: Vec::new(),
                            };
                            for record in members {
                                let zone = create_zone(ctx, model, &group, record, &multipliers)?;
                                zone_of.insert(record.id, zone_name(&group, &record.name));
                                group.spaces.push(record.name.clone());
                                group.zones.push(zone);
                            }
                            debug!(
                                "Zone group sys {} story {} sch {} {} dwelling={}: {} spaces",
                                system_number,
                                story,
                                schedule_letter,
                                horizontal_placement,
                                is_dwelling_unit,
                                group.spaces.len()
                            );
                            groups.push(group);
                        }
                    }
                }
            }
        }

        let trace = Trace(
            records
                .iter()
                .map(|r| SpaceTrace::from_record(r, zone_of.get(&r.id).map(String::as_str)))
                .collect(),
        );
        info!(
            "Created {} thermal zones in {} groups",
            zone_of.len(),
            groups.len()
        );
        bus.put(ZoneGroups(groups));
        bus.put(trace);
        Ok(())
    }
}

/// Buckets zoned records by key, keeping record order within a bucket.
fn group_records(records: &SpaceRecords) -> Result<HashMap<ZoneGroupKey<'_>, Vec<&SpaceRecord>>> {
    let mut buckets: HashMap<ZoneGroupKey, Vec<&SpaceRecord>> = HashMap::new();
    for record in records.iter().filter(|r| r.is_zoned()) {
        let incomplete = |what: &str| {
            AutozoneError::InvalidModel(format!("space {} has no {what}", record.name))
        };
        let key = ZoneGroupKey {
            system_number: record
                .system_number
                .ok_or_else(|| incomplete("system number"))?,
            story: &record.story,
            schedule_letter: record
                .schedule_letter
                .ok_or_else(|| incomplete("schedule letter"))?,
            horizontal_placement: record
                .horizontal_placement
                .ok_or_else(|| incomplete("horizontal placement"))?,
            is_dwelling_unit: record.is_dwelling_unit,
        };
        buckets.entry(key).or_default().push(record);
    }
    Ok(buckets)
}

fn zone_name(group: &ZoneGroup, space: &str) -> String {
    format!(
        "Sp-{space} Sys-{} Flr-{} Sch-{} HPlcmt-{} ZN",
        group.system_number, group.story_index, group.schedule_letter, group.horizontal_placement
    )
}

fn create_zone(
    ctx: &AutozoneContext,
    model: &mut BuildingModel,
    group: &ZoneGroup,
    record: &SpaceRecord,
    multipliers: &SpaceMultipliers,
) -> Result<UID> {
    let thermostat = ctx
        .thermostats
        .lookup(&record.space_type_name)
        .ok_or_else(|| AutozoneError::ThermostatMissing {
            space_type: record.space_type_name.clone(),
            space: record.name.clone(),
        })?;
    let mut zone = ThermalZone::new(&zone_name(group, &record.name), group.system_number);
    zone.multiplier = multipliers.get(&record.name);
    zone.thermostat = Some(thermostat);
    let uid = model.add_thermal_zone(zone)?;
    model.assign_space(record.id, &uid)?;
    Ok(uid)
}
