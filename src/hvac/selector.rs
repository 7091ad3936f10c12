use super::category::SystemSelectionCategory;
use crate::error::{AutozoneError, Result};
use crate::framework::{AutozoneContext, Bus, Stage};
use crate::model::{BuildingModel, ScheduleLetter, SpaceType};
use crate::record::{ScheduleLetters, SpaceMultipliers, SpaceRecord, SpaceRecords};
use tracing::{debug, info};

/// Selects the NECB system of every space record.
///
/// Reads [`SpaceRecords`] and the optional [`SpaceMultipliers`] from the bus,
/// publishes [`ScheduleLetters`]. Wildcard spaces are left without a system.
#[derive(Debug, Clone, Default)]
pub struct SpaceSystemSelector;

impl SpaceSystemSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for SpaceSystemSelector {
    fn name(&self) -> &'static str {
        "space_system_selector"
    }

    fn run(
        &mut self,
        ctx: &AutozoneContext,
        model: &mut BuildingModel,
        bus: &mut Bus,
    ) -> Result<()> {
        let stories = story_count(model)?;
        let multipliers = bus.get::<SpaceMultipliers>().cloned().unwrap_or_default();
        let records = bus.require_mut::<SpaceRecords>()?;

        let mut letters = ScheduleLetters::default();
        for record in records.iter_mut() {
            let multiplier = multipliers.get(&record.name);
            select(ctx, record, stories, multiplier)?;
            if let Some(letter) = record.raw_schedule_letter {
                if !letters.0.contains(&letter) {
                    letters.0.push(letter);
                }
            }
        }
        apply_dominant_schedule(records)?;

        let unresolved = records
            .iter()
            .filter(|r| r.system_number.is_none())
            .count();
        info!(
            "Selected systems for {} spaces ({} wildcard) in a {}-story building",
            records.len(),
            unresolved,
            stories
        );
        bus.put(letters);
        Ok(())
    }
}

fn story_count(model: &BuildingModel) -> Result<u32> {
    if model.stories().is_empty() {
        return Err(AutozoneError::validation(
            "building stories",
            "none",
            &["at least one story"],
        ));
    }
    match model.above_ground_stories {
        Some(n) if n > 0 => Ok(n),
        Some(n) => Err(AutozoneError::validation(
            "above_ground_stories",
            &n.to_string(),
            &["an integer >= 1"],
        )),
        None => Err(AutozoneError::validation(
            "above_ground_stories",
            "missing",
            &["an integer >= 1"],
        )),
    }
}

fn select(
    ctx: &AutozoneContext,
    record: &mut SpaceRecord,
    stories: u32,
    multiplier: u32,
) -> Result<()> {
    let properties = ctx
        .standards
        .space_type_properties(&record.standards_space_type, &record.standards_building_type)
        .ok_or_else(|| {
            AutozoneError::Classification(format!(
                "could not find NECB system selection type for space {} and space type {}",
                record.name, record.standards_space_type
            ))
        })?;
    let category =
        SystemSelectionCategory::from_standards(properties.system_selection_category.as_deref())?;

    if record.is_undefined {
        record.heating_load_kw = 0.0;
        record.cooling_load_kw = 0.0;
    } else {
        let (heating, cooling) = ctx.loads.design_loads(&record.name);
        let scale = record.floor_area_m2 * f64::from(multiplier) / 1000.0;
        record.heating_load_kw = heating * scale;
        record.cooling_load_kw = cooling * scale;
    }

    let (system, is_dwelling_unit) = category.select_system(stories, record.cooling_load_kw);
    record.system_selection_category = Some(category);
    record.system_number = system;
    record.is_dwelling_unit = is_dwelling_unit;

    let (horizontal, vertical) = ctx.geometry.placement(&record.name)?;
    record.horizontal_placement = Some(horizontal);
    record.vertical_placement = Some(vertical);

    let space_type = SpaceType::new(
        &record.space_type_name,
        &record.standards_space_type,
        &record.standards_building_type,
    );
    let letter = ctx.schedules.schedule_letter(&space_type)?;
    record.raw_schedule_letter = Some(letter);
    record.schedule_letter = Some(letter);

    debug!(
        "Space {}: category {}, system {:?}, schedule {}",
        record.name,
        category,
        system.map(|s| s.get()),
        letter
    );
    Ok(())
}

/// Schedule letter carrying the most floor area among zoned, non-wildcard spaces.
///
/// Only letters present on such a space compete, ties go to the earlier letter.
/// `None` when every zoned space is a wildcard.
pub fn dominant_schedule(records: &SpaceRecords) -> Option<ScheduleLetter> {
    let mut areas = [None::<f64>; ScheduleLetter::ZONING.len()];
    for record in records.iter().filter(|r| r.is_zoned()) {
        let Some(letter) = record.raw_schedule_letter else {
            continue;
        };
        if let Some(i) = ScheduleLetter::ZONING.iter().position(|l| *l == letter) {
            *areas[i].get_or_insert(0.0) += record.floor_area_m2;
        }
    }
    let mut best: Option<(ScheduleLetter, f64)> = None;
    for (letter, area) in ScheduleLetter::ZONING.iter().zip(areas) {
        let Some(area) = area else {
            continue;
        };
        if best.is_none_or(|(_, a)| area > a) {
            best = Some((*letter, area));
        }
    }
    best.map(|(letter, _)| letter)
}

/// Replaces `*` schedules of zoned spaces by the building's dominant letter.
fn apply_dominant_schedule(records: &mut SpaceRecords) -> Result<()> {
    let has_wildcards = records
        .iter()
        .any(|r| r.is_zoned() && r.schedule_letter == Some(ScheduleLetter::Wildcard));
    if !has_wildcards {
        return Ok(());
    }
    let dominant = dominant_schedule(records).ok_or_else(|| {
        AutozoneError::Classification(
            "cannot determine a dominant schedule: every zoned space is a wildcard".to_string(),
        )
    })?;
    debug!("Dominant schedule is {dominant}");
    for record in records.iter_mut().filter(|r| r.is_zoned()) {
        if record.schedule_letter == Some(ScheduleLetter::Wildcard) {
            record.schedule_letter = Some(dominant);
        }
    }
    Ok(())
}
