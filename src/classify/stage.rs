use super::activity::resolve_building_activity;
use super::keyword::classify;
use crate::error::{AutozoneError, Result};
use crate::framework::{AutozoneContext, Bus, Stage};
use crate::model::BuildingModel;
use crate::record::{SpaceRecord, SpaceRecords};
use tracing::{debug, info};

/// Classifies every counted space and the building as a whole.
///
/// Publishes [`SpaceRecords`] and the
/// [`BuildingActivity`](super::activity::BuildingActivity).
#[derive(Debug, Clone, Default)]
pub struct ActivityClassifier {
    building_activity_override: Option<String>,
}

impl ActivityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, building_activity: Option<String>) -> Self {
        self.building_activity_override = building_activity;
        self
    }
}

impl Stage for ActivityClassifier {
    fn name(&self) -> &'static str {
        "activity_classifier"
    }

    fn run(
        &mut self,
        ctx: &AutozoneContext,
        model: &mut BuildingModel,
        bus: &mut Bus,
    ) -> Result<()> {
        let mut records = Vec::new();
        for (id, space) in model.spaces() {
            if !space.part_of_total_floor_area {
                debug!("Skipping space {} not counted in floor area", space.name);
                continue;
            }
            let space_type = space.space_type.as_ref().ok_or_else(|| {
                AutozoneError::Classification(format!("space {} has no space type", space.name))
            })?;

            let mut record = SpaceRecord::new(id, &space.name, &space.story);
            record.floor_area_m2 = ctx.geometry.floor_area(&space.name)?;
            record.raw_label = space_type.standards_space_type.clone();
            record.space_activity = classify(&record.raw_label, &ctx.reference.spaces)?;
            record.standards_space_type = space_type.standards_space_type.clone();
            record.standards_building_type = space_type.standards_building_type.clone();
            record.space_type_name = space_type.name.clone();
            record.is_undefined = space_type.is_undefined();
            debug!(
                "Space {} classified as {} from {:?}",
                record.name, record.space_activity, record.raw_label
            );
            records.push(record);
        }

        let activity = resolve_building_activity(
            self.building_activity_override.as_deref(),
            model.standards_building_type.as_deref(),
            records
                .iter()
                .map(|r| (r.space_activity.as_str(), r.floor_area_m2)),
            ctx.reference,
        )?;
        info!(
            "Classified {} spaces, building activity {} ({:?})",
            records.len(),
            activity.key,
            activity.tier
        );

        bus.put(SpaceRecords(records));
        bus.put(activity);
        Ok(())
    }
}
