use crate::classify::ReferenceData;
use crate::collab::{
    GeometryProvider, ScheduleClassifier, SizingLoads, StandardsLookup, ThermostatRegistry,
};

/// Read-only collaborators and reference data shared by all stages.
///
/// Stages derive what they need from these and publish their results on the
/// bus, nothing here is mutated during a run.
pub struct AutozoneContext<'a> {
    pub reference: &'a ReferenceData,
    pub standards: &'a dyn StandardsLookup,
    pub schedules: &'a dyn ScheduleClassifier,
    pub geometry: &'a dyn GeometryProvider,
    pub loads: &'a dyn SizingLoads,
    pub thermostats: &'a dyn ThermostatRegistry,
}

impl<'a> AutozoneContext<'a> {
    pub fn new(
        reference: &'a ReferenceData,
        standards: &'a dyn StandardsLookup,
        schedules: &'a dyn ScheduleClassifier,
        geometry: &'a dyn GeometryProvider,
        loads: &'a dyn SizingLoads,
        thermostats: &'a dyn ThermostatRegistry,
    ) -> Self {
        Self {
            reference,
            standards,
            schedules,
            geometry,
            loads,
            thermostats,
        }
    }
}
