//! Interfaces of the external collaborators the pipeline consumes.
//!
//! Each trait has a small in-memory implementation so the pipeline can run
//! against tabulated data.

pub mod equipment;
pub mod geometry;
pub mod loads;
pub mod standards;
pub mod thermostat;

pub use equipment::{BuilderCall, EquipmentTemplateBuilder, RecordingBuilder};
pub use geometry::{GeometryProvider, StaticGeometry};
pub use loads::{SizingLoads, StoredSizingLoads};
pub use standards::{ScheduleClassifier, SpaceTypeProperties, StandardsLookup, StandardsTable};
pub use thermostat::{ThermostatRegistry, ThermostatSet};
