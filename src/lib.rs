pub mod autozone;
pub mod classify;
pub mod collab;
pub mod error;
pub mod framework;
pub mod hvac;
pub mod model;
mod name;
pub mod record;
pub mod trace;
mod uid;

// Prelude
pub use autozone::{Autozone, AutozoneOptions, AutozoneReport};
pub use classify::{BuildingActivity, ReferenceData, classify};
pub use error::{AutozoneError, Result};
pub use framework::AutozoneContext;
pub use hvac::{FuelTypeSet, SystemFuelDefaults};
pub use model::{BuildingModel, Space, SpaceType, SystemNumber};
pub use name::{HasName, SortByName};
pub use trace::SpaceTrace;
pub use uid::UID;
