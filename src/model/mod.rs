//! Host building model: stories, spaces, thermal zones and plant objects.

pub mod arena;
pub mod building;
pub mod space;
pub mod zone;

pub use arena::{ArenaId, NamedArena, ObjectRef};
pub use building::BuildingModel;
pub use building::graph::{AdjacencyEdge, AdjacencyGraph};
pub use space::{
    HorizontalPlacement, ScheduleLetter, Space, SpaceType, Story, SystemNumber, VerticalPlacement,
};
pub use zone::{HotWaterLoop, ThermalZone, Thermostat};
