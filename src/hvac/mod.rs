//! NECB system selection, zoning and equipment assignment stages.

pub mod assign;
pub mod category;
pub mod config;
pub mod selector;
pub mod template;
pub mod wildcard;
pub mod zoning;

pub use assign::{SystemAssigner, check_zone_assignment};
pub use category::SystemSelectionCategory;
pub use config::{
    BoilerFuel, ChillerType, FanType, FuelTypeSet, HeatingMedium, MakeUpAirHeatingCoil,
    MauCoolingType, RooftopHeatingCoil, SystemFuelDefaults,
};
pub use selector::{SpaceSystemSelector, dominant_schedule};
pub use template::{FanCoilKind, SystemTemplate, SystemTemplateBinding};
pub use wildcard::{WildcardResolver, resolve_wildcards};
pub use zoning::{ZoneGroup, ZoneGroupKey, ZoneGroups, ZoneGrouper};
