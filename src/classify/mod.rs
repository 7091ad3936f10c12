//! Keyword classification of building and space labels.

pub mod activity;
pub mod keyword;
pub mod reference;
pub mod rule;
pub mod stage;

pub use activity::{ActivityTier, BuildingActivity, resolve_building_activity};
pub use keyword::{ClassifyOutcome, classify, classify_outcome};
pub use reference::ReferenceData;
pub use rule::{BuildingAttributes, ClassificationRule, RuleTable, SpaceAttributes};
pub use stage::ActivityClassifier;
