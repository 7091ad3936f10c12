//! Error taxonomy of the autozoning pipeline.
//!
//! Every variant is fatal: the pipeline aborts on the first error and the
//! building model must be discarded. [`AutozoneError::PostCondition`] is the
//! only variant that aggregates several violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutozoneError {
    /// A configuration value is outside its admissible set.
    #[error("invalid {parameter} = {value:?} (expected one of: {})", .admissible.join(", "))]
    Validation {
        parameter: String,
        value: String,
        admissible: Vec<String>,
    },

    /// Model-level precondition that is not tied to an enumerated parameter.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Unknown or missing system selection category, or an empty rule table.
    #[error("classification failed: {0}")]
    Classification(String),

    /// A wildcard space has no neighbour with a resolved system.
    #[error("cannot determine adjacent system for space {space}")]
    AdjacencyResolution { space: String },

    /// No thermostat is registered for a space type name.
    #[error("thermostat not found for space type {space_type} (space {space})")]
    ThermostatMissing { space_type: String, space: String },

    /// Counted spaces left without a thermal zone.
    #[error("{} space(s) were not assigned a thermal zone: {}", .spaces.len(), .spaces.join("; "))]
    PostCondition { spaces: Vec<String> },
}

impl AutozoneError {
    pub(crate) fn validation(parameter: &str, value: &str, admissible: &[&str]) -> Self {
        Self::Validation {
            parameter: parameter.to_string(),
            value: value.to_string(),
            admissible: admissible.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AutozoneError>;
