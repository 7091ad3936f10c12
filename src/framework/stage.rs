use super::{AutozoneContext, Bus};
use crate::error::Result;
use crate::model::BuildingModel;

/// One step of the autozoning pipeline.
///
/// Stages read upstream results from the [`Bus`] and publish their own there.
/// Only the model is mutated in place.
pub trait Stage {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    fn run(&mut self, ctx: &AutozoneContext, model: &mut BuildingModel, bus: &mut Bus)
    -> Result<()>;
}
