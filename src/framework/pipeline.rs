use super::{AutozoneContext, Bus, Stage};
use crate::error::Result;
use crate::model::BuildingModel;
use tracing::info;

/// Runs stages in insertion order, stopping at the first error.
pub struct Pipeline<'a> {
    stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { stages: vec![] }
    }

    pub fn with_stage<S: Stage + 'a>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(
        &mut self,
        ctx: &AutozoneContext,
        model: &mut BuildingModel,
        bus: &mut Bus,
    ) -> Result<()> {
        for stage in self.stages.iter_mut() {
            info!("Running stage {}", stage.name());
            stage.run(ctx, model, bus)?;
        }
        Ok(())
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ReferenceData;
    use crate::collab::{StandardsTable, StaticGeometry, StoredSizingLoads, ThermostatSet};
    use crate::error::AutozoneError;

    struct Count;

    impl Stage for Count {
        fn name(&self) -> &'static str {
            "count"
        }

        fn run(
            &mut self,
            _ctx: &AutozoneContext,
            _model: &mut BuildingModel,
            bus: &mut Bus,
        ) -> Result<()> {
            let n = bus.get::<u32>().copied().unwrap_or(0);
            bus.put(n + 1);
            Ok(())
        }
    }

    struct Fail;

    impl Stage for Fail {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn run(
            &mut self,
            _ctx: &AutozoneContext,
            _model: &mut BuildingModel,
            _bus: &mut Bus,
        ) -> Result<()> {
            Err(AutozoneError::InvalidModel("boom".to_string()))
        }
    }

    #[test]
    fn test_stages_run_in_order_and_stop_on_error() {
        let reference = ReferenceData::necb().unwrap();
        let standards = StandardsTable::default();
        let geometry = StaticGeometry::default();
        let loads = StoredSizingLoads::new();
        let thermostats = ThermostatSet::new();
        let ctx = AutozoneContext::new(
            &reference,
            &standards,
            &standards,
            &geometry,
            &loads,
            &thermostats,
        );
        let mut model = BuildingModel::new("b");
        let mut bus = Bus::new();

        let mut pipeline = Pipeline::new().with_stage(Count).with_stage(Count);
        assert_eq!(pipeline.stage_names(), vec!["count", "count"]);
        pipeline.run(&ctx, &mut model, &mut bus).unwrap();
        assert_eq!(bus.get::<u32>(), Some(&2));

        let mut failing = Pipeline::new().with_stage(Fail).with_stage(Count);
        assert!(failing.run(&ctx, &mut model, &mut bus).is_err());
        assert_eq!(bus.get::<u32>(), Some(&2));
    }
}
