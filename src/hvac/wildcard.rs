use crate::collab::GeometryProvider;
use crate::error::{AutozoneError, Result};
use crate::framework::{AutozoneContext, Bus, Stage};
use crate::model::BuildingModel;
use crate::record::SpaceRecords;
use tracing::{debug, info, warn};

/// Gives every wildcard space the system of an adjacent space.
///
/// Spaces are visited once in name order, so a wildcard can copy from a
/// wildcard resolved earlier in the pass but not from one resolved later.
#[derive(Debug, Clone, Default)]
pub struct WildcardResolver;

impl WildcardResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for WildcardResolver {
    fn name(&self) -> &'static str {
        "wildcard_resolver"
    }

    fn run(
        &mut self,
        ctx: &AutozoneContext,
        _model: &mut BuildingModel,
        bus: &mut Bus,
    ) -> Result<()> {
        let records = bus.require_mut::<SpaceRecords>()?;
        let resolved = resolve_wildcards(records, ctx.geometry)?;
        info!("Resolved {resolved} wildcard spaces");
        Ok(())
    }
}

/// Resolves wildcard records in place and returns how many were resolved.
pub fn resolve_wildcards(
    records: &mut SpaceRecords,
    geometry: &dyn GeometryProvider,
) -> Result<usize> {
    let mut order: Vec<usize> = (0..records.len())
        .filter(|&i| records.0[i].system_number.is_none())
        .collect();
    order.sort_by(|&a, &b| records.0[a].name.cmp(&records.0[b].name));

    for &i in order.iter() {
        let name = records.0[i].name.clone();
        let mut neighbours = geometry.adjacent_spaces(&name, true);
        if neighbours.is_empty() {
            warn!("No adjacent spaces for {name} on the same floor, looking at other floors");
            neighbours = geometry.adjacent_spaces(&name, false);
        }

        let source = neighbours.iter().find_map(|(neighbour, _)| {
            records
                .get(neighbour)
                .and_then(|r| r.system_number.map(|s| (neighbour.clone(), s)))
        });
        let Some((neighbour, system)) = source else {
            return Err(AutozoneError::AdjacencyResolution { space: name });
        };

        debug!("Wildcard space {name} takes system {system} from {neighbour}");
        let record = &mut records.0[i];
        record.system_number = Some(system);
        record.resolved_from = Some(neighbour);
    }
    Ok(order.len())
}
