use crate::error::{AutozoneError, Result};
use crate::model::{AdjacencyGraph, HorizontalPlacement, VerticalPlacement};
use std::collections::HashMap;

/// Geometric queries answered by the host geometry model.
pub trait GeometryProvider {
    /// Floor area of a space in m².
    fn floor_area(&self, space: &str) -> Result<f64>;

    /// Neighbours ranked by descending shared wall area.
    fn adjacent_spaces(&self, space: &str, same_floor_only: bool) -> Vec<(String, f64)>;

    /// Placement of the space on its floor and within the building.
    fn placement(&self, space: &str) -> Result<(HorizontalPlacement, VerticalPlacement)>;
}

/// In-memory geometry: tabulated areas and placements plus an adjacency graph.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    areas: HashMap<String, f64>,
    placements: HashMap<String, (HorizontalPlacement, VerticalPlacement)>,
    graph: AdjacencyGraph,
}

impl StaticGeometry {
    pub fn new(graph: AdjacencyGraph) -> Self {
        Self {
            graph,
            ..Default::default()
        }
    }

    pub fn with_space(
        mut self,
        space: &str,
        floor_area_m2: f64,
        horizontal: HorizontalPlacement,
        vertical: VerticalPlacement,
    ) -> Self {
        self.areas.insert(space.to_string(), floor_area_m2);
        self.placements
            .insert(space.to_string(), (horizontal, vertical));
        self
    }
}

impl GeometryProvider for StaticGeometry {
    fn floor_area(&self, space: &str) -> Result<f64> {
        self.areas.get(space).copied().ok_or_else(|| {
            AutozoneError::InvalidModel(format!("no floor area known for space {space}"))
        })
    }

    fn adjacent_spaces(&self, space: &str, same_floor_only: bool) -> Vec<(String, f64)> {
        self.graph.adjacent(space, same_floor_only)
    }

    fn placement(&self, space: &str) -> Result<(HorizontalPlacement, VerticalPlacement)> {
        self.placements.get(space).copied().ok_or_else(|| {
            AutozoneError::InvalidModel(format!("no placement known for space {space}"))
        })
    }
}
