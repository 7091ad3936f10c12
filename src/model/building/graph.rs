//! Space adjacency graph.
//!
//! Built from wall-sharing edges supplied by the geometry collaborator. Each
//! space maps to its neighbours ranked by descending shared wall area.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a shared wall between two spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyEdge {
    pub space_a: String,
    pub space_b: String,
    /// Shared wall area in m².
    pub shared_wall_area_m2: f64,
    /// Both spaces are on the same story.
    pub same_floor: bool,
}

impl AdjacencyEdge {
    pub fn new(space_a: &str, space_b: &str, shared_wall_area_m2: f64, same_floor: bool) -> Self {
        Self {
            space_a: space_a.to_string(),
            space_b: space_b.to_string(),
            shared_wall_area_m2,
            same_floor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Neighbour {
    space: String,
    shared_wall_area_m2: f64,
    same_floor: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    neighbours: HashMap<String, Vec<Neighbour>>,
}

impl AdjacencyGraph {
    /// Builds the graph. Repeated pairs accumulate their shared area.
    pub fn from_edges(edges: &[AdjacencyEdge]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            if edge.space_a == edge.space_b {
                continue;
            }
            graph.connect(&edge.space_a, &edge.space_b, edge);
            graph.connect(&edge.space_b, &edge.space_a, edge);
        }
        for list in graph.neighbours.values_mut() {
            list.sort_by(|a, b| {
                b.shared_wall_area_m2
                    .total_cmp(&a.shared_wall_area_m2)
                    .then_with(|| a.space.cmp(&b.space))
            });
        }
        graph
    }

    fn connect(&mut self, from: &str, to: &str, edge: &AdjacencyEdge) {
        let list = self.neighbours.entry(from.to_string()).or_default();
        match list.iter_mut().find(|n| n.space == to) {
            Some(n) => n.shared_wall_area_m2 += edge.shared_wall_area_m2,
            None => list.push(Neighbour {
                space: to.to_string(),
                shared_wall_area_m2: edge.shared_wall_area_m2,
                same_floor: edge.same_floor,
            }),
        }
    }

    /// Neighbours of `space` ranked by descending shared wall area.
    ///
    /// With `same_floor_only == false` neighbours from every floor are returned.
    pub fn adjacent(&self, space: &str, same_floor_only: bool) -> Vec<(String, f64)> {
        self.neighbours
            .get(space)
            .map(|list| {
                list.iter()
                    .filter(|n| !same_floor_only || n.same_floor)
                    .map(|n| (n.space.clone(), n.shared_wall_area_m2))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns all edges as a flat list, one per unordered pair.
    pub fn edges(&self) -> Vec<AdjacencyEdge> {
        let mut edges = Vec::new();
        for (space, list) in self.neighbours.iter() {
            for n in list.iter().filter(|n| space < &n.space) {
                edges.push(AdjacencyEdge::new(
                    space,
                    &n.space,
                    n.shared_wall_area_m2,
                    n.same_floor,
                ));
            }
        }
        edges.sort_by(|a, b| (&a.space_a, &a.space_b).cmp(&(&b.space_a, &b.space_b)));
        edges
    }
}
