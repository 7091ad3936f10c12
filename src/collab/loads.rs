use std::collections::HashMap;

/// Design loads from a sizing run, in W per m² of floor area.
pub trait SizingLoads {
    /// Returns `(heating, cooling)` design loads for a space.
    fn design_loads(&self, space: &str) -> (f64, f64);
}

/// Loads stored from an earlier sizing run. Unknown spaces carry no load.
#[derive(Debug, Clone, Default)]
pub struct StoredSizingLoads {
    loads: HashMap<String, (f64, f64)>,
}

impl StoredSizingLoads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, space: &str, heating_w_per_m2: f64, cooling_w_per_m2: f64) -> Self {
        self.loads
            .insert(space.to_string(), (heating_w_per_m2, cooling_w_per_m2));
        self
    }
}

impl SizingLoads for StoredSizingLoads {
    fn design_loads(&self, space: &str) -> (f64, f64) {
        self.loads.get(space).copied().unwrap_or((0.0, 0.0))
    }
}
