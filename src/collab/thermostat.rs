use crate::model::Thermostat;
use std::collections::HashMap;

/// Registry of thermostats keyed by space type name.
pub trait ThermostatRegistry {
    fn lookup(&self, space_type_name: &str) -> Option<Thermostat>;
}

#[derive(Debug, Clone, Default)]
pub struct ThermostatSet {
    thermostats: HashMap<String, Thermostat>,
}

impl ThermostatSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, space_type_name: &str, thermostat: Thermostat) {
        self.thermostats
            .insert(space_type_name.to_string(), thermostat);
    }

    /// Registers a default "<space type> Thermostat" for each space type name.
    pub fn for_space_types<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for name in names {
            let thermostat = Thermostat::new(
                &format!("{name} Thermostat"),
                &format!("{name} Heating Setpoint"),
                &format!("{name} Cooling Setpoint"),
            );
            set.insert(name, thermostat);
        }
        set
    }
}

impl ThermostatRegistry for ThermostatSet {
    fn lookup(&self, space_type_name: &str) -> Option<Thermostat> {
        self.thermostats.get(space_type_name).cloned()
    }
}
