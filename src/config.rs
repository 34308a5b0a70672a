//! Simulation configuration. Values are supplied by the external driver,
//! either directly or via a JSON file, and validated once before any
//! construction work begins.

use std::path::Path;

use serde::Deserialize;

use crate::error::CampusError;
use crate::locations::Archetype;

/// Top-level configuration for population and inventory construction.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Total number of agents to synthesize.
    pub num_persons: usize,
    /// Probability that a student complies with active regulations.
    pub student_compliance_prob: f64,
    /// Probability that a non-student complies with active regulations.
    pub regulation_compliance_prob: f64,
    /// Base seed for the run-wide random stream.
    pub seed: u64,

    // Location inventory, by archetype.
    pub num_apartments: usize,
    pub num_shared_apartments: usize,
    pub num_dorms: usize,
    pub num_parties: usize,
    pub num_campus_buildings: usize,
    pub num_hybrid_campus_buildings: usize,
    pub num_restaurants: usize,
    pub num_bars: usize,
    pub num_grocery_stores: usize,
    pub num_retail_stores: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            num_persons: 1000,
            student_compliance_prob: 0.9,
            regulation_compliance_prob: 0.99,
            seed: 0,
            num_apartments: 1000,
            num_shared_apartments: 0,
            num_dorms: 5,
            num_parties: 10,
            num_campus_buildings: 10,
            num_hybrid_campus_buildings: 10,
            num_restaurants: 20,
            num_bars: 10,
            num_grocery_stores: 10,
            num_retail_stores: 10,
        }
    }
}

impl SimConfig {
    /// Reads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<SimConfig, CampusError> {
        let data = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges. Inventory sufficiency is not checked here; that
    /// is the assignment engine's precondition.
    pub fn validate(&self) -> Result<(), CampusError> {
        if self.num_persons == 0 {
            return Err("num_persons must be nonzero".into());
        }
        for (name, p) in [
            ("student_compliance_prob", self.student_compliance_prob),
            ("regulation_compliance_prob", self.regulation_compliance_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{name} must lie in [0, 1], got {p}").into());
            }
        }
        Ok(())
    }

    /// The configured inventory size for one archetype.
    #[must_use]
    pub fn location_count(&self, archetype: Archetype) -> usize {
        match archetype {
            Archetype::Apartment => self.num_apartments,
            Archetype::SharedApartment => self.num_shared_apartments,
            Archetype::Dorm => self.num_dorms,
            Archetype::Party => self.num_parties,
            Archetype::Campus => self.num_campus_buildings,
            Archetype::HybridCampus => self.num_hybrid_campus_buildings,
            Archetype::Restaurant => self.num_restaurants,
            Archetype::Bar => self.num_bars,
            Archetype::GroceryStore => self.num_grocery_stores,
            Archetype::RetailStore => self.num_retail_stores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let config = SimConfig {
            student_compliance_prob: 1.5,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_population() {
        let config = SimConfig {
            num_persons: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"num_persons": 500, "seed": 7, "num_dorms": 3}}"#
        )
        .unwrap();

        let config = SimConfig::from_file(file.path()).unwrap();
        assert_eq!(config.num_persons, 500);
        assert_eq!(config.seed, 7);
        assert_eq!(config.num_dorms, 3);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.num_parties, SimConfig::default().num_parties);
    }

    #[test]
    fn rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"num_peple": 500}}"#).unwrap();
        assert!(SimConfig::from_file(file.path()).is_err());
    }
}
