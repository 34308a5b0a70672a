use log::info;
use strum::IntoEnumIterator;

use crate::config::SimConfig;
use crate::locations::{Archetype, Location, LocationId};
use crate::random::SimRng;
use crate::time::SimTime;

/// Owns every location instance and serves typed inventory lookups.
///
/// Construction order is fixed (archetype declaration order, then insertion
/// order within an archetype), so location ids and the gathering-schedule
/// draws they trigger are reproducible for a fixed seed.
#[derive(Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    #[must_use]
    pub fn new() -> LocationRegistry {
        LocationRegistry::default()
    }

    /// Builds the full inventory from configured per-archetype counts.
    /// Gathering schedules are drawn here, in construction order; call this
    /// before population construction to keep the draw order stable.
    #[must_use]
    pub fn from_config(config: &SimConfig, rng: &mut SimRng) -> LocationRegistry {
        let mut registry = LocationRegistry::new();
        for archetype in Archetype::iter() {
            let count = config.location_count(archetype);
            for _ in 0..count {
                registry.add_location(archetype, rng);
            }
            info!("constructed {count} locations of type {archetype:?}");
        }
        registry
    }

    /// Creates one location of the given archetype, drawing its gathering
    /// schedule if the archetype has one.
    pub fn add_location(&mut self, archetype: Archetype, rng: &mut SimRng) -> LocationId {
        let id = LocationId(self.locations.len());
        self.locations.push(Location::new(id, archetype, rng));
        id
    }

    /// All location ids of one archetype, in construction order.
    #[must_use]
    pub fn location_ids_of_type(&self, archetype: Archetype) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|location| location.archetype() == archetype)
            .map(Location::id)
            .collect()
    }

    /// The combined apartment inventory (both apartment archetypes), in
    /// construction order. This is the non-dorm housing pool.
    #[must_use]
    pub fn apartment_ids(&self) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|location| location.archetype().is_apartment())
            .map(Location::id)
            .collect()
    }

    /// Ids of locations of the archetype that admit visitors at `time`.
    #[must_use]
    pub fn open_location_ids_of_type(&self, archetype: Archetype, time: SimTime) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|location| location.archetype() == archetype && location.is_open(time))
            .map(Location::id)
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Location> {
        self.locations.iter()
    }

    /// Per-tick time synchronization across the whole inventory; the
    /// stepping driver calls this once per simulated instant.
    pub fn sync_all(&mut self, time: SimTime) {
        for location in &mut self.locations {
            location.sync(time);
        }
    }
}
