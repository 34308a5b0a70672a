//! Recurring behavioral routines and their one-time assignment to agents.
//!
//! A [`Routine`] names a trigger policy, a destination archetype, an
//! optional anchor location and an explore probability. The external
//! stepping driver consults each agent's routine lists every tick; this
//! module only furnishes the data and the resolution rules.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::locations::{Archetype, LocationId, LocationRegistry};
use crate::people::{Person, PersonRole};
use crate::random::SimRng;
use crate::time::SimTime;

/// Explore probability used when a routine constructor does not override it.
pub const DEFAULT_EXPLORE_PROBABILITY: f64 = 0.3;

/// Hour at which mid-day routines fire.
pub const MID_DAY_HOUR: u8 = 12;

/// When a routine becomes a candidate destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoutineTrigger {
    /// Fires every `interval` simulated days, irrespective of weekday.
    EveryNDays { interval: u32 },
    /// Fires on weekend days only.
    Weekend,
    /// Fires at midday on weekdays.
    MidDayDuringWeek,
    /// Fires whenever the anchor location reports a gathering in progress.
    Social,
}

/// A recurring behavioral rule attached to an agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Routine {
    pub trigger: RoutineTrigger,
    pub archetype: Archetype,
    /// Habitual venue. A routine with no anchor always resolves by
    /// exploration.
    pub anchor: Option<LocationId>,
    pub explore_probability: f64,
}

impl Routine {
    /// A periodic visit firing every `interval` days.
    #[must_use]
    pub fn triggered(anchor: Option<LocationId>, archetype: Archetype, interval: u32) -> Routine {
        Routine {
            trigger: RoutineTrigger::EveryNDays { interval },
            archetype,
            anchor,
            explore_probability: DEFAULT_EXPLORE_PROBABILITY,
        }
    }

    /// A weekend-only visit.
    #[must_use]
    pub fn weekend(anchor: Option<LocationId>, archetype: Archetype) -> Routine {
        Routine {
            trigger: RoutineTrigger::Weekend,
            archetype,
            anchor,
            explore_probability: DEFAULT_EXPLORE_PROBABILITY,
        }
    }

    /// A weekday midday visit (a cafeteria run from the workplace).
    #[must_use]
    pub fn mid_day_during_week(anchor: Option<LocationId>, archetype: Archetype) -> Routine {
        Routine {
            trigger: RoutineTrigger::MidDayDuringWeek,
            archetype,
            anchor,
            explore_probability: DEFAULT_EXPLORE_PROBABILITY,
        }
    }

    /// An opportunistic visit to `anchor` driven by that location's own
    /// gathering schedule. Never explores.
    #[must_use]
    pub fn social(anchor: LocationId, archetype: Archetype) -> Routine {
        Routine {
            trigger: RoutineTrigger::Social,
            archetype,
            anchor: Some(anchor),
            explore_probability: 0.0,
        }
    }

    #[must_use]
    pub fn with_explore_probability(mut self, explore_probability: f64) -> Routine {
        debug_assert!((0.0..=1.0).contains(&explore_probability));
        self.explore_probability = explore_probability;
        self
    }

    /// Whether the trigger condition holds at `time`. Social routines
    /// consult the anchor's gathering flag as of its last sync.
    #[must_use]
    pub fn is_due(&self, time: SimTime, registry: &LocationRegistry) -> bool {
        match self.trigger {
            RoutineTrigger::EveryNDays { interval } => time.day % interval == 0,
            RoutineTrigger::Weekend => time.is_weekend(),
            RoutineTrigger::MidDayDuringWeek => !time.is_weekend() && time.hour == MID_DAY_HOUR,
            RoutineTrigger::Social => match self.anchor {
                Some(anchor) => registry.get(anchor).social_gathering(),
                None => false,
            },
        }
    }

    /// Resolves the destination for a firing routine. With probability
    /// `explore_probability` (always, when unanchored) the destination is a
    /// uniformly chosen location of the target archetype currently open at
    /// `time`; otherwise it is the anchor. Returns `None` when exploration
    /// finds nothing open.
    pub fn resolve_destination(
        &self,
        time: SimTime,
        registry: &LocationRegistry,
        rng: &mut SimRng,
    ) -> Option<LocationId> {
        let explore = match self.anchor {
            None => true,
            Some(_) => rng.random_bool(self.explore_probability),
        };
        if explore {
            let open = registry.open_location_ids_of_type(self.archetype, time);
            open.choose(rng).copied()
        } else {
            self.anchor
        }
    }
}

fn student_routines(home: LocationId, registry: &LocationRegistry) -> Vec<Routine> {
    vec![
        Routine::triggered(None, Archetype::GroceryStore, 7),
        Routine::triggered(None, Archetype::RetailStore, 7),
        // Social venues get a raised explore probability.
        Routine::triggered(None, Archetype::Restaurant, 3).with_explore_probability(0.75),
        Routine::weekend(Some(home), Archetype::Bar).with_explore_probability(0.6),
        Routine::weekend(Some(home), Archetype::Party).with_explore_probability(0.8),
        Routine::social(home, registry.get(home).archetype()),
    ]
}

fn faculty_during_work_routines(work: Option<LocationId>) -> Vec<Routine> {
    // ~cafeteria during work
    vec![Routine::mid_day_during_week(work, Archetype::Restaurant)]
}

fn faculty_outside_work_routines(home: LocationId, registry: &LocationRegistry) -> Vec<Routine> {
    vec![
        Routine::triggered(None, Archetype::GroceryStore, 7),
        Routine::triggered(None, Archetype::RetailStore, 7),
        Routine::weekend(None, Archetype::Restaurant).with_explore_probability(0.7),
        Routine::triggered(Some(home), Archetype::Bar, 3).with_explore_probability(0.5),
        Routine::social(home, registry.get(home).archetype()),
    ]
}

/// Attaches the role-appropriate routine lists to every agent. Idempotent:
/// re-running replaces each list rather than appending.
pub fn assign_routines(persons: &mut [Person], registry: &LocationRegistry) {
    for person in persons {
        match person.role {
            PersonRole::Student => {
                person.outside_school_routines = student_routines(person.home, registry);
            }
            PersonRole::Faculty => {
                person.during_work_routines = faculty_during_work_routines(person.work);
                person.outside_work_routines = faculty_outside_work_routines(person.home, registry);
            }
            PersonRole::Other => {}
        }
    }
}
