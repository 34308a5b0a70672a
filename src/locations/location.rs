use log::trace;
use rand::Rng;

use crate::locations::{Archetype, ContactRate, LocationId, GATHERINGS_PER_YEAR};
use crate::random::SimRng;
use crate::time::{SimTime, SimTimeWindow, DAYS_IN_A_YEAR};

/// A single physical location. Parameters come from the archetype table;
/// the gathering schedule (for residential and party archetypes) is drawn
/// once at construction and never redrawn.
#[derive(Clone, Debug)]
pub struct Location {
    id: LocationId,
    archetype: Archetype,
    contact_rate: ContactRate,
    open_window: Option<SimTimeWindow>,
    gathering_schedule: Option<SimTimeWindow>,
    social_gathering: bool,
}

impl Location {
    pub(super) fn new(id: LocationId, archetype: Archetype, rng: &mut SimRng) -> Location {
        let gathering_schedule = archetype.gathering_hours().map(|hours| {
            let first_day = archetype.gathering_first_day();
            let days: Vec<u32> = (0..GATHERINGS_PER_YEAR)
                .map(|_| rng.random_range(first_day..DAYS_IN_A_YEAR))
                .collect();
            trace!("location {id} ({archetype:?}) gathering days: {days:?}");
            SimTimeWindow::new().with_hours(hours).with_days(days)
        });

        Location {
            id,
            archetype,
            contact_rate: archetype.contact_rate(),
            open_window: archetype.open_window(),
            gathering_schedule,
            social_gathering: archetype.gathering_by_default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> LocationId {
        self.id
    }

    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    #[must_use]
    pub fn contact_rate(&self) -> ContactRate {
        self.contact_rate
    }

    /// Re-evaluates time-dependent state for the current instant. For
    /// locations with a gathering schedule the social-gathering flag becomes
    /// a pure membership test of the instant; it is not sticky across ticks.
    pub fn sync(&mut self, time: SimTime) {
        if let Some(schedule) = &self.gathering_schedule {
            self.social_gathering = schedule.contains(time);
        }
    }

    /// Whether a social gathering is in progress as of the last `sync`.
    /// Standing social venues (restaurants, bars) report `true` throughout.
    #[must_use]
    pub fn social_gathering(&self) -> bool {
        self.social_gathering
    }

    /// Whether the location admits visitors at `time`. Residential and party
    /// locations have no posted hours and are always reachable.
    #[must_use]
    pub fn is_open(&self, time: SimTime) -> bool {
        match &self.open_window {
            Some(window) => window.contains(time),
            None => true,
        }
    }

    /// Age-restriction check; unrestricted archetypes admit everyone.
    #[must_use]
    pub fn admits_age(&self, age: u8) -> bool {
        match self.archetype.age_limits() {
            Some((min, max)) => age >= min && age <= max,
            None => true,
        }
    }

    /// The pre-drawn gathering schedule, if this archetype hosts gatherings.
    #[must_use]
    pub fn gathering_schedule(&self) -> Option<&SimTimeWindow> {
        self.gathering_schedule.as_ref()
    }
}
