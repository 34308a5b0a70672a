//! The location behavior model. Each location belongs to an [`Archetype`]
//! carrying an immutable parameter set: a contact-rate tuple consumed as
//! weights by downstream transmission modeling, an open-hours window for
//! business archetypes, and a gathering template for residential and social
//! archetypes. Per-instance state ([`Location`]) holds the gathering schedule
//! drawn once at construction and the observable per-tick flags.

mod location;
mod registry;

use strum::EnumIter;

use crate::time::SimTimeWindow;

pub use location::Location;
pub use registry::LocationRegistry;

/// Number of gathering days drawn per year for a residential or party
/// location. Draws are with replacement, so the realized count may be lower.
pub const GATHERINGS_PER_YEAR: usize = 12;

/// Opaque handle to a location in the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of location categories in the model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Archetype {
    /// Private off-campus apartment.
    Apartment,
    /// Apartment with communal living space; residents mix like coworkers.
    SharedApartment,
    Dorm,
    Party,
    /// In-person campus building.
    Campus,
    /// Campus building running a mix of remote and in-person classes.
    HybridCampus,
    Restaurant,
    Bar,
    GroceryStore,
    RetailStore,
}

/// Contact parameters a location contributes to transmission modeling:
/// per-hour contact counts and transmission probabilities for the
/// worker-worker, worker-visitor and visitor-visitor pairings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactRate {
    pub worker_worker: u32,
    pub worker_visitor: u32,
    pub visitor_visitor: u32,
    pub prob_worker_worker: f64,
    pub prob_worker_visitor: f64,
    pub prob_visitor_visitor: f64,
}

impl ContactRate {
    #[must_use]
    pub const fn new(ww: u32, wv: u32, vv: u32, p_ww: f64, p_wv: f64, p_vv: f64) -> ContactRate {
        ContactRate {
            worker_worker: ww,
            worker_visitor: wv,
            visitor_visitor: vv,
            prob_worker_worker: p_ww,
            prob_worker_visitor: p_wv,
            prob_visitor_visitor: p_vv,
        }
    }

    /// All transmission probabilities lie in `[0, 1]`.
    #[must_use]
    pub fn probabilities_valid(&self) -> bool {
        [
            self.prob_worker_worker,
            self.prob_worker_visitor,
            self.prob_visitor_visitor,
        ]
        .iter()
        .all(|p| (0.0..=1.0).contains(p))
    }
}

impl Archetype {
    /// Residential archetypes host pre-drawn evening gatherings and serve as
    /// home assignments.
    #[must_use]
    pub fn is_residential(self) -> bool {
        matches!(
            self,
            Archetype::Apartment | Archetype::SharedApartment | Archetype::Dorm
        )
    }

    /// Apartments (both kinds) form the non-dorm housing inventory.
    #[must_use]
    pub fn is_apartment(self) -> bool {
        matches!(self, Archetype::Apartment | Archetype::SharedApartment)
    }

    /// The contact-rate tuple for this archetype.
    #[must_use]
    pub fn contact_rate(self) -> ContactRate {
        match self {
            Archetype::Apartment => ContactRate::new(0, 1, 0, 0.5, 0.3, 0.3),
            Archetype::SharedApartment => ContactRate::new(1, 1, 1, 0.7, 0.7, 0.7),
            // Dorm resident-to-resident and resident-to-visitor contact runs
            // high (shared halls, dining).
            Archetype::Dorm => ContactRate::new(0, 1, 0, 0.9, 0.7, 0.3),
            Archetype::Party => ContactRate::new(30, 30, 30, 0.9, 0.9, 0.9),
            // Lecture-hall sized student-to-student mixing.
            Archetype::Campus => ContactRate::new(10, 5, 5, 0.7, 0.5, 0.5),
            Archetype::HybridCampus => ContactRate::new(5, 1, 0, 0.7, 0.0, 0.1),
            Archetype::Restaurant => ContactRate::new(10, 10, 10, 0.7, 0.7, 0.7),
            Archetype::Bar => ContactRate::new(10, 10, 10, 0.7, 0.7, 0.7),
            Archetype::GroceryStore => ContactRate::new(10, 10, 10, 0.7, 0.7, 0.7),
            Archetype::RetailStore => ContactRate::new(5, 5, 5, 0.6, 0.6, 0.6),
        }
    }

    /// The static open-hours window for business and campus archetypes;
    /// `None` for residential and party archetypes, which are always
    /// reachable.
    #[must_use]
    pub fn open_window(self) -> Option<SimTimeWindow> {
        match self {
            Archetype::Campus | Archetype::HybridCampus => {
                Some(SimTimeWindow::new().with_hours(8..18).with_week_days(0..5))
            }
            Archetype::Restaurant => Some(
                SimTimeWindow::new()
                    .with_hours((11..16).chain(19..24))
                    .with_week_days(1..7),
            ),
            Archetype::Bar => Some(SimTimeWindow::new().with_hours(21..24).with_week_days(1..7)),
            Archetype::GroceryStore | Archetype::RetailStore => {
                Some(SimTimeWindow::new().with_hours(7..21).with_week_days(0..6))
            }
            _ => None,
        }
    }

    /// The hours of day during which a drawn gathering day is active, or
    /// `None` for archetypes that never draw a gathering schedule.
    #[must_use]
    pub fn gathering_hours(self) -> Option<Vec<u8>> {
        match self {
            Archetype::Apartment | Archetype::SharedApartment | Archetype::Dorm => {
                Some((19..24).collect())
            }
            // Parties run past midnight; the 22-4 span wraps the day
            // boundary.
            Archetype::Party => Some((22..24).chain(0..4).collect()),
            _ => None,
        }
    }

    /// Lowest eligible day of year for gathering-day draws.
    #[must_use]
    pub fn gathering_first_day(self) -> u32 {
        match self {
            Archetype::Party => 5,
            _ => 4,
        }
    }

    /// Whether the social-gathering flag starts raised. Restaurants, bars and
    /// parties are treated as standing social venues.
    #[must_use]
    pub fn gathering_by_default(self) -> bool {
        matches!(
            self,
            Archetype::Party | Archetype::Restaurant | Archetype::Bar
        )
    }

    /// Inclusive visitor age limits, for age-restricted venues.
    #[must_use]
    pub fn age_limits(self) -> Option<(u8, u8)> {
        match self {
            Archetype::Bar => Some((21, 110)),
            _ => None,
        }
    }
}
