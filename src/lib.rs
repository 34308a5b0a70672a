//! Population construction and behavioral scheduling for a campus
//! agent-based epidemic model.
//!
//! Given a target population size and an inventory of physical locations
//! (apartments, dorms, campus buildings, businesses), this crate synthesizes
//! a demographically realistic agent population, assigns each agent a home
//! and a campus affiliation under hard capacity constraints, and attaches
//! the recurring behavioral routines that drive when and where agents
//! congregate. An external stepping driver consumes the result: it syncs
//! each location's time-dependent state once per tick and reads each agent's
//! routine lists to decide movement.
//!
//! The pieces fit together as:
//! * [`demographics`] draws per-agent ages from role-specific distributions
//!   and derives a coarse risk category.
//! * [`population`] allocates the sampled agents across the finite housing
//!   inventory, failing fast when inventory is insufficient.
//! * [`locations`] defines per-archetype contact-rate parameters, open-hour
//!   windows, and pre-drawn social-gathering schedules.
//! * [`routines`] attaches role-keyed recurring visit rules to every agent.
//!
//! All stochastic draws consume a single explicitly threaded random stream
//! ([`random::SimRng`]); constructing the registry and population in the
//! documented order with a fixed seed reproduces the run exactly.

pub mod cluster;
pub mod config;
pub mod demographics;
pub mod error;
pub mod locations;
pub mod people;
pub mod population;
pub mod random;
pub mod routines;
pub mod time;

pub use config::SimConfig;
pub use error::CampusError;
pub use locations::{Archetype, ContactRate, Location, LocationId, LocationRegistry};
pub use people::{Person, PersonId, PersonRole, Risk};
pub use population::make_population;
pub use random::{seeded_rng, SimRng};
pub use routines::{assign_routines, Routine, RoutineTrigger};
pub use time::{SimTime, SimTimeWindow};
