//! The capacity-constrained assignment engine: synthesizes the agent
//! population and assigns every agent a home, honoring per-type housing
//! capacity, plus a campus work/school affiliation where one exists.
//!
//! Construction is a pure transformation of (configuration, location
//! inventory, random stream). The draw order is part of the contract;
//! reordering any step changes every downstream outcome for a fixed seed:
//!
//! 1. shuffle of the combined campus-building pool
//! 2. student age sampling, then faculty age sampling
//! 3. shuffle of the combined apartment inventory
//! 4. faculty household clustering, then per-faculty work and risk draws
//! 5. dorm-group clustering, then per-dorm-student school and risk draws
//! 6. roommate-capacity draws, then per-student school and risk draws

use log::{info, trace};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::cluster::cluster_into_random_sized_groups;
use crate::config::SimConfig;
use crate::demographics::{infection_risk, sample_faculty_ages, sample_student_ages};
use crate::error::CampusError;
use crate::locations::{Archetype, LocationId, LocationRegistry};
use crate::people::{Person, PersonId};
use crate::random::SimRng;

/// Fraction of the requested population that are students; the remainder is
/// faculty. The student count is the floor of the product.
pub const STUDENT_FRACTION: f64 = 0.95;

/// Fraction of students living in on-campus dorms (rounded up).
pub const DORM_RESIDENT_FRACTION: f64 = 0.138;

/// Students assigned to one dorm building before advancing to the next.
pub const DORM_BUILDING_CAPACITY: usize = 30;

/// Faculty household sizes (one-or-two-adult homes).
pub const FACULTY_HOUSEHOLD_SIZE: (usize, usize) = (1, 2);

/// Dorm roommate-group sizes.
pub const DORM_GROUP_SIZE: (usize, usize) = (1, 4);

/// Per-apartment roommate capacity is drawn uniformly from this range.
pub const ROOMMATE_CAPACITY: (usize, usize) = (2, 4);

/// Synthesizes the full population against the given inventory. Every
/// returned agent has a home; insufficient housing or dorm inventory is a
/// fatal precondition failure and no partial population is returned.
pub fn make_population(
    config: &SimConfig,
    registry: &LocationRegistry,
    rng: &mut SimRng,
) -> Result<Vec<Person>, CampusError> {
    let mut persons: Vec<Person> = Vec::with_capacity(config.num_persons);

    // Campus buildings double as workplaces (faculty) and schools
    // (students); in-person and hybrid buildings are pooled and drawn from
    // uniformly.
    let mut campus_pool = registry.location_ids_of_type(Archetype::Campus);
    let hybrid = registry.location_ids_of_type(Archetype::HybridCampus);
    info!(
        "campus buildings: {} in-person, {} hybrid",
        campus_pool.len(),
        hybrid.len()
    );
    campus_pool.extend(hybrid);
    campus_pool.shuffle(rng);

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let num_students = (config.num_persons as f64 * STUDENT_FRACTION) as usize;
    let student_ages = sample_student_ages(num_students, rng);
    let faculty_ages = sample_faculty_ages(config.num_persons - num_students, rng);

    let mut unassigned_homes = registry.apartment_ids();
    unassigned_homes.shuffle(rng);
    info!(
        "assigning {} students and {} faculty across {} apartments and {} dorms",
        student_ages.len(),
        faculty_ages.len(),
        unassigned_homes.len(),
        registry.location_ids_of_type(Archetype::Dorm).len()
    );

    // Faculty live in one-or-two-adult households, one apartment per
    // household, consumed in shuffled order.
    let faculty_households = cluster_into_random_sized_groups(
        &faculty_ages,
        FACULTY_HOUSEHOLD_SIZE.0,
        FACULTY_HOUSEHOLD_SIZE.1,
        rng,
    );
    if faculty_households.len() > unassigned_homes.len() {
        return Err(CampusError::InsufficientHousing {
            required: faculty_households.len(),
            available: unassigned_homes.len(),
        });
    }
    let faculty_homes: Vec<LocationId> = unassigned_homes
        .drain(..faculty_households.len())
        .collect();
    for (household, &home) in faculty_households.iter().zip(&faculty_homes) {
        for &age in household {
            let work = campus_pool.choose(rng).copied();
            let risk = infection_risk(age, rng);
            persons.push(Person::faculty(
                PersonId(persons.len()),
                age,
                home,
                work,
                config.regulation_compliance_prob,
                risk,
            ));
        }
    }

    // Dorm-eligible students fill dorm buildings under a rolling headcount
    // threshold: the current building takes students until it holds
    // `DORM_BUILDING_CAPACITY`, then the next building in inventory order
    // starts filling.
    let dorms = registry.location_ids_of_type(Archetype::Dorm);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let num_dorm_students = (student_ages.len() as f64 * DORM_RESIDENT_FRACTION).ceil() as usize;
    info!("students in dorms: {num_dorm_students}");

    let required_dorms = num_dorm_students.div_ceil(DORM_BUILDING_CAPACITY);
    if required_dorms > dorms.len() {
        return Err(CampusError::InsufficientDorms {
            required: required_dorms,
            available: dorms.len(),
        });
    }

    let dorm_groups = cluster_into_random_sized_groups(
        &student_ages[..num_dorm_students],
        DORM_GROUP_SIZE.0,
        DORM_GROUP_SIZE.1,
        rng,
    );
    let dorm_slots = rolling_fill(num_dorm_students, |_| DORM_BUILDING_CAPACITY);
    trace!(
        "dorm students span {} buildings",
        dorm_slots.last().map_or(0, |last| last + 1)
    );
    for (&age, &slot) in dorm_groups.iter().flatten().zip(&dorm_slots) {
        let school = campus_pool.choose(rng).copied();
        let risk = infection_risk(age, rng);
        persons.push(Person::student(
            PersonId(persons.len()),
            age,
            dorms[slot],
            school,
            config.student_compliance_prob,
            risk,
        ));
    }

    // Remaining students share off-campus apartments in small roommate
    // groups; each consumed apartment holds a freshly drawn 2-4 roommates.
    let remaining_ages = &student_ages[num_dorm_students..];
    if remaining_ages.len() > unassigned_homes.len() {
        return Err(CampusError::InsufficientHousing {
            required: remaining_ages.len(),
            available: unassigned_homes.len(),
        });
    }
    let roommate_capacities: Vec<usize> = (0..remaining_ages.len())
        .map(|_| rng.random_range(ROOMMATE_CAPACITY.0..=ROOMMATE_CAPACITY.1))
        .collect();
    let student_homes = &unassigned_homes[..remaining_ages.len()];

    let apartment_slots = rolling_fill(remaining_ages.len(), |i| roommate_capacities[i]);
    for (&age, &slot) in remaining_ages.iter().zip(&apartment_slots) {
        let school = campus_pool.choose(rng).copied();
        let risk = infection_risk(age, rng);
        persons.push(Person::student(
            PersonId(persons.len()),
            age,
            student_homes[slot],
            school,
            config.student_compliance_prob,
            risk,
        ));
    }

    debug_assert_eq!(persons.len(), config.num_persons);
    Ok(persons)
}

/// Maps each of `count` occupants to a housing-unit index: unit 0 takes
/// occupants until it reaches `capacity_of(0)`, then unit 1 starts filling,
/// and so on. No unit ever holds more than its own capacity.
fn rolling_fill(count: usize, capacity_of: impl Fn(usize) -> usize) -> Vec<usize> {
    let mut slots = Vec::with_capacity(count);
    let mut unit = 0;
    let mut occupants = 0;
    for _ in 0..count {
        if occupants == capacity_of(unit) {
            unit += 1;
            occupants = 0;
        }
        slots.push(unit);
        occupants += 1;
    }
    slots
}

/// Occupancy per home location, for capacity checks.
#[must_use]
pub fn home_occupancy(persons: &[Person]) -> std::collections::HashMap<LocationId, usize> {
    let mut occupancy = std::collections::HashMap::new();
    for person in persons {
        *occupancy.entry(person.home).or_insert(0) += 1;
    }
    occupancy
}
