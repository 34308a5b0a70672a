//! End-to-end construction scenarios: registry, population and routine
//! assignment run in order off one seeded stream, as the stepping driver
//! would before its first tick.

use campus_abm::population::{home_occupancy, DORM_BUILDING_CAPACITY};
use campus_abm::{
    assign_routines, make_population, seeded_rng, Archetype, CampusError, LocationRegistry,
    PersonRole, SimConfig, SimTime,
};

fn campus_config() -> SimConfig {
    SimConfig {
        num_persons: 1000,
        num_apartments: 1200,
        num_shared_apartments: 0,
        num_dorms: 5,
        num_campus_buildings: 3,
        num_hybrid_campus_buildings: 0,
        seed: 1,
        ..SimConfig::default()
    }
}

fn build(config: &SimConfig) -> (Vec<campus_abm::Person>, LocationRegistry) {
    let mut rng = seeded_rng(config.seed);
    let registry = LocationRegistry::from_config(config, &mut rng);
    let mut persons = make_population(config, &registry, &mut rng).unwrap();
    assign_routines(&mut persons, &registry);
    (persons, registry)
}

#[test]
fn thousand_person_campus_scenario() {
    let config = campus_config();
    let (persons, registry) = build(&config);

    assert_eq!(persons.len(), 1000);
    let students = persons
        .iter()
        .filter(|p| p.role == PersonRole::Student)
        .count();
    assert_eq!(students, 950);
    assert_eq!(persons.len() - students, 50);

    // Every student has a home from the housing inventory and a school.
    for person in &persons {
        let home = registry.get(person.home);
        assert!(home.archetype().is_apartment() || home.archetype() == Archetype::Dorm);
        if person.role == PersonRole::Student {
            assert!(person.school.is_some());
        }
    }

    // At least one dorm building fills to exactly the rolling threshold
    // before the next one is used.
    let occupancy = home_occupancy(&persons);
    let dorm_counts: Vec<usize> = registry
        .location_ids_of_type(Archetype::Dorm)
        .iter()
        .map(|d| occupancy.get(d).copied().unwrap_or(0))
        .collect();
    assert!(dorm_counts.contains(&DORM_BUILDING_CAPACITY));
    assert!(dorm_counts.iter().all(|&c| c <= DORM_BUILDING_CAPACITY));
    assert!(dorm_counts.iter().filter(|&&c| c > 0).count() >= 2);
}

#[test]
fn identical_seeds_reproduce_the_run() {
    let config = campus_config();
    let (a, registry_a) = build(&config);
    let (b, registry_b) = build(&config);

    assert_eq!(a.len(), b.len());
    for (left, right) in a.iter().zip(b.iter()) {
        assert_eq!(left.age, right.age);
        assert_eq!(left.home, right.home);
        assert_eq!(left.outside_school_routines, right.outside_school_routines);
        assert_eq!(left.outside_work_routines, right.outside_work_routines);
    }
    for (left, right) in registry_a.iter().zip(registry_b.iter()) {
        assert_eq!(left.gathering_schedule(), right.gathering_schedule());
    }
}

#[test]
fn no_campus_buildings_degrades_without_failing() {
    let config = SimConfig {
        num_campus_buildings: 0,
        num_hybrid_campus_buildings: 0,
        ..campus_config()
    };
    let (persons, _) = build(&config);

    assert_eq!(persons.len(), 1000);
    for person in &persons {
        assert!(person.work.is_none());
        assert!(person.school.is_none());
    }
}

#[test]
fn undersized_inventory_never_truncates() {
    let config = SimConfig {
        num_apartments: 100,
        ..campus_config()
    };
    let mut rng = seeded_rng(config.seed);
    let registry = LocationRegistry::from_config(&config, &mut rng);
    let result = make_population(&config, &registry, &mut rng);
    assert!(matches!(
        result,
        Err(CampusError::InsufficientHousing { .. })
    ));
}

#[test]
fn gathering_flags_track_schedules_through_a_tick_loop() {
    let config = campus_config();
    let (_, mut registry) = build(&config);

    let apartment = registry.apartment_ids()[0];
    let schedule = registry
        .get(apartment)
        .gathering_schedule()
        .unwrap()
        .clone();

    // Walk a simulated week of hourly ticks plus every scheduled day.
    let mut probe_days: Vec<u32> = (0..7).collect();
    probe_days.extend(schedule.days().unwrap());
    for day in probe_days {
        for hour in 0..24 {
            let t = SimTime::new(day, hour);
            registry.sync_all(t);
            assert_eq!(
                registry.get(apartment).social_gathering(),
                schedule.contains(t)
            );
        }
    }
}
