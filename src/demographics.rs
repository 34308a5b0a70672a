//! The demographic sampler: role-specific age distributions and the
//! age-derived risk category.
//!
//! The general and faculty distributions share one shape: a noisy unit
//! baseline below age 60 that decays linearly to 5% of baseline at the
//! distribution's anchor age. Students are uniform over the undergraduate
//! age band.

use rand::distr::Distribution;
use rand::Rng;
use rand_distr::Normal;

use crate::people::Risk;
use crate::random::{sample_weighted, SimRng};

pub const GENERAL_AGES: std::ops::RangeInclusive<u8> = 2..=100;
pub const STUDENT_AGES: std::ops::RangeInclusive<u8> = 18..=23;
pub const FACULTY_AGES: std::ops::RangeInclusive<u8> = 25..=89;

/// Age at which the baseline weight starts decaying.
const DECAY_START: f64 = 60.0;
/// Fraction of baseline weight remaining at the decay anchor age.
const DECAY_FLOOR: f64 = 0.05;
/// Relative noise applied to every age weight.
const WEIGHT_NOISE_STD: f64 = 0.05;

/// Anchor used both for the faculty decay and for risk saturation.
const FACULTY_AGE_ANCHOR: f64 = 90.0;

/// Builds the normalized weight vector for `ages` with the decay anchored at
/// `decay_anchor`, consuming one noise draw per age.
fn decaying_age_weights(
    ages: std::ops::RangeInclusive<u8>,
    decay_anchor: f64,
    rng: &mut SimRng,
) -> Vec<f64> {
    let noise = Normal::new(1.0, WEIGHT_NOISE_STD).unwrap();
    let mut weights: Vec<f64> = ages
        .map(|age| {
            let age = f64::from(age);
            let base = if age < DECAY_START {
                1.0
            } else {
                1.0 + (age - DECAY_START) * (DECAY_FLOOR - 1.0) / (decay_anchor - DECAY_START)
            };
            base * noise.sample(rng)
        })
        .collect();

    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

/// Samples `count` ages from the general-population distribution
/// (ages 2-100, decay anchored at 100).
pub fn sample_general_ages(count: usize, rng: &mut SimRng) -> Vec<u8> {
    let weights = decaying_age_weights(GENERAL_AGES, 100.0, rng);
    sample_weighted(rng, &weights, count)
        .into_iter()
        .map(|i| GENERAL_AGES.start() + i as u8)
        .collect()
}

/// Samples `count` student ages, uniform over 18-23.
pub fn sample_student_ages(count: usize, rng: &mut SimRng) -> Vec<u8> {
    (0..count)
        .map(|_| rng.random_range(*STUDENT_AGES.start()..=*STUDENT_AGES.end()))
        .collect()
}

/// Samples `count` faculty ages (25-89, decay anchored at 90).
pub fn sample_faculty_ages(count: usize, rng: &mut SimRng) -> Vec<u8> {
    let weights = decaying_age_weights(FACULTY_AGES, FACULTY_AGE_ANCHOR, rng);
    sample_weighted(rng, &weights, count)
        .into_iter()
        .map(|i| FACULTY_AGES.start() + i as u8)
        .collect()
}

/// Derives the risk category: HIGH with probability `age / 90`, saturating
/// at 1 so boundary ages (up to 100) never fail the draw.
pub fn infection_risk(age: u8, rng: &mut SimRng) -> Risk {
    let p = (f64::from(age) / FACULTY_AGE_ANCHOR).min(1.0);
    if rng.random_bool(p) {
        Risk::High
    } else {
        Risk::Low
    }
}
