//! Partitions an ordered age sequence into randomly sized groups, used to
//! form households (one-or-two-adult faculty homes, dorm roommate groups).

use rand::Rng;

use crate::random::SimRng;

/// Splits `ages` into consecutive groups whose sizes are drawn uniformly
/// from `min_size..=max_size`, in order. Every input age appears in exactly
/// one output group; the final group may be smaller than `min_size` when the
/// remainder runs out.
pub fn cluster_into_random_sized_groups(
    ages: &[u8],
    min_size: usize,
    max_size: usize,
    rng: &mut SimRng,
) -> Vec<Vec<u8>> {
    debug_assert!(min_size >= 1 && min_size <= max_size);

    let mut groups = Vec::new();
    let mut remaining = ages;
    while !remaining.is_empty() {
        let size = rng.random_range(min_size..=max_size).min(remaining.len());
        let (group, rest) = remaining.split_at(size);
        groups.push(group.to_vec());
        remaining = rest;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn every_age_in_exactly_one_group() {
        let mut rng = seeded_rng(42);
        let ages: Vec<u8> = (0..57).map(|i| 20 + (i % 50) as u8).collect();
        let groups = cluster_into_random_sized_groups(&ages, 1, 4, &mut rng);

        let flattened: Vec<u8> = groups.iter().flatten().copied().collect();
        assert_eq!(flattened, ages);
    }

    #[test]
    fn group_sizes_within_bounds() {
        let mut rng = seeded_rng(42);
        let ages = vec![30_u8; 200];
        let groups = cluster_into_random_sized_groups(&ages, 2, 5, &mut rng);

        for group in &groups[..groups.len() - 1] {
            assert!(group.len() >= 2 && group.len() <= 5);
        }
        // The tail group may be short but never oversized.
        assert!(groups.last().unwrap().len() <= 5);
    }

    #[test]
    fn singleton_bounds_yield_singleton_groups() {
        let mut rng = seeded_rng(42);
        let ages = vec![40_u8, 41, 42];
        let groups = cluster_into_random_sized_groups(&ages, 1, 1, &mut rng);
        assert_eq!(groups, vec![vec![40], vec![41], vec![42]]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let mut rng = seeded_rng(42);
        let groups = cluster_into_random_sized_groups(&[], 1, 4, &mut rng);
        assert!(groups.is_empty());
    }
}
