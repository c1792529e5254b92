//! Input generators shared by the ordo benchmarks.

/// `size` integers from a fixed-seed linear congruential generator, so runs
/// are comparable across machines.
pub fn scrambled(size: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as i64
        })
        .collect()
}

/// `size` integers in descending order, the worst case for exchange sort.
pub fn descending(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// `size` integers already in ascending order.
pub fn ascending(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrambled_is_deterministic() {
        assert_eq!(scrambled(16, 7), scrambled(16, 7));
        assert_ne!(scrambled(16, 7), scrambled(16, 8));
    }

    #[test]
    fn generators_have_requested_length() {
        assert_eq!(scrambled(100, 1).len(), 100);
        assert_eq!(descending(5), [4, 3, 2, 1, 0]);
        assert_eq!(ascending(3), [0, 1, 2]);
    }
}
