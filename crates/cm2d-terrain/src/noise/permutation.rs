//! Seeded lattice permutation table shared by the gradient noise generators.

/// Number of distinct lattice hashes.
const PERIOD: usize = 256;

/// LCG multiplier used for the seeded shuffle.
const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// LCG increment used for the seeded shuffle.
const LCG_INCREMENT: u32 = 12_345;

/// A shuffled permutation of `0..256`, stored twice back to back.
///
/// The duplicated upper half lets lookups like `p[p[x] + y]` with
/// `x, y <= 255` index directly without wrapping.
#[derive(Clone)]
pub struct PermutationTable {
    values: [u8; PERIOD * 2],
}

impl PermutationTable {
    /// Build the table for `seed`.
    ///
    /// Fisher-Yates over the identity sequence, driven by the 32-bit LCG
    /// `s = s * 1103515245 + 12345`, with `j = (s / 65536) % (i + 1)`.
    pub fn new(seed: u32) -> Self {
        let mut p = [0u8; PERIOD];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut s = seed;
        for i in (1..PERIOD).rev() {
            s = s.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
            let j = ((s / 65_536) % (i as u32 + 1)) as usize;
            p.swap(i, j);
        }

        let mut values = [0u8; PERIOD * 2];
        values[..PERIOD].copy_from_slice(&p);
        values[PERIOD..].copy_from_slice(&p);
        Self { values }
    }

    /// Table entry at `index` (`index < 512`).
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.values[index] as usize
    }

    /// The full 512-entry table.
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.values[..8])
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_a_permutation() {
        let table = PermutationTable::new(12345);
        let mut seen = [false; PERIOD];
        for &v in &table.as_slice()[..PERIOD] {
            assert!(!seen[v as usize], "value {v} appears twice");
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_upper_half_mirrors_lower_half() {
        let table = PermutationTable::new(42);
        let values = table.as_slice();
        assert_eq!(values.len(), 512);
        assert_eq!(&values[..PERIOD], &values[PERIOD..]);
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(
            PermutationTable::new(7).as_slice(),
            PermutationTable::new(7).as_slice()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(
            PermutationTable::new(1).as_slice(),
            PermutationTable::new(2).as_slice()
        );
    }

    #[test]
    fn test_first_swap_follows_lcg() {
        // Seed 0: s = 12345, j = (12345 / 65536) % 256 = 0, so slot 255 swaps with slot 0.
        let table = PermutationTable::new(0);
        assert_eq!(table.get(255), 0);
    }
}
