//! Seeded xorshift32 generator for spawning, wrapping and sampling

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the system clock, for runs that should differ each time
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(0xDEAD_BEEF);
        Self::new(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 high bits fit exactly in an f32 mantissa, so 1.0 is unreachable
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns an index in [0, n). `n` must be non-zero.
    pub fn index(&mut self, n: usize) -> usize {
        ((self.next_f32() * n as f32) as usize).min(n - 1)
    }

    /// Symmetric offset in [-amount / 2, amount / 2)
    pub fn jitter(&mut self, amount: f32) -> f32 {
        (self.next_f32() - 0.5) * amount
    }

    /// Uniform Fisher–Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn rng_unit_interval_excludes_one() {
        let mut rng = ParticleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn jitter_is_symmetric_and_bounded() {
        let mut rng = ParticleRng::new(5);
        let mut sum = 0.0;
        for _ in 0..10_000 {
            let j = rng.jitter(0.002);
            assert!(j >= -0.001 && j < 0.001);
            sum += j;
        }
        assert!((sum / 10_000.0).abs() < 1e-4);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ParticleRng::new(99);
        let mut items: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut items);
        assert_ne!(items, (0..100).collect::<Vec<_>>());
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = ParticleRng::new(1);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [7];
        rng.shuffle(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn shuffle_places_first_item_everywhere() {
        // Every slot should eventually receive item 0 under a uniform shuffle
        let mut rng = ParticleRng::new(2024);
        let mut hits = [0u32; 4];
        for _ in 0..4000 {
            let mut items = [0, 1, 2, 3];
            rng.shuffle(&mut items);
            let slot = items.iter().position(|&v| v == 0).unwrap();
            hits[slot] += 1;
        }
        for count in hits {
            assert!(count > 800 && count < 1200, "skewed shuffle: {hits:?}");
        }
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut rng = ParticleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
