use rand::RngCore;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
/// 2^32, the LCG modulus, as a float divisor.
const MODULUS: f64 = 4_294_967_296.0;

/// Seeded linear congruential generator.
///
/// `state = (1664525 * state + 1013904223) mod 2^32`. The modulus is implied by
/// wrapping `u32` arithmetic, so the sequence is bit-identical on every
/// platform. One instance belongs to exactly one generation call.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Seeds the generator. Only the low 32 bits of `seed` are kept.
    pub fn new(seed: u64) -> Self {
        SeededRandom { state: seed as u32 }
    }

    fn advance(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.advance()) / MODULUS
    }

    /// Pick one element. Returns `None` (and draws nothing) for an empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_f64() * items.len() as f64) as usize;
        items.get(index)
    }

    /// Return a shuffled copy of `items`; the input is left untouched.
    ///
    /// Fisher-Yates from the back, so exactly `len - 1` draws are consumed.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut result = items.to_vec();
        for i in (1..result.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64) as usize;
            result.swap(i, j);
        }
        result
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.advance());
        let lo = u64::from(self.advance());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn first_draws_match_the_recurrence() {
        let mut rng = SeededRandom::new(0);
        // 1664525 * 0 + 1013904223
        assert_eq!(rng.next_u32(), 1_013_904_223);
        // 1664525 * 1013904223 + 1013904223 mod 2^32
        assert_eq!(rng.next_u32(), 1_196_435_762);

        let mut rng = SeededRandom::new(0);
        assert_eq!(rng.next_f64(), 1_013_904_223.0 / 4_294_967_296.0);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x), "draw {x} out of range");
        }
    }

    #[test]
    fn seed_keeps_low_32_bits() {
        let mut wide = SeededRandom::new((1u64 << 32) + 5);
        let mut narrow = SeededRandom::new(5);
        assert_eq!(wide.next_u32(), narrow.next_u32());
    }

    #[test]
    fn shuffle_is_a_reproducible_permutation() {
        let input = ["a", "b", "c", "d", "e"];
        let first = SeededRandom::new(42).shuffle(&input);
        let second = SeededRandom::new(42).shuffle(&input);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
        assert_eq!(input, ["a", "b", "c", "d", "e"], "input must not be mutated");
    }

    #[test]
    fn shuffle_consumes_len_minus_one_draws() {
        for len in 0..8usize {
            let items: Vec<usize> = (0..len).collect();
            let mut shuffled = SeededRandom::new(99);
            shuffled.shuffle(&items);

            let mut reference = SeededRandom::new(99);
            for _ in 0..len.saturating_sub(1) {
                reference.next_f64();
            }
            assert_eq!(
                shuffled.next_u32(),
                reference.next_u32(),
                "shuffle of {len} items consumed the wrong number of draws"
            );
        }
    }

    #[test]
    fn choice_is_deterministic_and_handles_empty() {
        let options = ["option1", "option2", "option3", "option4", "option5"];
        let a = SeededRandom::new(999).choice(&options).copied();
        let b = SeededRandom::new(999).choice(&options).copied();
        assert_eq!(a, b);
        assert!(a.is_some());

        let mut rng = SeededRandom::new(999);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choice(&empty), None);
        // No draw was consumed by the empty choice.
        assert_eq!(rng.next_u32(), SeededRandom::new(999).next_u32());
    }

    #[test]
    fn works_behind_the_rand_traits() {
        let mut rng = SeededRandom::new(3);
        let roll: u8 = rng.gen_range(1..=6);
        assert!((1..=6).contains(&roll));

        let mut bytes = [0u8; 7];
        SeededRandom::new(3).fill_bytes(&mut bytes);
        let mut again = [0u8; 7];
        SeededRandom::new(3).fill_bytes(&mut again);
        assert_eq!(bytes, again);
    }
}
