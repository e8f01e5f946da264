//! Random permutation

use underbar_utils::random::RandomSource;
use underbar_utils::tracing::combinator_span;

/// A uniformly random permutation of `sequence`, using the thread RNG.
///
/// The input is left untouched; a new vector is returned.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// [`shuffle`] with an explicit random source.
///
/// Walks backwards from the last index down to 1, swapping each position
/// with one chosen uniformly from `[0, index]` (Fisher–Yates).
///
/// ```
/// use underbar_collections::shuffle_with;
/// use underbar_utils::seeded;
///
/// let deck = vec![1, 2, 3, 4, 5];
/// let first = shuffle_with(&deck, &mut seeded(9));
/// let again = shuffle_with(&deck, &mut seeded(9));
/// assert_eq!(first, again);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], random: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let span = combinator_span("shuffle", sequence.len());
    let _guard = span.enter();

    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let chosen = (random.next_unit() * (index + 1) as f64) as usize;
        shuffled.swap(index, chosen.min(index));
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use underbar_utils::seeded;

    /// Replays a fixed list of unit values
    struct Scripted(Vec<f64>);

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            if self.0.is_empty() {
                0.0
            } else {
                self.0.remove(0)
            }
        }
    }

    #[test]
    fn test_swaps_follow_the_source() {
        // swaps: 3 with 0, 2 with itself, 1 with 0
        let mut source = Scripted(vec![0.0, 0.99, 0.1]);
        let shuffled = shuffle_with(&['a', 'b', 'c', 'd'], &mut source);
        assert_eq!(shuffled, vec!['b', 'd', 'c', 'a']);
    }

    #[test]
    fn test_input_is_untouched() {
        let original = vec![1, 2, 3, 4];
        let shuffled = shuffle(&original);
        assert_eq!(original, vec![1, 2, 3, 4]);
        assert_eq!(shuffled.len(), 4);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(shuffle::<u8>(&[]).is_empty());
        assert_eq!(shuffle(&[7]), vec![7]);
    }

    #[test]
    fn test_every_position_is_reachable() {
        let mut source = seeded(1);
        let mut firsts = std::collections::BTreeSet::new();
        for _ in 0..200 {
            firsts.insert(shuffle_with(&[0, 1, 2], &mut source)[0]);
        }
        assert_eq!(firsts.len(), 3);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(items in proptest::collection::vec(any::<i32>(), 0..64), seed in any::<u64>()) {
            let shuffled = shuffle_with(&items, &mut seeded(seed));
            let mut left = items.clone();
            let mut right = shuffled;
            left.sort_unstable();
            right.sort_unstable();
            prop_assert_eq!(left, right);
        }
    }
}
