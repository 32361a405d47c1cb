//! The indent ladder: a Fibonacci sequence seeded by the tab size.
//!
//! F0 = F1 = seed, Fn = Fn-1 + Fn-2. With seed >= 1 the sequence is strictly
//! increasing from F1 onward, so every walk over it terminates.

/// Brackets `width` between two consecutive terms of the ladder.
///
/// Returns `(current, next)` where `current` is the largest term that is
/// still <= `width` (or the seed itself when `width` lies below it) and
/// `next` is the first term strictly greater than `width`.
pub fn bracket(width: usize, seed: usize) -> (usize, usize) {
    let mut current = seed;
    let mut next = seed;
    while next <= width {
        let step = current + next;
        current = next;
        next = step;
    }
    (current, next)
}

/// Iterator over the ladder terms, starting at F1.
pub fn terms(seed: usize) -> impl Iterator<Item = usize> {
    let mut current = seed;
    let mut next = seed;
    std::iter::from_fn(move || {
        let term = next;
        let step = current + next;
        current = next;
        next = step;
        Some(term)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_seed_four() {
        let got: Vec<usize> = terms(4).take(6).collect();
        assert_eq!(got, vec![4, 8, 12, 20, 32, 52]);
    }

    #[test]
    fn test_terms_non_decreasing() {
        for seed in 1..=8usize {
            let got: Vec<usize> = terms(seed).take(12).collect();
            for pair in got.windows(2) {
                assert!(pair[0] <= pair[1], "seed {seed}: {pair:?}");
            }
            // Strictly increasing from F2 onward.
            for pair in got[1..].windows(2) {
                assert!(pair[0] < pair[1], "seed {seed}: {pair:?}");
            }
        }
    }

    #[test]
    fn test_bracket_below_seed() {
        assert_eq!(bracket(0, 4), (4, 4));
        assert_eq!(bracket(3, 4), (4, 4));
    }

    #[test]
    fn test_bracket_on_term() {
        assert_eq!(bracket(4, 4), (4, 8));
        assert_eq!(bracket(8, 4), (8, 12));
        assert_eq!(bracket(12, 4), (12, 20));
        assert_eq!(bracket(20, 4), (20, 32));
    }

    #[test]
    fn test_bracket_between_terms() {
        assert_eq!(bracket(9, 4), (8, 12));
        assert_eq!(bracket(11, 4), (8, 12));
        assert_eq!(bracket(13, 4), (12, 20));
    }

    #[test]
    fn test_bracket_seed_one() {
        assert_eq!(bracket(0, 1), (1, 1));
        assert_eq!(bracket(1, 1), (1, 2));
        assert_eq!(bracket(2, 1), (2, 3));
        assert_eq!(bracket(5, 1), (5, 8));
    }

    #[test]
    fn test_bracket_invariants() {
        for seed in 1..=6usize {
            for width in 0..200usize {
                let (current, next) = bracket(width, seed);
                assert!(next > width);
                assert!(current <= width || (current == seed && width < seed));
            }
        }
    }
}
