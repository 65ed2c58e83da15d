//! Small shared routines used by the distractor generator, the deck and the
//! round controller.
//!
//! ## RNG ordering
//!
//! All shuffles walk the slice from the back (Fisher-Yates) and draw exactly
//! one number per swap. Seeded tests depend on this call sequence, so keep
//! it stable when touching these functions.

use rand::Rng;

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Random sample of up to `n` items: shuffle a copy, keep the first `n`.
pub fn sample<T: Clone, R: Rng>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut pool = items.to_vec();
    shuffle(&mut pool, rng);
    pool.truncate(n);
    pool
}

/// True unless the first character is a lower-case letter.
///
/// Digits and punctuation count as "capitalised" so that the mutated word
/// keeps them untouched.
pub fn starts_capitalised(word: &str) -> bool {
    word.chars().next().map_or(false, |c| !c.is_lowercase())
}

/// Upper-case the first character, leaving the rest as is.
pub fn capitalise_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_keeps_every_item() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn sample_never_exceeds_the_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(sample(&["a", "b", "c"], 2, &mut rng).len(), 2);
        assert_eq!(sample(&["a"], 2, &mut rng), vec!["a"]);
        assert!(sample::<&str, _>(&[], 2, &mut rng).is_empty());
    }

    #[test]
    fn capitalisation_helpers() {
        assert!(starts_capitalised("Apple"));
        assert!(!starts_capitalised("apple"));
        assert!(starts_capitalised("3d"));
        assert!(!starts_capitalised(""));
        assert_eq!(capitalise_first("epple"), "Epple");
        assert_eq!(capitalise_first(""), "");
    }
}
