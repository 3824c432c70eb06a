//! Item choice rules.

use crate::random::RandomSource;

/// Picks an index into `scores`.
///
/// With probability `q0` the highest score wins ([`argmax`]). Otherwise the
/// pick is proportional to score ([`roulette`]), or uniform when the scores
/// sum to zero or less. When `q0 <= 0` no draw is spent on the branch.
///
/// `scores` must not be empty.
pub fn choose<R: RandomSource + ?Sized>(scores: &[f64], q0: f64, rng: &mut R) -> usize {
    debug_assert!(!scores.is_empty(), "no candidates to choose from");

    if q0 > 0.0 && rng.next_f64() < q0 {
        return argmax(scores);
    }

    let total: f64 = scores.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return rng.next_index(scores.len());
    }

    roulette(scores, total, rng)
}

/// Index of the highest score. Ties go to the lowest index.
pub fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}

/// Samples an index with probability `scores[i] / total`.
///
/// Zero scores are never picked. Rounding at the top end of the wheel
/// falls back to the last positive score.
pub fn roulette<R: RandomSource + ?Sized>(scores: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.next_f64() * total;
    let mut cumulative = 0.0;
    for (i, &score) in scores.iter().enumerate() {
        cumulative += score;
        if threshold < cumulative {
            return i;
        }
    }

    scores
        .iter()
        .rposition(|&score| score > 0.0)
        .unwrap_or(scores.len() - 1)
}
