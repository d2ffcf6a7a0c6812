//! Weighted-choice primitives shared by rarity, affix, tier, and count
//! selection.

use rand::Rng;

/// What a weighted pick does when every candidate weight is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroTotalPolicy {
    /// Return the last candidate in iteration order.
    LastElement,
    /// Draw uniformly across all candidates.
    Uniform,
    /// Return no candidate.
    Nothing,
}

/// Pick one item with probability proportional to its weight.
///
/// Negative weights count as zero. Candidates are scanned in slice order
/// with a strict `draw < cumulative` boundary rule, so results are
/// reproducible for a given random stream. A zero weight total resolves
/// through `policy`; an empty slice always returns `None`.
pub fn pick_weighted<'a, T, F, R>(
    items: &'a [T],
    weight: F,
    policy: ZeroTotalPolicy,
    rng: &mut R,
) -> Option<&'a T>
where
    F: Fn(&T) -> f64,
    R: Rng,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|item| weight(item).max(0.0)).sum();
    if total <= 0.0 {
        return match policy {
            ZeroTotalPolicy::LastElement => items.last(),
            ZeroTotalPolicy::Uniform => items.get(rng.gen_range(0..items.len())),
            ZeroTotalPolicy::Nothing => None,
        };
    }

    let draw = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    for item in items {
        cumulative += weight(item).max(0.0);
        if draw < cumulative {
            return Some(item);
        }
    }

    // Accumulated rounding can leave the draw past the final boundary;
    // the last element is the designated fallback.
    items.last()
}

/// Pick a count in `[min, max]`, optionally weighted by a table indexed by
/// absolute count value.
///
/// Inverted bounds are swapped. Counts beyond the table get weight zero;
/// if the whole range weighs zero (or no table is given), the count is a
/// uniform draw over the range.
pub fn pick_count<R: Rng>(min: u32, max: u32, weights: Option<&[f64]>, rng: &mut R) -> u32 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    if min == max {
        return min;
    }

    let candidates: Vec<u32> = (min..=max).collect();
    match weights {
        Some(table) => pick_weighted(
            &candidates,
            |count| table.get(*count as usize).copied().unwrap_or(0.0),
            ZeroTotalPolicy::Uniform,
            rng,
        )
        .copied()
        .unwrap_or(min),
        None => rng.gen_range(min..=max),
    }
}
