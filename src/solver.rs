//! Rolling-accumulator solvers and selection reconstruction.
//!
//! [`best_total`] is the workhorse: the prefix-optimum recurrence evaluated
//! with two accumulators, O(n) time and O(1) extra space. The other entry
//! points trade space for extra information or stricter arithmetic.

use thiserror::Error;

use crate::table::PrefixTable;

/// A candidate total left the 64-bit signed range.
///
/// `index` is the position of the element being folded in when the checked
/// addition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("accumulated total left the 64-bit signed range at element {index}")]
pub struct OverflowError {
    pub index: usize,
}

/// An optimal value together with one set of positions achieving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The maximum non-adjacent sum.
    pub total: i64,
    /// Chosen indices, strictly increasing and pairwise non-adjacent.
    pub chosen: Vec<usize>,
}

/// Maximum non-adjacent sum of `seq`, O(1) extra space.
///
/// Empty input yields `0`; a one-element sequence yields that element,
/// negative or not. Accumulation saturates; totals are assumed to fit the
/// 64-bit signed range (see [`try_best_total`]).
pub fn best_total(seq: &[i64]) -> i64 {
    let Some((&first, rest)) = seq.split_first() else {
        return 0;
    };
    // best = optimum for the current prefix, prev = for the prefix before.
    let mut prev = 0i64;
    let mut best = first;
    for &value in rest {
        let take = prev.saturating_add(value);
        prev = best;
        best = best.max(take);
    }
    best
}

/// [`best_total`] with checked accumulation.
pub fn try_best_total(seq: &[i64]) -> Result<i64, OverflowError> {
    let Some((&first, rest)) = seq.split_first() else {
        return Ok(0);
    };
    let mut prev = 0i64;
    let mut best = first;
    for (offset, &value) in rest.iter().enumerate() {
        let take = prev
            .checked_add(value)
            .ok_or(OverflowError { index: offset + 1 })?;
        prev = best;
        best = best.max(take);
    }
    Ok(best)
}

/// Maximum non-adjacent sum plus one optimal set of chosen indices.
///
/// Builds the full [`PrefixTable`] and backtracks, so this costs O(n)
/// space. The selection is deterministic: ties resolve to skipping.
pub fn best_with_selection(seq: &[i64]) -> Selection {
    let table = PrefixTable::build(seq);
    let chosen = table.reconstruct(seq);
    Selection {
        total: table.final_best(),
        chosen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_yields_zero() {
        assert_eq!(best_total(&[]), 0);
        assert_eq!(try_best_total(&[]), Ok(0));
    }

    #[test]
    fn single_element_is_returned_as_is() {
        assert_eq!(best_total(&[5]), 5);
        assert_eq!(best_total(&[-5]), -5);
    }

    #[test]
    fn worked_examples() {
        assert_eq!(best_total(&[3, 2, 5, 10, 7]), 15);
        assert_eq!(best_total(&[1, 2, 3, 1]), 4);
    }

    #[test]
    fn alternating_signs() {
        // Taking positions 0 and 2 beats any other non-adjacent choice.
        assert_eq!(best_total(&[4, -1, 4]), 8);
        // The forced first-element base case propagates: [-10, -20, 5]
        // yields -5 (elements 0 and 2), not 5.
        assert_eq!(best_total(&[-10, -20, 5]), -5);
    }

    #[test]
    fn selection_matches_total() {
        let seq = [3, 2, 5, 10, 7];
        let pick = best_with_selection(&seq);
        assert_eq!(pick.total, 15);
        let sum: i64 = pick.chosen.iter().map(|&i| seq[i]).sum();
        assert_eq!(sum, pick.total);
    }

    #[test]
    fn overflow_is_reported_with_position() {
        let seq = [i64::MAX, 1, i64::MAX];
        let err = try_best_total(&seq).unwrap_err();
        assert_eq!(err.index, 2);
    }
}
