//! Composable block summaries for the non-adjacent-sum recurrence.
//!
//! For elements after the first, one recurrence step is linear in the
//! (max, +) semiring: writing the frontier at position `i` as the pair
//! `(best for prefix i, best for prefix i-1)`, folding in element `x`
//! multiplies the frontier by a fixed 2×2 max-plus matrix. A
//! [`BlockSummary`] is the product of those matrices over a contiguous run,
//! so disjoint runs can be summarised independently and merged
//! associatively. The blocked and parallel strategies build on this.
//!
//! The first element is not part of any block: the base case assigns it to
//! the frontier directly ([`Frontier::start`]), which is what makes the
//! answer for `[x]` come out as `x` rather than `max(0, x)`.
//!
//! Entries that no path can realise carry a negative sentinel; arithmetic
//! on them saturates and they never win a maximum.

/// Sentinel for frontier/summary entries no path can realise.
pub const UNREACHABLE: i64 = i64::MIN / 4;

const UNREACHABLE_GUARD: i64 = i64::MIN / 8;

/// Max-plus addition with sentinel propagation.
#[inline]
fn mp_add(a: i64, b: i64) -> i64 {
    if a <= UNREACHABLE_GUARD || b <= UNREACHABLE_GUARD {
        UNREACHABLE
    } else {
        a.saturating_add(b)
    }
}

/// The live pair of prefix optima at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontier {
    /// Best total for the current prefix.
    pub best: i64,
    /// Best total for the prefix one element shorter.
    pub prev_best: i64,
}

impl Frontier {
    /// Frontier after the first element: `(seq[0], 0)`.
    #[inline]
    pub fn start(first: i64) -> Self {
        Self {
            best: first,
            prev_best: 0,
        }
    }
}

/// Summary Σ of a contiguous run of elements: a 2×2 max-plus matrix.
///
/// `m[r][c]` is the best weight a run can contribute on a path from
/// incoming frontier slot `c` to outgoing slot `r` (slot 0 = current
/// prefix, slot 1 = previous prefix). [`BlockSummary::merge`] is
/// associative and [`BlockSummary::identity`] is its two-sided unit, so a
/// chain of runs can be reduced in any grouping without changing the
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSummary {
    m: [[i64; 2]; 2],
}

impl BlockSummary {
    /// Summary of the empty run.
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: [[0, UNREACHABLE], [UNREACHABLE, 0]],
        }
    }

    /// Summary of a single element.
    ///
    /// Row 0 encodes `max(best, prev_best + value)`, row 1 shifts the old
    /// `best` into `prev_best`.
    #[inline]
    pub fn from_element(value: i64) -> Self {
        Self {
            m: [[0, value], [0, UNREACHABLE]],
        }
    }

    /// Summary of a whole run, folded left to right.
    ///
    /// Equivalent to merging the per-element summaries in order, but each
    /// step updates the two rows directly instead of a full matrix product.
    pub fn from_slice(run: &[i64]) -> Self {
        let mut acc = Self::identity();
        for &value in run {
            let top = [
                acc.m[0][0].max(mp_add(value, acc.m[1][0])),
                acc.m[0][1].max(mp_add(value, acc.m[1][1])),
            ];
            acc.m[1] = acc.m[0];
            acc.m[0] = top;
        }
        acc
    }

    /// Σ of `self`'s run followed by `later`'s run.
    pub fn merge(&self, later: &BlockSummary) -> BlockSummary {
        let mut m = [[UNREACHABLE; 2]; 2];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let mut best = UNREACHABLE;
                for j in 0..2 {
                    let cand = mp_add(later.m[r][j], self.m[j][c]);
                    if cand > best {
                        best = cand;
                    }
                }
                *cell = best;
            }
        }
        BlockSummary { m }
    }

    /// Advance a frontier across this summary's run.
    pub fn apply(&self, frontier: &Frontier) -> Frontier {
        let incoming = [frontier.best, frontier.prev_best];
        let mut outgoing = [UNREACHABLE; 2];
        for (r, slot) in outgoing.iter_mut().enumerate() {
            for (c, &value) in incoming.iter().enumerate() {
                let cand = mp_add(self.m[r][c], value);
                if cand > *slot {
                    *slot = cand;
                }
            }
        }
        Frontier {
            best: outgoing[0],
            prev_best: outgoing[1],
        }
    }
}

/// Heuristic block length: ≈ √n, so a streaming fold keeps O(√n) live
/// summaries.
#[inline]
pub fn default_block_len(len: usize) -> usize {
    if len <= 1 {
        1
    } else {
        (len as f64).sqrt().ceil() as usize
    }
}

/// Maximum non-adjacent sum via per-block summaries.
///
/// Splits the elements after the first into blocks of `block_len`,
/// summarises each, and advances the frontier block by block. Agrees
/// exactly with [`crate::best_total`] for every input and every
/// `block_len >= 1`.
///
/// # Panics
/// Panics if `block_len == 0`.
pub fn solve_blocked(seq: &[i64], block_len: usize) -> i64 {
    assert!(block_len > 0, "block_len must be positive");
    let Some((&first, rest)) = seq.split_first() else {
        return 0;
    };
    let mut frontier = Frontier::start(first);
    for block in rest.chunks(block_len) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("summarize_block", len = block.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        let sigma = BlockSummary::from_slice(block);
        frontier = sigma.apply(&frontier);
    }
    frontier.best
}

/// Blocked strategy with the per-block summaries computed on the rayon
/// thread pool.
///
/// Chunk order is preserved by the reduction, so the result is
/// bit-identical to the sequential strategies.
///
/// # Panics
/// Panics if `block_len == 0`.
#[cfg(feature = "parallel")]
pub fn solve_parallel(seq: &[i64], block_len: usize) -> i64 {
    use rayon::prelude::*;

    assert!(block_len > 0, "block_len must be positive");
    let Some((&first, rest)) = seq.split_first() else {
        return 0;
    };
    let sigma = rest
        .par_chunks(block_len)
        .map(BlockSummary::from_slice)
        .reduce(BlockSummary::identity, |earlier, later| {
            earlier.merge(&later)
        });
    sigma.apply(&Frontier::start(first)).best
}
