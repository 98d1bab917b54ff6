//! Randomized string embedding: edit-distance-tolerant comparison as a
//! cheap, early-terminating Hamming mismatch count.
//!
//! A source string is stretched to [`EMBED_FACTOR`] times its length by a
//! position- and symbol-dependent random walk: at each embedded position the
//! symbol under the source cursor is emitted, then a per-(position, symbol)
//! step bit decides whether the cursor advances. A few insertions or
//! deletions in one of two related strings shift the walk only locally, so
//! the Hamming distance between their embedded forms stays a good stand-in
//! for edit distance. Two strings are only comparable when embedded with the
//! same table.
//!
//! ### Example
//! ```
//! use motifscan::alphabet::encode;
//! use motifscan::Embedding;
//!
//! let e = Embedding::with_seed(1);
//! let codes = encode("ACGTACGT");
//! let reference = e.embed(&codes);
//! assert_eq!(e.compare(&codes, &reference, 0), 0);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::{N_CODES, WILDCARD};

/// Every source symbol occupies up to this many embedded positions.
pub const EMBED_FACTOR: usize = 3;

/// Size bound of the step table, in embedded positions. Sources whose
/// embedded form would be longer cannot be handled by one table.
pub const MAX_EMBEDDED_LEN: usize = 100;

/// The per-process random step table. Write-once at construction, read-only
/// afterwards; share one instance by reference across a whole run.
#[derive(Clone)]
pub struct Embedding {
    steps: [[u8; N_CODES]; MAX_EMBEDDED_LEN],
}

impl Embedding {
    /// Generate a table from thread-local entropy.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Generate a reproducible table from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate a table from any RNG.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut steps = [[0u8; N_CODES]; MAX_EMBEDDED_LEN];
        for row in steps.iter_mut() {
            for step in row.iter_mut() {
                *step = rng.gen_range(0..2);
            }
        }
        Self { steps }
    }

    /// Longest source sequence one table can embed.
    pub fn max_source_len() -> usize {
        MAX_EMBEDDED_LEN / EMBED_FACTOR
    }

    /// Materialize the embedded form of `codes`.
    ///
    /// Panics if the embedded length would overrun the step table; callers
    /// validate motif lengths up front (see [`Engine::new`]).
    ///
    /// [`Engine::new`]: crate::engine::Engine::new
    pub fn embed(&self, codes: &[u8]) -> Vec<u8> {
        let embedded_len = codes.len() * EMBED_FACTOR;
        assert!(
            embedded_len <= MAX_EMBEDDED_LEN,
            "source of {} codes overruns the step table",
            codes.len()
        );
        let mut out = vec![0u8; embedded_len];
        let mut cursor = 0usize;
        for (j, slot) in out.iter_mut().enumerate() {
            let s = if cursor < codes.len() { codes[cursor] } else { WILDCARD };
            *slot = s;
            cursor += self.steps[j][s as usize] as usize;
        }
        out
    }

    /// Embed `codes` on the fly and count positions where the emitted symbol
    /// differs from `reference`, giving up as soon as the count exceeds
    /// `threshold`. The returned count is capped at `threshold + 1` when the
    /// scan aborts early.
    ///
    /// `reference` must be the embedding of a source with the same length as
    /// `codes`; anything else is a programming error and panics.
    pub fn compare(&self, codes: &[u8], reference: &[u8], threshold: u32) -> u32 {
        assert_eq!(
            reference.len(),
            codes.len() * EMBED_FACTOR,
            "reference embedding does not match candidate length"
        );
        let mut cursor = 0usize;
        let mut mismatches = 0u32;
        for (j, &r) in reference.iter().enumerate() {
            let s = if cursor < codes.len() { codes[cursor] } else { WILDCARD };
            if r != s {
                mismatches += 1;
                if mismatches > threshold {
                    break;
                }
            }
            cursor += self.steps[j][s as usize] as usize;
        }
        mismatches
    }
}

impl Default for Embedding {
    fn default() -> Self {
        Self::new()
    }
}
