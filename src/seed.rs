//! Seed generation: candidate alignment offsets for a motif, proposed by
//! looking up its disjoint k-mer windows in a read's index.

use crate::index::{pack_window, KmerIndex};

/// Candidate read offsets for `motif_codes`, keeping only offsets proposed
/// by at least `min_support` distinct motif windows.
///
/// The motif is cut into disjoint windows of the index's k-mer length (a
/// trailing partial window is dropped). A window at motif offset `i` whose
/// k-mer occurs in the read at offset `c` votes for the alignment offset
/// `c - i`, clamped at zero. Returned offsets are deduplicated, ascending.
pub fn seed_candidates(index: &KmerIndex, motif_codes: &[u8], min_support: usize) -> Vec<usize> {
    let k = index.k();
    let mut votes: Vec<usize> = Vec::new();
    let mut start = 0usize;
    while start + k <= motif_codes.len() {
        let key = pack_window(&motif_codes[start..start + k], index.mask());
        for &pos in index.positions(key) {
            votes.push(pos.saturating_sub(start));
        }
        start += k;
    }

    votes.sort_unstable();
    let mut candidates = Vec::new();
    let mut i = 0;
    while i < votes.len() {
        let mut j = i + 1;
        while j < votes.len() && votes[j] == votes[i] {
            j += 1;
        }
        if j - i >= min_support {
            candidates.push(votes[i]);
        }
        i = j;
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::encode;
    use crate::index::KmerIndex;

    #[test]
    fn exact_motif_is_seeded_by_every_window() {
        let read = encode("TTTTACGTACGTTTTT");
        let idx = KmerIndex::build(&read, 3);
        let motif = encode("ACGTAC");
        // windows ACG@0 and TAC@3 both vote for offset 4
        assert_eq!(seed_candidates(&idx, &motif, 2), vec![4]);
    }

    #[test]
    fn lower_support_returns_a_superset() {
        let read = encode("TTTTACGTACGTTTTT");
        let idx = KmerIndex::build(&read, 3);
        let motif = encode("ACGTAC");
        let strong = seed_candidates(&idx, &motif, 2);
        let weak = seed_candidates(&idx, &motif, 1);
        assert!(strong.iter().all(|c| weak.contains(c)));
        assert_eq!(weak, vec![0, 4, 8]);
    }

    #[test]
    fn offsets_clamp_at_zero() {
        // the motif's second window matches before the copy could start
        let read = encode("CCCGGGGGG");
        let idx = KmerIndex::build(&read, 3);
        let motif = encode("AAACCC");
        assert_eq!(seed_candidates(&idx, &motif, 1), vec![0]);
    }

    #[test]
    fn trailing_partial_window_is_dropped() {
        let read = encode("ACGTT");
        let idx = KmerIndex::build(&read, 3);
        let motif = encode("ACGTT");
        // only ACG@0 is a full window, so support 2 finds nothing
        assert!(seed_candidates(&idx, &motif, 2).is_empty());
        assert_eq!(seed_candidates(&idx, &motif, 1), vec![0]);
    }

    #[test]
    fn motif_shorter_than_k_has_no_windows() {
        let idx = KmerIndex::build(&encode("ACGTACGT"), 5);
        assert!(seed_candidates(&idx, &encode("ACG"), 1).is_empty());
    }
}
