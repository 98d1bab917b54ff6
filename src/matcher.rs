//! Best-candidate selection: score each seeded offset against a motif's
//! embedded reference and keep the closest placement.

use crate::embedding::Embedding;

/// Placement of one motif in one read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Read offset of the best candidate, `None` if the motif went
    /// unmatched.
    pub pos: Option<usize>,
    /// Embedded mismatch count at `pos`, or the motif's full embedded
    /// length when unmatched (the worst representable distance for it).
    pub edist: u32,
}

impl Placement {
    /// The unmatched sentinel for a motif with the given embedded length.
    pub fn unmatched(embedded_len: u32) -> Self {
        Self { pos: None, edist: embedded_len }
    }

    pub fn is_matched(&self) -> bool {
        self.pos.is_some()
    }
}

/// Score every candidate offset and keep the one with the lowest embedded
/// mismatch count.
///
/// Candidates are scanned in the order given (ascending, from the seeder);
/// only a strictly lower distance displaces the running best, so ties keep
/// the first-seen offset. The running best also caps each subsequent
/// comparison, letting later candidates abort early. Offsets whose window
/// would run past the end of the read cannot hold a full-length placement
/// and are skipped.
pub fn best_match(
    embedding: &Embedding,
    motif_codes: &[u8],
    motif_embedded: &[u8],
    read_codes: &[u8],
    candidates: &[usize],
) -> Placement {
    let embedded_len = motif_embedded.len() as u32;
    let mut best: Option<(usize, u32)> = None;
    for &pos in candidates {
        let Some(window) = pos
            .checked_add(motif_codes.len())
            .and_then(|end| read_codes.get(pos..end))
        else {
            continue;
        };
        let threshold = best.map_or(embedded_len, |(_, edist)| edist);
        let edist = embedding.compare(window, motif_embedded, threshold);
        if best.map_or(true, |(_, d)| edist < d) {
            best = Some((pos, edist));
        }
    }
    match best {
        Some((pos, edist)) => Placement { pos: Some(pos), edist },
        None => Placement::unmatched(embedded_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::encode;

    #[test]
    fn exact_copy_scores_zero_at_its_offset() {
        let e = Embedding::with_seed(11);
        let motif = encode("ACGTACGT");
        let embedded = e.embed(&motif);
        let read = encode("TTTTACGTACGTTTTT");
        let p = best_match(&e, &motif, &embedded, &read, &[4]);
        assert_eq!(p, Placement { pos: Some(4), edist: 0 });
    }

    #[test]
    fn ties_keep_the_lowest_offset() {
        let e = Embedding::with_seed(5);
        let motif = encode("ACGT");
        let embedded = e.embed(&motif);
        let read = encode("ACGTACGT");
        let p = best_match(&e, &motif, &embedded, &read, &[0, 4]);
        assert_eq!(p, Placement { pos: Some(0), edist: 0 });
    }

    #[test]
    fn no_candidates_is_the_unmatched_sentinel() {
        let e = Embedding::with_seed(2);
        let motif = encode("ACGT");
        let embedded = e.embed(&motif);
        let p = best_match(&e, &motif, &embedded, &encode("AAAA"), &[]);
        assert_eq!(p, Placement::unmatched(12));
        assert!(!p.is_matched());
    }

    #[test]
    fn candidates_past_the_read_end_are_skipped() {
        let e = Embedding::with_seed(9);
        let motif = encode("ACGT");
        let embedded = e.embed(&motif);
        let read = encode("TTACGT");
        let p = best_match(&e, &motif, &embedded, &read, &[2, 5]);
        assert_eq!(p, Placement { pos: Some(2), edist: 0 });
    }
}
