//! The scan pipeline: prepared motif set, per-read placement and scoring,
//! and the running best across a whole batch of reads.
//!
//! For each read the engine builds a fresh k-mer index, seeds and matches
//! every motif against it, and sums the embedded distances into the read's
//! total. A read in which any motif went unmatched is scored at the
//! worst-case total, so a fully-mapped read always beats a partially-mapped
//! one no matter how good the partial distances are.

use crate::alphabet;
use crate::common::{MotifScanError, SeqRecord};
use crate::embedding::Embedding;
use crate::index::KmerIndex;
use crate::matcher::{best_match, Placement};
use crate::seed::seed_candidates;

/// Window support demanded on the first seeding pass.
const STRONG_SUPPORT: usize = 2;
/// Fallback support when the strong pass proposes nothing; trades precision
/// for recall on short or low-complexity motifs.
const WEAK_SUPPORT: usize = 1;

/// A motif with its alphabet codes and embedded reference, computed once.
#[derive(Clone, Debug)]
struct PreparedMotif {
    name: String,
    codes: Vec<u8>,
    embedded: Vec<u8>,
}

/// Placements and score of one read.
#[derive(Clone, Debug)]
pub struct ReadReport {
    /// One placement per motif, in motif-file order.
    pub placements: Vec<Placement>,
    /// Sum of embedded distances, forced to [`Engine::worst_total`] when
    /// any motif went unmatched.
    pub total: u64,
}

/// The configured matching engine: embedding table, k-mer length, and the
/// pre-embedded motif set. Immutable once constructed.
pub struct Engine {
    embedding: Embedding,
    kmer_len: usize,
    motifs: Vec<PreparedMotif>,
    max_motif_len: usize,
    worst_total: u64,
}

impl Engine {
    /// Validate the configuration and embed every motif.
    pub fn new(
        motifs: &[SeqRecord],
        kmer_len: usize,
        embedding: Embedding,
    ) -> Result<Self, MotifScanError> {
        if kmer_len < 1 || kmer_len >= 16 {
            return Err(MotifScanError::InvalidKmerLength(kmer_len));
        }
        if motifs.is_empty() {
            return Err(MotifScanError::EmptyMotifSet);
        }
        let max_len = Embedding::max_source_len();
        let mut prepared = Vec::with_capacity(motifs.len());
        for m in motifs {
            if m.seq.is_empty() {
                return Err(MotifScanError::EmptyMotifSequence(m.id.clone()));
            }
            if m.seq.len() > max_len {
                return Err(MotifScanError::MotifTooLong {
                    name: m.id.clone(),
                    len: m.seq.len(),
                    max: max_len,
                });
            }
            let codes = alphabet::encode(&m.seq);
            let embedded = embedding.embed(&codes);
            prepared.push(PreparedMotif { name: m.id.clone(), codes, embedded });
        }
        let max_motif_len = prepared.iter().map(|m| m.codes.len()).max().unwrap_or(0);
        let worst_total = prepared.iter().map(|m| m.embedded.len() as u64).sum();
        Ok(Self { embedding, kmer_len, motifs: prepared, max_motif_len, worst_total })
    }

    pub fn kmer_len(&self) -> usize {
        self.kmer_len
    }

    pub fn motif_count(&self) -> usize {
        self.motifs.len()
    }

    /// Worst representable read total: the score of a read in which every
    /// motif went unmatched at its full embedded distance.
    pub fn worst_total(&self) -> u64 {
        self.worst_total
    }

    /// Place every motif in one read.
    ///
    /// Returns `None` for reads no longer than the longest motif; they
    /// cannot contain a full-length placement and are skipped without being
    /// indexed.
    pub fn map_read(&self, seq: &str) -> Option<ReadReport> {
        let codes = alphabet::encode(seq);
        if codes.len() <= self.max_motif_len {
            return None;
        }
        let index = KmerIndex::build(&codes, self.kmer_len);

        let mut placements = Vec::with_capacity(self.motifs.len());
        let mut total = 0u64;
        for motif in &self.motifs {
            let mut candidates = seed_candidates(&index, &motif.codes, STRONG_SUPPORT);
            if candidates.is_empty() {
                candidates = seed_candidates(&index, &motif.codes, WEAK_SUPPORT);
            }
            let placement =
                best_match(&self.embedding, &motif.codes, &motif.embedded, &codes, &candidates);
            total += u64::from(placement.edist);
            placements.push(placement);
        }

        if placements.iter().any(|p| !p.is_matched()) {
            total = self.worst_total;
        }
        Some(ReadReport { placements, total })
    }

    /// Label `placements` with motif names and order them by read position,
    /// unmatched motifs last. `placements` must be parallel to the motif
    /// set, as produced by [`Engine::map_read`].
    pub fn ranked<'a>(&'a self, placements: &[Placement]) -> Vec<(&'a str, Placement)> {
        let mut rows: Vec<(&str, Placement)> = self
            .motifs
            .iter()
            .zip(placements)
            .map(|(m, p)| (m.name.as_str(), *p))
            .collect();
        rows.sort_by_key(|(_, p)| p.pos.unwrap_or(usize::MAX));
        rows
    }

    /// The all-unmatched placement set, one sentinel per motif.
    fn unmatched_placements(&self) -> Vec<Placement> {
        self.motifs
            .iter()
            .map(|m| Placement::unmatched(m.embedded.len() as u32))
            .collect()
    }
}

/// Running minimum over read totals, with the placement snapshot that
/// produced it.
///
/// Starts at the worst-case total with an all-unmatched snapshot; a read
/// replaces snapshot and total wholesale when its total is strictly lower,
/// never field by field.
pub struct BestTracker {
    read_name: Option<String>,
    placements: Vec<Placement>,
    total: u64,
}

impl BestTracker {
    pub fn new(engine: &Engine) -> Self {
        Self {
            read_name: None,
            placements: engine.unmatched_placements(),
            total: engine.worst_total(),
        }
    }

    /// Offer one read's report; returns `true` if it became the new best.
    pub fn offer(&mut self, read_name: &str, report: &ReadReport) -> bool {
        if report.total < self.total {
            self.read_name = Some(read_name.to_string());
            self.placements = report.placements.clone();
            self.total = report.total;
            true
        } else {
            false
        }
    }

    /// Name of the best read seen so far, `None` while nothing has improved
    /// on the initial sentinel.
    pub fn read_name(&self) -> Option<&str> {
        self.read_name.as_deref()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(items: &[(&str, &str)]) -> Vec<SeqRecord> {
        items
            .iter()
            .map(|(id, seq)| SeqRecord { id: id.to_string(), seq: seq.to_string() })
            .collect()
    }

    #[test]
    fn exact_motif_is_placed_with_zero_distance() {
        let engine =
            Engine::new(&records(&[("m", "ACGTACGT")]), 3, Embedding::with_seed(1)).unwrap();
        let report = engine.map_read("TTTTACGTACGTTTTT").unwrap();
        assert_eq!(report.placements[0], Placement { pos: Some(4), edist: 0 });
        assert_eq!(report.total, 0);
    }

    #[test]
    fn undersized_reads_are_skipped() {
        let engine =
            Engine::new(&records(&[("m", "ACGTACGT")]), 3, Embedding::with_seed(1)).unwrap();
        // a read exactly as long as the motif is rejected too
        assert!(engine.map_read("ACGTACGT").is_none());
        assert!(engine.map_read("ACG").is_none());
        assert!(engine.map_read("").is_none());
    }

    #[test]
    fn unmatched_motif_forces_the_worst_total() {
        let motifs = records(&[("present", "ACGTAC"), ("absent", "GGGGGG")]);
        let engine = Engine::new(&motifs, 3, Embedding::with_seed(4)).unwrap();
        let report = engine.map_read("TTTTACGTACTTTT").unwrap();
        assert_eq!(report.placements[0], Placement { pos: Some(4), edist: 0 });
        assert!(!report.placements[1].is_matched());
        assert_eq!(engine.worst_total(), 36);
        assert_eq!(report.total, 36);
    }

    #[test]
    fn fully_mapped_reads_beat_partially_mapped_ones() {
        let motifs = records(&[("a", "ACGTAC"), ("b", "GGGGGG")]);
        let engine = Engine::new(&motifs, 3, Embedding::with_seed(8)).unwrap();
        let mut best = BestTracker::new(&engine);

        let partial = engine.map_read("TTTTACGTACTTTT").unwrap();
        // ties the initial sentinel, so it never displaces it
        assert!(!best.offer("partial", &partial));
        assert_eq!(best.read_name(), None);

        let full = engine.map_read("ACGTACGGGGGGTTT").unwrap();
        assert_eq!(full.total, 0);
        assert!(best.offer("full", &full));
        assert_eq!(best.read_name(), Some("full"));

        assert!(!best.offer("worse", &partial));
        assert_eq!(best.total(), 0);
        assert_eq!(best.read_name(), Some("full"));
    }

    #[test]
    fn ranked_orders_by_position_with_unmatched_last() {
        let motifs = records(&[("late", "GGCCGG"), ("missing", "AAAAAA"), ("early", "ACGTAC")]);
        let engine = Engine::new(&motifs, 3, Embedding::with_seed(6)).unwrap();
        let report = engine.map_read("TTACGTACTTGGCCGGTTT").unwrap();
        let ranked = engine.ranked(&report.placements);
        assert_eq!(ranked[0].0, "early");
        assert_eq!(ranked[0].1.pos, Some(2));
        assert_eq!(ranked[1].0, "late");
        assert_eq!(ranked[1].1.pos, Some(10));
        assert_eq!(ranked[2].0, "missing");
        assert_eq!(ranked[2].1.pos, None);
    }

    #[test]
    fn configuration_errors_fail_fast() {
        let motifs = records(&[("m", "ACGT")]);
        assert!(matches!(
            Engine::new(&motifs, 16, Embedding::with_seed(0)),
            Err(MotifScanError::InvalidKmerLength(16))
        ));
        assert!(matches!(
            Engine::new(&motifs, 0, Embedding::with_seed(0)),
            Err(MotifScanError::InvalidKmerLength(0))
        ));
        assert!(matches!(
            Engine::new(&[], 3, Embedding::with_seed(0)),
            Err(MotifScanError::EmptyMotifSet)
        ));

        let long = "A".repeat(Embedding::max_source_len() + 1);
        assert!(matches!(
            Engine::new(&records(&[("m", long.as_str())]), 3, Embedding::with_seed(0)),
            Err(MotifScanError::MotifTooLong { .. })
        ));
        assert!(matches!(
            Engine::new(&records(&[("m", "")]), 3, Embedding::with_seed(0)),
            Err(MotifScanError::EmptyMotifSequence(_))
        ));
    }
}
