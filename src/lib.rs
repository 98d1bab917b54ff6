//! # motifscan
//!
//! Locates short nucleotide motifs inside long, noisy sequencer reads and
//! picks the single best-matching read across a batch of files.
//!
//! Matching tolerates the insertions, deletions and substitutions typical
//! of long-read sequencing without ever computing edit distance: motifs and
//! read windows are stretched by a shared randomized [`Embedding`] under
//! which an early-terminating Hamming comparison approximates edit
//! distance. Candidate windows come from a per-read [`KmerIndex`]: the
//! motif is cut into disjoint k-mer windows, each window found in the read
//! votes for an alignment offset, and offsets with enough votes are scored
//! by the matcher.
//!
//! ### Example
//! ```
//! use motifscan::{Embedding, Engine, SeqRecord};
//!
//! let motifs = vec![SeqRecord { id: "adapter".into(), seq: "ACGTACGT".into() }];
//! let engine = Engine::new(&motifs, 3, Embedding::with_seed(7)).unwrap();
//! let report = engine.map_read("TTTTACGTACGTTTTT").unwrap();
//! assert_eq!(report.placements[0].pos, Some(4));
//! assert_eq!(report.total, 0);
//! ```

pub mod alphabet;
pub mod common;
pub mod embedding;
pub mod engine;
pub mod index;
pub mod io;
pub mod matcher;
pub mod seed;

pub use common::{MotifScanError, SeqRecord};
pub use embedding::{Embedding, EMBED_FACTOR, MAX_EMBEDDED_LEN};
pub use engine::{BestTracker, Engine, ReadReport};
pub use index::{pack_window, KmerIndex};
pub use io::{open_reads, read_motif_file, read_motifs, FastaReads, FastqReads, ReadFormat};
pub use matcher::{best_match, Placement};
pub use seed::seed_candidates;
