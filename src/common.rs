//! Shared types: the crate error enum and the plain named-sequence record
//! handed between the I/O layer and the engine.

/// Errors that can be returned by the library.
#[derive(thiserror::Error, Debug)]
pub enum MotifScanError {
    /// Returned if the k-mer length cannot be packed 2 bits per base into a
    /// 32-bit key.
    #[error("k-mer length must be between 1 and 15 (got {0})")]
    InvalidKmerLength(usize),
    /// Returned when a motif's embedded form would overrun the step table.
    #[error("motif '{name}' is {len} bases; at most {max} fit the embedding table")]
    MotifTooLong { name: String, len: usize, max: usize },
    /// Returned when there is nothing to search for.
    #[error("no motifs to search for")]
    EmptyMotifSet,
    /// Returned when a motif record has an empty sequence line.
    #[error("motif '{0}' has an empty sequence")]
    EmptyMotifSequence(String),
    /// Returned when a motif name line has no sequence line after it.
    #[error("motif file ends after name '{0}' with no sequence line")]
    TruncatedMotif(String),
    /// Returned when a 4-line read record stops short.
    #[error("read record '{0}' is truncated")]
    TruncatedRecord(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A named nucleotide sequence, as parsed from a motif or read file.
#[derive(Clone, Debug)]
pub struct SeqRecord {
    /// Identifier (header line with any `@`/`>` marker stripped).
    pub id: String,
    /// Raw sequence as read from the file; the alphabet is case-insensitive
    /// downstream, so no case rewriting happens here.
    pub seq: String,
}
