//! Record input: the two-line motif list and streaming FASTQ/FASTA read
//! sources.
//!
//! Read sources are consumed one record at a time so a long file never has
//! to be resident in memory; motif files are small and materialized fully,
//! since every motif must be embedded before the first read is processed.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::common::{MotifScanError, SeqRecord};

/// Read-file layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadFormat {
    /// Fixed 4-line records: name, sequence, separator, quality.
    Fastq,
    /// `>`-headed records with sequence lines until the next header.
    Fasta,
}

/// Parse a motif file: alternating name and sequence lines, blank lines
/// skipped. A trailing name with no sequence line is an error.
pub fn read_motifs<R: BufRead>(reader: R) -> Result<Vec<SeqRecord>, MotifScanError> {
    let mut out = Vec::new();
    let mut pending: Option<String> = None;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match pending.take() {
            None => pending = Some(line.to_string()),
            Some(name) => out.push(SeqRecord { id: name, seq: line.to_string() }),
        }
    }
    if let Some(name) = pending {
        return Err(MotifScanError::TruncatedMotif(name));
    }
    Ok(out)
}

/// Open and parse a motif file.
pub fn read_motif_file(path: &Path) -> Result<Vec<SeqRecord>, MotifScanError> {
    read_motifs(BufReader::new(File::open(path)?))
}

/// Streaming 4-line FASTQ records. Quality lines are read and discarded.
pub struct FastqReads<R: BufRead> {
    lines: Lines<R>,
}

impl<R: BufRead> FastqReads<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }
}

impl<R: BufRead> Iterator for FastqReads<R> {
    type Item = Result<SeqRecord, MotifScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        let name = header.trim().trim_start_matches('@').to_string();
        let seq = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Some(Err(e.into())),
            None => return Some(Err(MotifScanError::TruncatedRecord(name))),
        };
        // separator and quality lines
        for _ in 0..2 {
            match self.lines.next() {
                Some(Ok(_)) => {}
                Some(Err(e)) => return Some(Err(e.into())),
                None => return Some(Err(MotifScanError::TruncatedRecord(name))),
            }
        }
        Some(Ok(SeqRecord { id: name, seq: seq.trim().to_string() }))
    }
}

/// Streaming multi-line FASTA records: a `>` header, then sequence lines
/// until the next header or end of input. Content before the first header
/// is ignored.
pub struct FastaReads<R: BufRead> {
    lines: Lines<R>,
    pending: Option<String>,
}

impl<R: BufRead> FastaReads<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), pending: None }
    }
}

impl<R: BufRead> Iterator for FastaReads<R> {
    type Item = Result<SeqRecord, MotifScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.pending.take() {
            Some(header) => header,
            None => loop {
                match self.lines.next()? {
                    Ok(line) => {
                        if let Some(rest) = line.trim().strip_prefix('>') {
                            break rest.trim().to_string();
                        }
                    }
                    Err(e) => return Some(Err(e.into())),
                }
            },
        };

        let mut seq = String::new();
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    let line = line.trim();
                    if let Some(rest) = line.strip_prefix('>') {
                        self.pending = Some(rest.trim().to_string());
                        break;
                    }
                    seq.push_str(line);
                }
                Some(Err(e)) => return Some(Err(e.into())),
                None => break,
            }
        }
        Some(Ok(SeqRecord { id: header, seq }))
    }
}

/// Open a read file in the given format as a streaming record source.
pub fn open_reads(
    path: &Path,
    format: ReadFormat,
) -> Result<Box<dyn Iterator<Item = Result<SeqRecord, MotifScanError>>>, MotifScanError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(match format {
        ReadFormat::Fastq => Box::new(FastqReads::new(reader)),
        ReadFormat::Fasta => Box::new(FastaReads::new(reader)),
    })
}
