//! CLI for `motifscan scan`: per-read motif placements for every read in
//! every input file.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info, warn};
use motifscan::{open_reads, read_motif_file, Embedding, Engine, ReadFormat};

#[derive(Debug, Args)]
pub struct ScanCmd {
    /// Motif file (alternating name and sequence lines).
    #[arg(long, short = 'm', value_name = "FILE")]
    pub motifs: PathBuf,
    /// Read file(s), processed in order.
    #[arg(long, short = 'r', value_name = "FILE", num_args = 1.., required = true)]
    pub reads: Vec<PathBuf>,
    /// k-mer length used for seeding (must be below 16).
    #[arg(long, short = 'l', default_value_t = 3)]
    pub kmerlen: usize,
    /// Layout of the read files.
    #[arg(long, value_enum, default_value_t = FormatChoice::Fastq)]
    pub format: FormatChoice,
    /// Output file (default stdout).
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Fixed seed for the embedding table (reproducible placements).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatChoice {
    Fastq,
    Fasta,
}

impl From<FormatChoice> for ReadFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Fastq => ReadFormat::Fastq,
            FormatChoice::Fasta => ReadFormat::Fasta,
        }
    }
}

pub fn run(cmd: ScanCmd) -> Result<()> {
    let motifs = read_motif_file(&cmd.motifs)
        .with_context(|| format!("read motif file {}", cmd.motifs.display()))?;
    info!("found {} motifs in {}", motifs.len(), cmd.motifs.display());

    let embedding = match cmd.seed {
        Some(seed) => Embedding::with_seed(seed),
        None => Embedding::new(),
    };
    let engine = Engine::new(&motifs, cmd.kmerlen, embedding)?;

    let mut out: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let started = Instant::now();
    for path in &cmd.reads {
        info!("processing read file {}", path.display());
        let records = match open_reads(path, cmd.format.into()) {
            Ok(records) => records,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                continue;
            }
        };
        for record in records {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("skipping rest of {}: {e}", path.display());
                    break;
                }
            };
            let Some(report) = engine.map_read(&record.seq) else {
                debug!("read '{}' is no longer than the longest motif, skipped", record.id);
                continue;
            };
            writeln!(out, "Read: {}", record.id)?;
            for (name, placement) in engine.ranked(&report.placements) {
                match placement.pos {
                    Some(pos) => writeln!(out, "{name},{pos}")?,
                    None => writeln!(out, "{name},*")?,
                }
            }
        }
    }
    out.flush()?;
    info!("completed in {} ms", started.elapsed().as_millis());

    Ok(())
}
