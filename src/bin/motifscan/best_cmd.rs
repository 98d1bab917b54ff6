//! CLI for `motifscan best`: scan every read in every input file, keep the
//! best-scoring read, and report only its placement set.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info, warn};
use motifscan::{
    open_reads, read_motif_file, BestTracker, Embedding, Engine, Placement, ReadFormat,
};

#[derive(Debug, Args)]
pub struct BestCmd {
    /// Motif file (alternating name and sequence lines).
    #[arg(long, short = 'm', value_name = "FILE")]
    pub motifs: PathBuf,
    /// Read file(s), processed in order.
    #[arg(long, short = 'r', value_name = "FILE", num_args = 1.., required = true)]
    pub reads: Vec<PathBuf>,
    /// k-mer length used for seeding (must be below 16).
    #[arg(long, short = 'l', default_value_t = 5)]
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
    /// Optional TSV summary of the winning placement set.
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,
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

pub fn run(cmd: BestCmd) -> Result<()> {
    let motifs = read_motif_file(&cmd.motifs)
        .with_context(|| format!("read motif file {}", cmd.motifs.display()))?;
    info!("found {} motifs in {}", motifs.len(), cmd.motifs.display());

    let embedding = match cmd.seed {
        Some(seed) => Embedding::with_seed(seed),
        None => Embedding::new(),
    };
    let engine = Engine::new(&motifs, cmd.kmerlen, embedding)?;
    let mut best = BestTracker::new(&engine);

    let started = Instant::now();
    let mut scanned = 0u64;
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
            scanned += 1;
            if best.offer(&record.id, &report) {
                debug!("new best read '{}' with total distance {}", record.id, report.total);
            }
        }
    }
    info!("scanned {} reads in {} ms", scanned, started.elapsed().as_millis());

    let mut out: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match best.read_name() {
        Some(name) => writeln!(out, "Best read: {} (total distance {})", name, best.total())?,
        None => writeln!(out, "Best read: * (no read mapped every motif)")?,
    }
    let ranked = engine.ranked(best.placements());
    for (name, placement) in &ranked {
        match placement.pos {
            Some(pos) => writeln!(out, "{name},{pos},{}", placement.edist)?,
            None => writeln!(out, "{name},*,*")?,
        }
    }
    out.flush()?;

    if let Some(path) = &cmd.summary {
        write_summary(path, &ranked)
            .with_context(|| format!("write summary {}", path.display()))?;
    }

    Ok(())
}

fn write_summary(path: &Path, rows: &[(&str, Placement)]) -> Result<()> {
    let mut w = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    w.write_record(["motif", "position", "edist"])?;
    for (name, placement) in rows {
        let (pos, edist) = match placement.pos {
            Some(pos) => (pos.to_string(), placement.edist.to_string()),
            None => ("*".to_string(), "*".to_string()),
        };
        w.write_record([*name, pos.as_str(), edist.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
