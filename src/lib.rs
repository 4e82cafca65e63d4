pub mod config;
pub mod error;
pub mod fasta;
pub mod logger;
pub mod seq;
pub mod stats;

use std::io::{self, Write};
use std::path::PathBuf;

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use config::{Config, Opt, Prompt};
use error::Result;
use fasta::Record;
use seq::Annotated;
use stats::Statistics;

/// What a run produced.
#[derive(Debug)]
pub struct Report {
    pub path: PathBuf,
    pub annotated: Annotated,
    pub statistics: Statistics,
}

/// Seeds the generator from `seed`, or from entropy when there is none.
/// The chosen seed is logged so the run can be repeated.
/// Negative seeds are reinterpreted bit for bit, so each seed still maps to
/// its own stream.
pub fn make_rng(seed: Option<i64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| {
        let seed = rand::thread_rng().gen::<i64>();
        info!("no seed given, using {}", seed);
        seed
    });
    ChaCha8Rng::seed_from_u64(seed as u64)
}

/// Generates the sequence, hides the name in it and writes the FASTA file.
pub fn run<R: Rng>(config: &Config, rng: &mut R) -> Result<Report> {
    let sequence = seq::generate_sequence(config.length, rng)?;
    let annotated = seq::insert_name(&sequence, &config.name, rng);
    if let Some(pos) = annotated.offset {
        info!("inserted '{}' at offset {}", annotated.name, pos);
    }

    let statistics = Statistics::compute(&sequence);

    let path = fasta::output_path(&config.output_dir, &config.id);
    let record = Record {
        id: &config.id,
        description: &config.description,
        sequence: &annotated.sequence,
    };
    fasta::write_record(&path, &record)?;

    Ok(Report {
        path,
        annotated,
        statistics,
    })
}

/// Prints where the record went and its statistics.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "Sequence saved to file {}", report.path.display())?;
    writeln!(out, "Sequence statistics:")?;
    writeln!(out, "{}", report.statistics)
}

/// Resolves the configuration, runs and reports. Returns the process exit
/// code: 0 on success, 1 after printing the error to `err`.
pub fn execute<P: Prompt, W: Write, E: Write>(
    opt: &Opt,
    prompter: &mut P,
    out: &mut W,
    err: &mut E,
) -> i32 {
    let result = Config::resolve(opt, prompter)
        .and_then(|config| run(&config, &mut make_rng(config.seed)))
        .and_then(|report| write_report(&report, out).map_err(Into::into));

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}
