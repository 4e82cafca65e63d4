use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::debug;
use structopt::StructOpt;

use crate::error::{Error, Result};
use crate::fasta::is_id_char;

#[derive(Debug, StructOpt)]
#[structopt(name = "fastagen", about = "Generate a random DNA sequence with a name hidden in it, as FASTA")]
pub struct Opt {
    /// Sequence length (prompted for if missing)
    #[structopt(short, long, allow_hyphen_values = true)]
    pub length: Option<i64>,

    /// Name to insert into the sequence
    #[structopt(short, long)]
    pub name: Option<String>,

    /// Sequence ID, letters, digits, '_' and '-' only
    #[structopt(short, long)]
    pub id: Option<String>,

    /// Description written after the ID in the FASTA header
    #[structopt(short, long)]
    pub description: Option<String>,

    /// RNG seed for reproducible output
    #[structopt(short, long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Directory the FASTA file is written to
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    pub output_dir: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

pub trait Prompt {
    /// Shows `message` and returns the raw answer. End of input gives "".
    fn prompt(&mut self, message: &str) -> io::Result<String>;
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub name: String,
    pub id: String,
    pub description: String,
    pub seed: Option<i64>,
    pub output_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from `opt`, asking `prompter` for every
    /// value that was not given on the command line.
    pub fn resolve<P: Prompt>(opt: &Opt, prompter: &mut P) -> Result<Config> {
        let length = match opt.length {
            Some(length) => length,
            None => {
                let answer = prompter.prompt("Enter sequence length: ")?;
                let answer = answer.trim();
                answer
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidNumber(answer.to_string()))?
            }
        };
        let length = validate_length(length)?;

        let id = field(&opt.id, prompter, "Enter sequence ID: ")?;
        validate_id(&id)?;

        let description = field(&opt.description, prompter, "Enter sequence description: ")?;
        let name = field(&opt.name, prompter, "Enter your name: ")?;

        let config = Config {
            length,
            name,
            id,
            description,
            seed: opt.seed,
            output_dir: opt.output_dir.clone(),
        };
        debug!("resolved {:?}", config);
        Ok(config)
    }
}

fn field<P: Prompt>(value: &Option<String>, prompter: &mut P, message: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(prompter.prompt(message)?.trim().to_string()),
    }
}

pub fn validate_length(length: i64) -> Result<usize> {
    if length <= 0 {
        return Err(Error::InvalidLength(length));
    }
    usize::try_from(length).map_err(|_| Error::InvalidLength(length))
}

/// Accepts IDs matching `^[A-Za-z0-9_-]+$`.
pub fn validate_id(id: &str) -> Result<()> {
    if !id.is_empty() && id.chars().all(is_id_char) {
        Ok(())
    } else {
        Err(Error::InvalidId(id.to_string()))
    }
}
