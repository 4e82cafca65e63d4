use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

pub fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Replaces every character that is not safe in a filename with `_`.
pub fn sanitize_id(id: &str) -> String {
    id.chars().map(|c| if is_id_char(c) { c } else { '_' }).collect()
}

/// `<dir>/<sanitized id>.fasta`, or just the file name when `dir` is `.`.
pub fn output_path<P: AsRef<Path>>(dir: P, id: &str) -> PathBuf {
    let file_name = format!("{}.fasta", sanitize_id(id));
    let dir = dir.as_ref();
    if dir == Path::new(".") {
        PathBuf::from(file_name)
    } else {
        dir.join(file_name)
    }
}

/// A single FASTA record, written as a header line and one sequence line.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    pub id: &'a str,
    pub description: &'a str,
    pub sequence: &'a str,
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">{} {}", self.id, self.description)?;
        writeln!(f, "{}", self.sequence)
    }
}

/// Writes `record` to `path`, replacing any existing file.
pub fn write_record<P: AsRef<Path>>(path: P, record: &Record) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "{}", record)?;
    out.flush()?;

    debug!("wrote {} bytes of sequence to {}", record.sequence.len(), path.display());
    Ok(())
}
