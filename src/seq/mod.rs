use rand::Rng;

use crate::error::{Error, Result};

pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Draws `length` nucleotides uniformly from `NUCLEOTIDES`.
pub fn generate_sequence<R: Rng>(length: usize, rng: &mut R) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidLength(0));
    }

    let mut seq = String::with_capacity(length);
    for _ in 0..length {
        seq.push(NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())]);
    }

    Ok(seq)
}

/// A sequence with a name token spliced into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotated {
    pub sequence: String,
    pub name: String,
    /// Byte offset of the name, `None` if nothing was inserted.
    pub offset: Option<usize>,
}

impl Annotated {
    /// Removes the name again and returns the sequence it was inserted into.
    pub fn original(&self) -> String {
        match self.offset {
            Some(pos) => {
                let mut seq = String::with_capacity(self.sequence.len() - self.name.len());
                seq.push_str(&self.sequence[..pos]);
                seq.push_str(&self.sequence[pos + self.name.len()..]);
                seq
            }
            None => self.sequence.clone(),
        }
    }
}

/// Splices `name` into a copy of `seq` at an offset drawn from `0..=seq.len()`.
///
/// An empty name leaves the sequence as is and does not touch `rng`.
pub fn insert_name<R: Rng>(seq: &str, name: &str, rng: &mut R) -> Annotated {
    if name.is_empty() {
        return Annotated {
            sequence: seq.to_string(),
            name: String::new(),
            offset: None,
        };
    }

    // seq is pure ASCII, so every byte offset is a char boundary
    let pos = rng.gen_range(0..=seq.len());
    let mut sequence = String::with_capacity(seq.len() + name.len());
    sequence.push_str(&seq[..pos]);
    sequence.push_str(name);
    sequence.push_str(&seq[pos..]);

    Annotated {
        sequence,
        name: name.to_string(),
        offset: Some(pos),
    }
}
