//! FASTA records as downloaded from GenBank.

use crate::base::Sequence;
use crate::errors::FastaError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A single-record FASTA file.
///
/// The header line carries an accession version and a free-text definition
/// separated by the first space; the remaining lines concatenate into the
/// base string. Reading stops at the first blank line, so trailing comments
/// after the record are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Fasta {
    version: String,
    definition: String,
    sequence: Sequence,
}

impl Fasta {
    /// Load a FASTA record from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FastaError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a FASTA record from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, FastaError> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        let header = header
            .strip_prefix('>')
            .ok_or(FastaError::MissingHeader)?;
        let (version, definition) = header
            .split_once(' ')
            .ok_or(FastaError::MissingDefinition)?;

        let mut bases = String::new();
        for line in lines {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            bases.push_str(line);
        }

        Ok(Self {
            version: version.to_string(),
            definition: definition.to_string(),
            sequence: Sequence::new(bases),
        })
    }

    /// Get the accession version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get the definition line.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Get the record's bases.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}
