use std::error;
use std::fmt;

/// Error returned when a ratio over a sequence's bases is requested for a
/// zero-length sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequence;

impl fmt::Display for EmptySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GC content is undefined for an empty sequence")
    }
}

impl error::Error for EmptySequence {}

/// Errors that can occur while parsing a FASTA file.
#[derive(Debug)]
pub enum FastaError {
    /// IO error while reading the file
    Io(std::io::Error),
    /// The first line does not start with the `>` delimiter
    MissingHeader,
    /// The header has no space separating the version from the definition
    MissingDefinition,
}

impl fmt::Display for FastaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::MissingHeader => {
                write!(f, "Malformed FASTA file: first line must start with '>'")
            }
            Self::MissingDefinition => write!(
                f,
                "Malformed FASTA header: expected '>version definition'"
            ),
        }
    }
}

impl error::Error for FastaError {}

impl From<std::io::Error> for FastaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors that can occur when configuring an amplification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
        }
    }
}

impl error::Error for ConfigError {}

/// Errors that can occur when aggregating fragment statistics.
///
/// A statistics failure aborts only the reporting step; the population it
/// was computed over stays available for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// No fragments survived the seed exclusion; min/max/mean are undefined
    EmptyPopulation,
    /// The reference segment carries no template strand
    EmptySegment,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPopulation => {
                write!(f, "No fragments to aggregate: statistics are undefined")
            }
            Self::EmptySegment => {
                write!(f, "Reference segment has no template strand")
            }
        }
    }
}

impl error::Error for StatsError {}
