use crate::kmer::KmerError;
use std::{error::Error, fmt::Display, path::PathBuf};

/// Exit status for command-line usage errors, such as an out-of-range k-mer
/// length.
pub const EXIT_USAGE: i32 = 2;
/// Exit status for input that cannot be opened, read, or parsed.
pub const EXIT_INPUT: i32 = 3;
/// Exit status for failures writing the report.
pub const EXIT_OUTPUT: i32 = 1;

#[macro_export]
macro_rules! unwrap_or_return_some_err {
    ($expression:expr) => {
        match $expression {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        }
    };
}

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display + Error,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                if let Some(source) = e.source() {
                    eprintln!("\nCaused by: {source}");
                }
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Top-level failures of a frequency run, each carrying a distinct exit code.
#[derive(Debug)]
#[non_exhaustive]
pub enum FreqError {
    /// The requested k-mer length could not be used.
    Usage(KmerError),
    /// The sequence input could not be opened.
    Input { path: PathBuf, source: std::io::Error },
    /// A sequence record could not be read or parsed.
    Record(std::io::Error),
    /// The report could not be written.
    Output(std::io::Error),
}

impl Display for FreqError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FreqError::Usage(e) => write!(f, "{e}"),
            FreqError::Input { path, source } => write!(f, "failed reading '{}': {source}", path.display()),
            FreqError::Record(e) => write!(f, "invalid sequence record: {e}"),
            FreqError::Output(e) => write!(f, "failed writing report: {e}"),
        }
    }
}

impl Error for FreqError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FreqError::Usage(_) => None,
            FreqError::Input { source, .. } => source.source(),
            FreqError::Record(e) => e.source(),
            FreqError::Output(e) => e.source(),
        }
    }
}

impl GetCode for FreqError {
    fn get_code(&self) -> i32 {
        match self {
            FreqError::Usage(_) => EXIT_USAGE,
            FreqError::Input { .. } | FreqError::Record(_) => EXIT_INPUT,
            FreqError::Output(_) => EXIT_OUTPUT,
        }
    }
}

impl From<KmerError> for FreqError {
    #[inline]
    fn from(e: KmerError) -> Self {
        FreqError::Usage(e)
    }
}
