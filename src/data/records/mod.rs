use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::Path,
};

/// A module for reading [FASTA](https://en.wikipedia.org/wiki/FASTA_format)
/// files.
pub mod fasta;
/// A module for reading [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format)
/// files.
pub mod fastq;

use fasta::{FastaReader, FastaSeq};
use fastq::{FastQ, FastQReader};

#[cfg(test)]
mod test;

#[derive(Debug)]
struct RecordError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

trait RecordReader {
    const RECORD_NAME: &str;

    /// Opens a file, checking to ensure that it is non-empty, and providing
    /// context for error messages.
    #[inline]
    fn open_nonempty_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();

        let file = File::open(path).map_err(|err| Self::new_wrapped("file open error", path, err))?;
        let metadata = file
            .metadata()
            .map_err(|err| Self::new_wrapped("metadata error", path, err))?;
        if metadata.len() == 0 {
            return Err(Self::new_kind("file empty", path, ErrorKind::InvalidInput));
        }

        Ok(file)
    }

    fn new_kind(description: &str, path: &Path, kind: ErrorKind) -> std::io::Error {
        std::io::Error::new(
            kind,
            format!(
                "{desc} for {name}: '{path}'",
                desc = description,
                name = Self::RECORD_NAME,
                path = path.display()
            ),
        )
    }

    fn new_wrapped(description: &str, path: &Path, err: std::io::Error) -> std::io::Error {
        std::io::Error::other(RecordError {
            description: format!(
                "{desc} for {name}: '{path}'",
                desc = description,
                name = Self::RECORD_NAME,
                path = path.display()
            ),
            source:      Box::new(err),
        })
    }
}

/// Removes a trailing `\n` or `\r\n` from a line.
#[inline]
fn strip_line_break(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Removes a trailing `\n` or `\r\n` from an owned buffer in place.
#[inline]
fn chop_line_break(buffer: &mut Vec<u8>) {
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    if buffer.last() == Some(&b'\r') {
        buffer.pop();
    }
}

/// Splits a header line into the record identifier (everything up to the
/// first whitespace) and the remaining comment.
#[inline]
#[must_use]
pub fn split_header(header: &str) -> (&str, &str) {
    let header = header.trim_start();
    match header.split_once(|c: char| c.is_ascii_whitespace()) {
        Some((id, comment)) => (id, comment.trim()),
        None => (header, ""),
    }
}

/// A sequence record reduced to what is needed for counting: an identifier
/// and the raw sequence bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SeqRecord {
    pub id:       String,
    pub sequence: Vec<u8>,
}

impl From<FastaSeq> for SeqRecord {
    #[inline]
    fn from(record: FastaSeq) -> Self {
        SeqRecord {
            id:       record.id().to_owned(),
            sequence: record.sequence,
        }
    }
}

impl From<FastQ> for SeqRecord {
    #[inline]
    fn from(record: FastQ) -> Self {
        SeqRecord {
            id:       record.id().to_owned(),
            sequence: record.sequence,
        }
    }
}

/// The container format of a sequence input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SeqFormat {
    /// Decide from the first non-whitespace byte (`>` or `@`).
    #[default]
    Auto,
    Fasta,
    FastQ,
}

/// A reader yielding [`SeqRecord`] from either FASTA or FASTQ input.
#[derive(Debug)]
pub enum SeqReader<R: Read> {
    Fasta(FastaReader<R>),
    FastQ(FastQReader<R>),
}

impl<R: Read> SeqReader<R> {
    /// Wraps `inner` in a reader for the given format. With
    /// [`SeqFormat::Auto`], the buffered input is inspected to choose one.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the input cannot be read, or if the format is
    /// [`SeqFormat::Auto`] and the input starts with neither `>` nor `@`.
    pub fn new(inner: R, format: SeqFormat) -> std::io::Result<Self> {
        let mut reader = BufReader::new(inner);
        let format = match format {
            SeqFormat::Auto => sniff_format(&mut reader)?,
            other => other,
        };

        Ok(match format {
            SeqFormat::FastQ => SeqReader::FastQ(FastQReader::from_bufreader(reader)),
            SeqFormat::Fasta | SeqFormat::Auto => SeqReader::Fasta(FastaReader::from_bufreader(reader)),
        })
    }

    /// The format being read.
    #[inline]
    #[must_use]
    pub fn format(&self) -> SeqFormat {
        match self {
            SeqReader::Fasta(_) => SeqFormat::Fasta,
            SeqReader::FastQ(_) => SeqFormat::FastQ,
        }
    }
}

impl SeqReader<File> {
    /// Opens a FASTA or FASTQ file.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file or permissions do not exist, if the file
    /// is empty, or if the format cannot be detected. The file path is
    /// included in the error message.
    pub fn from_filename<P: AsRef<Path>>(filename: P, format: SeqFormat) -> std::io::Result<Self> {
        let file = match format {
            SeqFormat::FastQ => FastQReader::<File>::open_nonempty_file(&filename)?,
            SeqFormat::Fasta | SeqFormat::Auto => FastaReader::<File>::open_nonempty_file(&filename)?,
        };
        SeqReader::new(file, format)
    }
}

impl<R: Read> Iterator for SeqReader<R> {
    type Item = std::io::Result<SeqRecord>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SeqReader::Fasta(reader) => reader.next().map(|r| r.map(SeqRecord::from)),
            SeqReader::FastQ(reader) => reader.next().map(|r| r.map(SeqRecord::from)),
        }
    }
}

/// Skips leading whitespace and peeks at the first record marker.
fn sniff_format<R: Read>(reader: &mut BufReader<R>) -> std::io::Result<SeqFormat> {
    loop {
        let buffer = reader.fill_buf()?;
        if buffer.is_empty() {
            return Err(std::io::Error::new(ErrorKind::InvalidData, "No sequence data was found!"));
        }

        let whitespace = buffer.iter().take_while(|b| b.is_ascii_whitespace()).count();
        if whitespace == buffer.len() {
            reader.consume(whitespace);
            continue;
        }

        return match buffer[whitespace] {
            b'>' => Ok(SeqFormat::Fasta),
            b'@' => Ok(SeqFormat::FastQ),
            _ => Err(std::io::Error::new(
                ErrorKind::InvalidData,
                "Unrecognized sequence format: the input must start with '>' (FASTA) or '@' (FASTQ)!",
            )),
        };
    }
}
