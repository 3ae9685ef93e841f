use super::{RecordReader, chop_line_break, split_header};
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};


/// Holds the header and sequence of a single
/// [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format) record. Quality scores
/// are checked for length against the sequence and then discarded.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastQ {
    pub header:   String,
    pub sequence: Vec<u8>,
}

impl FastQ {
    /// The record identifier: the header up to the first whitespace.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        split_header(&self.header).0
    }
}

/// A buffered reader for reading
/// [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format).
///
/// This does not support multiline FASTQ files. In other words, each sequence
/// must be on a single line, and the quality scores must be on a single line.
#[derive(Debug)]
pub struct FastQReader<R: std::io::Read> {
    fastq_reader: BufReader<R>,
    fastq_buffer: Vec<u8>,
}

impl<R: std::io::Read> FastQReader<R> {
    /// Creates an iterator over FASTQ data, wrapping the input in a buffered
    /// reader. Empty input results in an empty iterator.
    pub fn new(inner: R) -> Self {
        Self::from_bufreader(BufReader::new(inner))
    }

    /// Creates an iterator over FASTQ data from an existing `BufReader`.
    pub fn from_bufreader(reader: BufReader<R>) -> Self {
        FastQReader {
            fastq_reader: reader,
            fastq_buffer: Vec::new(),
        }
    }

    /// Reads the next line into the cleared buffer, without its line break.
    /// Returns the number of bytes read, including the line break.
    fn read_line(&mut self) -> std::io::Result<usize> {
        self.fastq_buffer.clear();
        let bytes = self.fastq_reader.read_until(b'\n', &mut self.fastq_buffer)?;
        chop_line_break(&mut self.fastq_buffer);
        Ok(bytes)
    }
}

impl FastQReader<File> {
    /// Creates an iterator over FASTQ data from a FASTQ file, using a buffered
    /// reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if file or permissions do not exist, or if the file is
    /// empty. The file path is included in the error message.
    pub fn from_filename<P>(filename: P) -> Result<FastQReader<File>, std::io::Error>
    where
        P: AsRef<Path>, {
        let file = Self::open_nonempty_file(filename)?;
        Ok(FastQReader::new(file))
    }
}

impl<R: std::io::Read> RecordReader for FastQReader<R> {
    const RECORD_NAME: &str = "FASTQ";
}

/// An iterator for buffered reading of a
/// [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format) file.
impl<R: std::io::Read> Iterator for FastQReader<R> {
    type Item = std::io::Result<FastQ>;

    fn next(&mut self) -> Option<Self::Item> {
        // Read HEADER line, skipping blank lines between records
        loop {
            match self.read_line() {
                Ok(0) => return None,
                Ok(_) if self.fastq_buffer.iter().all(u8::is_ascii_whitespace) => {}
                Ok(_) => break,
                Err(e) => return Some(Err(e)),
            }
        }

        let Some(header) = self.fastq_buffer.strip_prefix(b"@") else {
            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                "Missing '@' symbol at header line beginning! Ensure that the FASTQ file is not multi-line.",
            )));
        };

        if header.is_empty() {
            return Some(Err(IOError::new(ErrorKind::InvalidData, "Missing FASTQ header!")));
        }

        let header = match String::from_utf8(header.to_vec()) {
            Ok(s) => s,
            Err(e) => return Some(Err(IOError::new(ErrorKind::InvalidData, e))),
        };

        // Read SEQUENCE line, which may be blank
        match self.read_line() {
            Ok(0) => {
                return Some(Err(IOError::new(
                    ErrorKind::InvalidData,
                    format!("Missing FASTQ sequence! See header: {header}"),
                )));
            }
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }

        let sequence = std::mem::take(&mut self.fastq_buffer);

        // Read "+" line
        if let Err(e) = self.read_line() {
            return Some(Err(e));
        }

        if !self.fastq_buffer.starts_with(b"+") {
            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                format!("Missing '+' line! Ensure that the FASTQ file is not multi-line. See header: {header}"),
            )));
        }

        // Read QUALITY line
        let quality_bytes = match self.read_line() {
            Ok(bytes) => bytes,
            Err(e) => return Some(Err(e)),
        };

        if quality_bytes == 0 || self.fastq_buffer.len() != sequence.len() {
            if self.fastq_buffer.is_empty() {
                return Some(Err(IOError::new(
                    ErrorKind::InvalidData,
                    format!("Missing FASTQ quality scores! See header: {header}"),
                )));
            }

            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                format!(
                    "Sequence and quality score length mismatch ({s} != {q})! See: {header}",
                    s = sequence.len(),
                    q = self.fastq_buffer.len(),
                ),
            )));
        }

        Some(Ok(FastQ { header, sequence }))
    }
}

impl std::fmt::Display for FastQ {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "@{}\n{}\n", self.header, String::from_utf8_lossy(&self.sequence))
    }
}
