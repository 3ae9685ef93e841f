use super::{RecordReader, chop_line_break, split_header, strip_line_break};
use crate::unwrap_or_return_some_err;
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};


/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    /// The record identifier: the header up to the first whitespace.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        split_header(&self.name).0
    }

    /// Any text following the identifier on the header line.
    #[inline]
    #[must_use]
    pub fn comment(&self) -> &str {
        split_header(&self.name).1
    }
}

/// Structure for buffered reading of `FASTA` files.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:       BufReader<R>,
    buffer:       Vec<u8>,
    first_record: bool,
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader. Nothing is read until the first call to `next`.
    pub fn new(inner: R) -> Self {
        Self::from_bufreader(BufReader::new(inner))
    }

    /// Creates an iterator over FASTA data from an existing `BufReader`.
    pub fn from_bufreader(reader: BufReader<R>) -> Self {
        FastaReader {
            reader,
            buffer: Vec::new(),
            first_record: true,
        }
    }

    fn get_error(msg: &str, header: Option<&str>) -> std::io::Result<FastaSeq> {
        if let Some(header) = header {
            Err(IOError::new(ErrorKind::InvalidData, format!("{msg} See header: {header}")))
        } else {
            Err(IOError::new(ErrorKind::InvalidData, msg))
        }
    }

    /// Reads sequence lines up to and including the next `>` into the buffer
    /// and joins them, without line breaks.
    fn read_sequence(&mut self) -> std::io::Result<Vec<u8>> {
        self.reader.read_until(b'>', &mut self.buffer)?;
        Ok(join_lines(&self.buffer))
    }

    /// Read the first record, ensuring that the file is not slurped when no `>`
    /// is present.
    ///
    /// If `Some(Ok(_))` is returned, then the leading `>` will already be
    /// consumed for the next record if present, and the buffer will contain the
    /// last sequence and trailing '>' if present).
    fn read_first_record(&mut self) -> Option<std::io::Result<FastaSeq>> {
        self.first_record = false;

        loop {
            let bytes = unwrap_or_return_some_err!(self.reader.read_until(b'\n', &mut self.buffer));
            if bytes == 0 {
                return Some(Self::get_error("No FASTA data found!", None));
            }

            if let Some(header) = self.buffer.strip_prefix(b">") {
                let header = strip_line_break(header);

                if header.is_empty() {
                    return Some(Self::get_error("Missing FASTA header!", None));
                }

                let name = String::from_utf8_lossy(header).into_owned();

                if header.contains(&b'>') {
                    return Some(Self::get_error(
                        "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a header!",
                        Some(&name),
                    ));
                }

                self.buffer.clear();
                return self.finish_record(name);
            } else if self.buffer.iter().all(u8::is_ascii_whitespace) {
                // Clear the whitespace
                self.buffer.clear();
            } else {
                return Some(Self::get_error("The FASTA file must start with a '>' symbol!", None));
            }
        }
    }

    /// Reads the sequence following an already parsed header and checks that
    /// the record ended on a newline followed by `>` or at end of input. The
    /// sequence may be empty.
    fn finish_record(&mut self, name: String) -> Option<std::io::Result<FastaSeq>> {
        let sequence = unwrap_or_return_some_err!(self.read_sequence());

        // An empty sequence leaves only the next record's '>' in the buffer.
        // Check to make sure we read the full sequence
        if !self.buffer.ends_with(b"\n>") && self.buffer != b">" {
            if self.buffer.ends_with(b">") {
                return Some(Self::get_error(
                    "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a sequence!",
                    Some(&name),
                ));
            }
            // We have finished iteration
            self.buffer.clear();
        }

        Some(Ok(FastaSeq { name, sequence }))
    }
}

impl FastaReader<File> {
    /// Reads a fasta file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if file or permissions do not exist, or if the file is
    /// empty. The file path is included in the error message.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        let file = Self::open_nonempty_file(filename)?;
        Ok(FastaReader::new(file))
    }
}

impl<R: std::io::Read> RecordReader for FastaReader<R> {
    const RECORD_NAME: &str = "FASTA";
}

/// An iterator for buffered reading of
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        // Special case logic for first record to ensure we don't slurp file.
        if self.first_record {
            return self.read_first_record();
        }

        // The buffer will always contain the last sequence, except when the end
        // of the file is reached, at which point we clear it.
        if self.buffer.is_empty() {
            return None;
        }

        // Read the header line that follows the consumed '>'
        self.buffer.clear();
        unwrap_or_return_some_err!(self.reader.read_until(b'\n', &mut self.buffer));
        chop_line_break(&mut self.buffer);

        if self.buffer.is_empty() {
            return Some(Self::get_error("Missing FASTA header!", None));
        }

        let name = String::from_utf8_lossy(&self.buffer).into_owned();
        if self.buffer.contains(&b'>') {
            return Some(Self::get_error(
                "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a header!",
                Some(&name),
            ));
        }

        self.buffer.clear();
        self.finish_record(name)
    }
}

/// Concatenates the lines of a buffer, dropping line breaks and a trailing
/// `>`.
fn join_lines(buffer: &[u8]) -> Vec<u8> {
    let buffer = buffer.strip_suffix(b">").unwrap_or(buffer);
    let mut sequence = Vec::with_capacity(buffer.len());
    for line in buffer.split(|&b| b == b'\n') {
        sequence.extend_from_slice(line.strip_suffix(b"\r").unwrap_or(line));
    }
    sequence
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}
