use super::*;
use std::io::Cursor;

#[test]
fn header_splitting() {
    assert_eq!(split_header("seq1 some description"), ("seq1", "some description"));
    assert_eq!(split_header("seq1\tx"), ("seq1", "x"));
    assert_eq!(split_header("seq1"), ("seq1", ""));
    assert_eq!(split_header(" seq1  x "), ("seq1", "x"));
}

#[test]
fn line_breaks() {
    assert_eq!(strip_line_break(b"AC\r\n"), b"AC");
    assert_eq!(strip_line_break(b"AC\n"), b"AC");
    assert_eq!(strip_line_break(b"AC"), b"AC");

    let mut buffer = b"GT\r\n".to_vec();
    chop_line_break(&mut buffer);
    assert_eq!(buffer, b"GT");
}

#[test]
fn sniffs_fasta() {
    let reader = SeqReader::new(Cursor::new("\n\n>s1 x\nAC\nGT\n>s2\nTT\n"), SeqFormat::Auto).unwrap();
    assert_eq!(reader.format(), SeqFormat::Fasta);

    let records: Vec<SeqRecord> = reader.collect::<std::io::Result<_>>().unwrap();
    assert_eq!(
        records,
        [
            SeqRecord {
                id:       "s1".to_string(),
                sequence: b"ACGT".to_vec(),
            },
            SeqRecord {
                id:       "s2".to_string(),
                sequence: b"TT".to_vec(),
            },
        ]
    );
}

#[test]
fn sniffs_fastq() {
    let reader = SeqReader::new(Cursor::new("  \n@r1 desc\nACGT\n+\nIIII\n"), SeqFormat::Auto).unwrap();
    assert_eq!(reader.format(), SeqFormat::FastQ);

    let records: Vec<SeqRecord> = reader.collect::<std::io::Result<_>>().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "r1");
    assert_eq!(records[0].sequence, b"ACGT");
}

#[test]
fn explicit_format_is_respected() {
    let mut reader = SeqReader::new(Cursor::new(">s1\nAC\n"), SeqFormat::FastQ).unwrap();
    assert_eq!(reader.format(), SeqFormat::FastQ);
    assert!(reader.next().unwrap().is_err());
}

#[test]
fn unknown_format() {
    let err = SeqReader::new(Cursor::new("ACGT\n"), SeqFormat::Auto).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let err = SeqReader::new(Cursor::new(" \n\t"), SeqFormat::Auto).unwrap_err();
    assert_eq!(err.to_string(), "No sequence data was found!");
}

#[test]
fn missing_file() {
    let err = SeqReader::from_filename("this/file/does/not/exist.fasta", SeqFormat::Auto).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("file open error for FASTA"), "{msg}");
    assert!(err.source().is_some());
}
