use super::*;
use std::io::ErrorKind;

fn record(id: &str, sequence: &[u8]) -> std::io::Result<SeqRecord> {
    Ok(SeqRecord {
        id:       id.to_string(),
        sequence: sequence.to_vec(),
    })
}

fn run(records: Vec<std::io::Result<SeqRecord>>, k: usize, options: ReportOptions) -> (String, RunSummary) {
    let mut table = CanonicalCountTable::new(k).unwrap();
    let mut report = ReportWriter::new(Vec::new(), options);
    let summary = write_report(records, &mut table, &mut report).unwrap();
    assert_eq!(table.total(), 0);
    (String::from_utf8(report.into_inner()).unwrap(), summary)
}

#[test]
fn header_only() {
    let (out, summary) = run(Vec::new(), 2, ReportOptions::default());
    assert_eq!(out, "seq_id\tAA\tAG\tAC\tAT\tGA\tGG\tGC\tGT\n");
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn frequency_rows() {
    let (out, summary) = run(vec![record("s1", b"AGCT")], 2, ReportOptions::default());
    let mut lines = out.lines();
    lines.next();

    let row: Vec<&str> = lines.next().unwrap().split('\t').collect();
    assert_eq!(
        row,
        [
            "s1",
            "0.0000000000",
            "0.3333333333",
            "0.0000000000",
            "0.0000000000",
            "0.3333333333",
            "0.0000000000",
            "0.3333333333",
            "0.0000000000",
        ]
    );
    assert!(lines.next().is_none());
    assert_eq!(
        summary,
        RunSummary {
            records:            1,
            degenerate_records: 0,
            windows:            3,
        }
    );
}

#[test]
fn count_rows() {
    let options = ReportOptions {
        values: ReportValues::Counts,
        ..ReportOptions::default()
    };
    let (out, _) = run(vec![record("a", b"AAAAA"), record("b", b"TTGC")], 2, options);
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(rows, ["a\t4\t0\t0\t0\t0\t0\t0\t0", "b\t1\t0\t1\t0\t0\t0\t1\t0"]);
}

#[test]
fn degenerate_rows_follow_policy() {
    let (out, summary) = run(vec![record("short", b"AC")], 5, ReportOptions::default());
    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("short\t0.0000000000\t"));
    assert_eq!(row.split('\t').count(), 1 + 512);
    assert_eq!(summary.degenerate_records, 1);

    let options = ReportOptions {
        policy: DegeneratePolicy::NaN,
        precision: 3,
        ..ReportOptions::default()
    };
    let (out, _) = run(vec![record("gap", b"AGNGT")], 3, options);
    let row = out.lines().nth(1).unwrap();
    assert!(row.split('\t').skip(1).all(|v| v == "NaN"));
}

#[test]
fn identical_records_identical_rows() {
    let seq = b"GGCCACCAAGGCCATTNACGacgt";
    let (out, summary) = run(vec![record("x", seq), record("x", seq)], 3, ReportOptions::default());
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
    assert_eq!(summary.records, 2);
}

#[test]
fn custom_delimiter_and_precision() {
    let options = ReportOptions {
        precision: 2,
        delimiter: b',',
        ..ReportOptions::default()
    };
    let (out, _) = run(vec![record("s", b"GGG")], 2, options);
    assert_eq!(out.lines().next().unwrap(), "seq_id,AA,AG,AC,AT,GA,GG,GC,GT");
    assert_eq!(out.lines().nth(1).unwrap(), "s,0.00,0.00,0.00,0.00,0.00,1.00,0.00,0.00");
}

#[test]
fn record_error_stops_report() {
    let records = vec![
        record("ok", b"ACGT"),
        Err(std::io::Error::new(ErrorKind::InvalidData, "Missing FASTA header!")),
        record("never", b"ACGT"),
    ];

    let mut table = CanonicalCountTable::new(2).unwrap();
    let mut report = ReportWriter::new(Vec::new(), ReportOptions::default());
    let err = write_report(records, &mut table, &mut report).unwrap_err();
    assert!(matches!(err, FreqError::Record(_)));

    let out = String::from_utf8(report.into_inner()).unwrap();
    assert_eq!(out.lines().count(), 2);
}
