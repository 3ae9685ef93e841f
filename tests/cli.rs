use std::{fs, path::PathBuf, process::Command};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kmer_freq_cli_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn kmer_freq() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kmer_freq"))
}

#[test]
fn writes_tab_separated_report() {
    let path = temp_file("ok.fasta", ">s1 desc\nAGCT\n>s2\nAC\n");
    let output = kmer_freq().arg(&path).arg("2").output().unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "seq_id\tAA\tAG\tAC\tAT\tGA\tGG\tGC\tGT");
    assert_eq!(
        lines[1],
        "s1\t0.0000000000\t0.3333333333\t0.0000000000\t0.0000000000\t0.3333333333\t0.0000000000\t0.3333333333\t0.0000000000"
    );
    // s2 has a single AC window
    assert_eq!(lines[2].split('\t').nth(3), Some("1.0000000000"));
}

#[test]
fn counts_mode() {
    let path = temp_file("counts.fasta", ">s1\nAAAAA\n");
    let output = kmer_freq().arg(&path).arg("2").arg("--counts").output().unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().nth(1), Some("s1\t4\t0\t0\t0\t0\t0\t0\t0"));
}

#[test]
fn nan_policy() {
    let path = temp_file("short.fasta", ">tiny\nAC\n");
    let output = kmer_freq().args([path.as_os_str(), "5".as_ref(), "--empty".as_ref(), "nan".as_ref()]).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let row = stdout.lines().nth(1).unwrap();
    assert!(row.split('\t').skip(1).all(|v| v == "NaN"));
}

#[test]
fn kmer_size_out_of_range() {
    let path = temp_file("range.fasta", ">s1\nAGCT\n");
    for k in ["1", "11"] {
        let output = kmer_freq().arg(&path).arg(k).output().unwrap();
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_arguments() {
    let output = kmer_freq().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_input_file() {
    let output = kmer_freq().arg("/nonexistent/kmer_freq/input.fa").arg("3").output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_input() {
    let path = temp_file("bad.fasta", ">s1\nAC>GT\n");
    let output = kmer_freq().arg(&path).arg("2").output().unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(output.status.code(), Some(3));
}
