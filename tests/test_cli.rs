//! CLI integration tests.
//! Drives the binary against small FASTA files on disk.

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const SEGMENT_RECORD: &str = "\
>TEST.1 synthetic 40-base segment
AAAACCCCACACACACACACACACACACACACGGGGAAAA
";

/// Get the amplisim binary command
fn amplisim_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_amplisim"))
}

/// Write a FASTA record into a fresh temp directory
fn write_fasta(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_help() {
    amplisim_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PCR amplification simulator"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version() {
    amplisim_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("amplisim"));
}

#[test]
fn test_run_doubles_population_and_writes_tsv() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(&dir, "segment.fasta", SEGMENT_RECORD);
    let output = dir.path().join("fragments.tsv");

    // Both primers bind and the default window spans the whole segment,
    // so three cycles yield 2^3 fragment pairs of full-length strands.
    amplisim_cmd()
        .args([
            "run",
            "-f",
            fasta.to_str().unwrap(),
            "--forward",
            "AAAACCCC",
            "--reverse",
            "TTTTCCCC",
            "--cycles",
            "3",
            "--seed",
            "42",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record: TEST.1"))
        .stdout(predicate::str::contains("Amplification complete"))
        .stdout(predicate::str::contains("Fragment pairs: 8"))
        .stdout(predicate::str::contains("Fragments written to"));

    let tsv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "template\tsynthesis");
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_run_reports_product_statistics() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(&dir, "segment.fasta", SEGMENT_RECORD);

    // A short, tight fall-off window truncates every copy, so the product
    // summary has strands to report.
    amplisim_cmd()
        .args([
            "run",
            "-f",
            fasta.to_str().unwrap(),
            "--forward",
            "AAAACCCC",
            "--reverse",
            "TTTTCCCC",
            "--cycles",
            "3",
            "--fall-off-pivot",
            "10",
            "--fall-off-noise",
            "1",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Summary"))
        .stdout(predicate::str::contains("Product strands: 6"));
}

#[test]
fn test_run_full_length_products_have_no_statistics() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(&dir, "segment.fasta", SEGMENT_RECORD);

    amplisim_cmd()
        .args([
            "run",
            "-f",
            fasta.to_str().unwrap(),
            "--forward",
            "AAAACCCC",
            "--reverse",
            "TTTTCCCC",
            "--cycles",
            "2",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No product statistics"));
}

#[test]
fn test_run_rejects_invalid_noise() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(&dir, "segment.fasta", SEGMENT_RECORD);

    amplisim_cmd()
        .args([
            "run",
            "-f",
            fasta.to_str().unwrap(),
            "--forward",
            "AAAACCCC",
            "--reverse",
            "TTTTCCCC",
            "--fall-off-noise",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid fall-off parameters"));
}

#[test]
fn test_run_rejects_malformed_fasta() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(&dir, "broken.fasta", "no header marker\nACGT\n");

    amplisim_cmd()
        .args([
            "run",
            "-f",
            fasta.to_str().unwrap(),
            "--forward",
            "AAAA",
            "--reverse",
            "TTTT",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read FASTA file"));
}

#[test]
fn test_translate_prints_protein() {
    let dir = TempDir::new().unwrap();
    let fasta = write_fasta(&dir, "orf.fasta", ">ORF.1 tiny open reading frame\nATGAAATAA\n");

    amplisim_cmd()
        .args(["translate", "-f", fasta.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record: ORF.1"))
        .stdout(predicate::str::contains("3 codons"))
        .stdout(predicate::str::contains("MK"));
}

#[test]
fn test_translate_slices_with_genbank_coordinates() {
    let dir = TempDir::new().unwrap();
    // The ORF starts at base 5 of the record
    let fasta = write_fasta(&dir, "orf.fasta", ">ORF.2 offset reading frame\nCCCCATGAAATAA\n");

    amplisim_cmd()
        .args([
            "translate",
            "-f",
            fasta.to_str().unwrap(),
            "-b",
            "5",
            "-e",
            "13",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Length: 9 bases"))
        .stdout(predicate::str::contains("MK"));
}
