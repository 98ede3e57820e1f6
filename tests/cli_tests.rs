//! End-to-end tests of the `unitig-locator` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

fn cmd() -> Command {
    Command::cargo_bin("unitig-locator").expect("binary should be built")
}

const GENBANK: &str = "\
LOCUS       TESTSEQ                   40 bp    DNA     linear   BCT 01-JAN-2024
DEFINITION  Test sequence.
ACCESSION   NC_000002
VERSION     NC_000002.1
FEATURES             Location/Qualifiers
     gene            1..20
                     /locus_tag=\"group_7\"
     CDS             21..40
                     /gene=\"abcA\"
                     /product=\"ABC transporter\"
ORIGIN
        1 ggggattaca ccccgggggc ttttttaaac aaaaaaaaaa
//
";

#[test]
fn test_locate_tsv_counts_every_scan() {
    let motifs = write_temp(".tsv", "pc\tunitig\n0\tACGT\n");
    let reference = write_temp(".fa", ">ref1\nACGTACGTTT\n");

    let output = cmd()
        .args(["--format", "tsv", "locate", "--motifs"])
        .arg(motifs.path())
        .arg(reference.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "pc\tunitig\treference");
    // Two forward sites, ACGT is palindromic, so all four scans hit both
    assert_eq!(lines.len(), 1 + 8);
    assert!(lines[1..].iter().all(|l| *l == "1\tACGT\tref1"));
}

#[test]
fn test_locate_summary() {
    let motifs = write_temp(".tsv", "0\tACGT\n2\tGATTACA\n");
    let reference = write_temp(".fa", ">ref1\nACGTACGTTT\n>ref2\nGGGATTACAGG\n");

    cmd()
        .args(["--format", "tsv", "locate", "--summary", "--motifs"])
        .arg(motifs.path())
        .arg(reference.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tACGT\tref1\t8"))
        .stdout(predicate::str::contains("3\tGATTACA\tref2\t2"));
}

#[test]
fn test_locate_skips_bad_sources_with_warning() {
    let motifs = write_temp(".tsv", "0\tACGT\n");
    let good = write_temp(".fa", ">ref1\nACGTACGTTT\n");
    let empty = write_temp(".fa", "");

    cmd()
        .args(["--format", "tsv", "locate", "--motifs"])
        .arg(motifs.path())
        .arg("/nonexistent/path/genome.fa")
        .arg(empty.path())
        .arg(good.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tACGT\tref1"))
        .stderr(predicate::str::contains("Could not parse /nonexistent/path/genome.fa"))
        .stderr(predicate::str::contains("No records in"));
}

#[test]
fn test_locate_json_includes_issues() {
    let motifs = write_temp(".tsv", "0\tCCCC\n");
    let empty = write_temp(".fa", "");

    let output = cmd()
        .args(["--format", "json", "locate", "--motifs"])
        .arg(motifs.path())
        .arg(empty.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["hits"].as_array().unwrap().len(), 0);
    assert_eq!(json["issues"][0]["kind"], "empty");
}

#[test]
fn test_locate_rejects_bad_motif_file() {
    let motifs = write_temp(".tsv", "0\tACGT\n1\tNOT-DNA\n");
    let reference = write_temp(".fa", ">ref1\nACGT\n");

    cmd()
        .args(["locate", "--motifs"])
        .arg(motifs.path())
        .arg(reference.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_annotate_genbank_with_cluster_names() {
    let motifs = write_temp(".tsv", "0\tGATTACA\n1\tGTTTAAAAAA\n");
    let reference = write_temp(".gbk", GENBANK);
    let table = write_temp(
        ".csv",
        "Gene,Non-unique Gene name,Annotation\ngroup_7,group_7;dnaK,chaperone protein\n",
    );

    let output = cmd()
        .args(["--format", "tsv", "annotate", "--motifs"])
        .arg(motifs.path())
        .arg(reference.path())
        .arg("--panaroo")
        .arg(table.path())
        .output()
        .expect("command should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();

    // GATTACA covers 3..10 on the forward strand, inside the group_7 gene
    assert!(stdout.contains("1\tGATTACA\tNC_000002.1\t3\t10\t+\tdnaK"));
    // TTTTTTAAAC (reverse complement of GTTTAAAAAA) covers 20..30. It starts on
    // the gene's end coordinate, which the inclusive overlap test counts.
    assert!(stdout.contains("2\tGTTTAAAAAA\tNC_000002.1\t20\t30\t-\tdnaK;abcA"));
}

#[test]
fn test_names_command() {
    let table = write_temp(
        ".csv",
        "Gene,Non-unique Gene name,Annotation,isolate_1\n\
         group_500,group_500;rplL,50S ribosomal protein,x\n\
         group_77,,hypothetical protein,x\n\
         group_12,group_12,ATP synthase subunit,x\n",
    );

    cmd()
        .args(["--format", "tsv", "names"])
        .arg(table.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("group_500\trplL"))
        .stdout(predicate::str::contains("group_77\tgroup_77"))
        .stdout(predicate::str::contains("group_12\tATP"));
}

#[test]
fn test_names_missing_column_fails() {
    let table = write_temp(".csv", "Gene,Annotation\ngroup_1,thing\n");

    cmd()
        .arg("names")
        .arg(table.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-unique Gene name"));
}
