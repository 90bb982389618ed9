//! CLI tests driving the marker-registry binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_package(db: &Path, name: &str, hmm: &str) {
    let pkg_dir = db.join(name);
    std::fs::create_dir_all(&pkg_dir).unwrap();
    std::fs::write(pkg_dir.join(hmm), "").unwrap();
    std::fs::write(
        pkg_dir.join("CONTENTS.json"),
        format!(r#"{{"version": "1.0", "search_hmms": ["{hmm}"]}}"#),
    )
    .unwrap();
}

fn cmd() -> Command {
    Command::cargo_bin("marker-registry").unwrap()
}

#[test]
fn test_packages_list() {
    let db = tempfile::tempdir().unwrap();
    write_package(db.path(), "S2.spkg", "S2.hmm");
    write_package(db.path(), "L11.spkg", "L11.hmm");

    cmd()
        .args(["packages", "list"])
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("S2.hmm"))
        .stdout(predicate::str::contains("L11.hmm"));
}

#[test]
fn test_packages_list_tsv() {
    let db = tempfile::tempdir().unwrap();
    write_package(db.path(), "S2.spkg", "S2.hmm");

    cmd()
        .args(["packages", "list", "--format", "tsv"])
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hmm_basename\tsearch_hmm_count"))
        .stdout(predicate::str::contains("S2.hmm\t1"));
}

#[test]
fn test_packages_paths() {
    let db = tempfile::tempdir().unwrap();
    write_package(db.path(), "S2.spkg", "S2.hmm");

    cmd()
        .args(["packages", "paths"])
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("S2.spkg"))
        .stdout(predicate::str::contains("S2.hmm"));
}

#[test]
fn test_packages_empty_database_fails() {
    let db = tempfile::tempdir().unwrap();

    cmd()
        .args(["packages", "list"])
        .arg(db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No marker packages"));
}

#[test]
fn test_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.tsv");
    std::fs::write(&taxonomy, "contig49\td__Bacteria;p__Proteobacteria\n").unwrap();

    cmd()
        .arg("resolve")
        .arg(&taxonomy)
        .arg("contig49_2_4_11")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "contig49_2_4_11\td__Bacteria;p__Proteobacteria",
        ));
}

#[test]
fn test_resolve_ids_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.tsv");
    std::fs::write(&taxonomy, "contig49\td__Bacteria\ncontig50\td__Archaea\n").unwrap();

    cmd()
        .arg("resolve")
        .arg(&taxonomy)
        .write_stdin("contig49_2_4_11\ncontig50_1_1_3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("d__Bacteria"))
        .stdout(predicate::str::contains("d__Archaea"));
}

#[test]
fn test_resolve_tsv_format() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.tsv");
    std::fs::write(&taxonomy, "contig49\td__Bacteria\n").unwrap();

    cmd()
        .args(["resolve", "--format", "tsv"])
        .arg(&taxonomy)
        .arg("contig49_2_4_11")
        .assert()
        .success()
        .stdout(predicate::str::contains("id\tnormalized\ttaxonomy"))
        .stdout(predicate::str::contains(
            "contig49_2_4_11\tcontig49\td__Bacteria",
        ));
}

#[test]
fn test_resolve_missing_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.tsv");
    std::fs::write(&taxonomy, "contig49\td__Bacteria\n").unwrap();

    cmd()
        .arg("resolve")
        .arg(&taxonomy)
        .arg("contig99_1_2_3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No taxonomy entry"))
        .stderr(predicate::str::contains("contig99"));
}

#[test]
fn test_resolve_skip_missing() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.tsv");
    std::fs::write(&taxonomy, "contig49\td__Bacteria\n").unwrap();

    cmd()
        .args(["resolve", "--skip-missing"])
        .arg(&taxonomy)
        .args(["contig99_1_2_3", "contig49_2_4_11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("d__Bacteria"))
        .stdout(predicate::str::contains("contig99").not());
}

#[test]
fn test_resolve_malformed_taxonomy_fails() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.tsv");
    std::fs::write(&taxonomy, "contig49\td__Bacteria\njust_one_field\n").unwrap();

    cmd()
        .arg("resolve")
        .arg(&taxonomy)
        .arg("contig49_2_4_11")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
