use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn deleting_removes_every_record_with_the_id() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.csv");
    // Duplicate personal ids are allowed; delete takes them all out.
    fs::write(
        &file,
        "7,Ann,Doe,5551111111,1 Main St,ann@example.com\n\
         2,Ben,Doe,5552222222,2 Side St,ben@example.com\n\
         7,Cleo,Doe,5553333333,3 Back St,cleo@example.com\n",
    )
    .unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .args(["--file", file.to_str().unwrap()])
        .write_stdin("4\n7\nyes\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact to delete:"))
        .stdout(predicate::str::contains("Personal ID: 7, Name: Ann Doe"))
        .stdout(predicate::str::contains("Contact deleted successfully."));

    let data = fs::read_to_string(&file).unwrap();
    assert_eq!(data, "2,Ben,Doe,5552222222,2 Side St,ben@example.com\n");
}

#[test]
fn anything_but_yes_cancels_the_deletion() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.csv");
    let original = "7,Ann,Doe,5551111111,1 Main St,ann@example.com\n";
    fs::write(&file, original).unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .args(["--file", file.to_str().unwrap()])
        .write_stdin("4\n7\ny\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion canceled."));

    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn confirmation_is_case_and_whitespace_insensitive() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.csv");
    fs::write(&file, "7,Ann,Doe,5551111111,1 Main St,ann@example.com\n").unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .args(["--file", file.to_str().unwrap()])
        .write_stdin("4\n7\n  YES  \n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully."));

    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn deleting_an_unknown_id_changes_nothing() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.csv");
    let original = "7,Ann,Doe,5551111111,1 Main St,ann@example.com\n";
    fs::write(&file, original).unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .args(["--file", file.to_str().unwrap()])
        .write_stdin("4\n99\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact not found."));

    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}
