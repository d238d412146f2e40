mod common;

use common::Sandbox;
use predicates::str::contains;
use std::fs;

fn journal_with_two_entries() -> Sandbox {
    let sb = Sandbox::logged_in();
    for (date, place, zip) in [
        ("2025-01-10", "Lake Merritt", "94610"),
        ("2025-03-02", "Bernal Heights", "02110"),
    ] {
        sb.nj()
            .args([
                "add", "--date", date, "--time", "08:15", "-d", "90", "--new-place", place,
                "--zip", zip, "--city", "Somewhere", "--state", "CA", "--country",
                "United States", "-a", "Hike",
            ])
            .assert()
            .success();
    }
    sb
}

#[test]
fn test_export_csv_all_rows() {
    let sb = journal_with_two_entries();
    let out = sb.out_file("journal.csv");

    sb.nj()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 journal entries exported as CSV"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("status,user_name,user_email,timestamp,n_duration,end_timestamp,n_Name,City"));
    assert!(header.ends_with("park_number,activities,notes"));
    assert_eq!(lines.count(), 2);
    assert!(content.contains("01/10/25 08:15 AM"));
    assert!(content.contains("01/10/25 09:45 AM"));
    // leading zero survives
    assert!(content.contains(",02110,"));
}

#[test]
fn test_export_json_with_range() {
    let sb = journal_with_two_entries();
    let out = sb.out_file("journal.json");

    sb.nj()
        .args(["export", "--format", "json", "--file", &out, "--range", "2025-03"])
        .assert()
        .success()
        .stdout(contains("1 journal entry exported as JSON"));

    let data: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = data.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["n_Name"], "Bernal Heights");
    assert_eq!(rows[0]["n_duration"], "90");
    assert_eq!(rows[0]["user_email"], "jane.doe@example.com");
    assert_eq!(rows[0]["activities"], "Hike");
}

#[test]
fn test_export_xlsx_writes_file() {
    let sb = journal_with_two_entries();
    let out = sb.out_file("journal.xlsx");

    sb.nj()
        .args(["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 journal entries exported as XLSX"));

    let bytes = fs::read(&out).unwrap();
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let sb = journal_with_two_entries();
    let out = sb.out_file("empty.csv");

    sb.nj()
        .args(["export", "--file", &out, "--range", "2019"])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!sb.path("empty.csv").exists());
}

#[test]
fn test_export_relative_path_fails() {
    let sb = journal_with_two_entries();
    sb.nj()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let sb = journal_with_two_entries();
    let out = sb.out_file("keep.csv");
    fs::write(&out, "original").unwrap();

    sb.nj()
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("Replace it with 2 journal entries? [y/N]"))
        .stderr(contains("left untouched"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "original");

    sb.nj()
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("status,"));
}
