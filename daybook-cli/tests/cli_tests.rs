use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// A command that cannot see any user config file.
fn set_up_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_clear().env("HOME", home).env("RUST_LOG", "info");
    cmd
}

const EXPORT: &str = "\tDate:\t5 March 2021 at 10:30pm\n# My Day\nHello world\n\n\
                      \tDate:\t1 March 2021\n# Earlier\nFirst of the month\n";

#[test]
fn converts_export_into_month_tree() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("export.txt");
    let output = tmp.path().join("content");
    fs::write(&input, EXPORT).unwrap();

    set_up_command(tmp.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 entries and 1 month indexes"))
        .stderr(predicate::str::contains("Written index:"));

    let page = fs::read_to_string(output.join("2021-03/20210305.md")).unwrap();
    assert!(page.starts_with("---\ntitle: \"5. My Day\"\ndate: 2021-03-05\nweight: 210305\n---\n\n"));

    let index = fs::read_to_string(output.join("2021-03/_index.md")).unwrap();
    let first = index.find("20210301.md").unwrap();
    let second = index.find("20210305.md").unwrap();
    assert!(first < second);
}

#[test]
fn output_defaults_to_content_dir() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("export.txt");
    fs::write(&input, EXPORT).unwrap();

    set_up_command(tmp.path())
        .current_dir(tmp.path())
        .arg(&input)
        .assert()
        .success();

    assert!(tmp.path().join("content/2021-03/_index.md").exists());
}

#[test]
fn unparseable_date_fails() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("export.txt");
    fs::write(&input, "\tDate:\tnot a date\nBody\n").unwrap();

    set_up_command(tmp.path())
        .arg(&input)
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse date: `not a date`"));
}

#[test]
fn duplicate_day_fails_when_asked() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("export.txt");
    fs::write(
        &input,
        "\tDate:\t5 March 2021\n# One\nA\n\tDate:\t5 March 2021 at 9pm\n# Two\nB\n",
    )
    .unwrap();

    set_up_command(tmp.path())
        .arg(&input)
        .arg(tmp.path().join("out"))
        .args(["--on-duplicate", "error"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate entry for 2021-03-05"));
}

#[test]
fn duplicate_day_is_overwritten_by_default() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("export.txt");
    let output = tmp.path().join("out");
    fs::write(
        &input,
        "\tDate:\t5 March 2021\n# One\nA\n\tDate:\t5 March 2021 at 9pm\n# Two\nB\n",
    )
    .unwrap();

    set_up_command(tmp.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("replaces"));

    let page = fs::read_to_string(output.join("2021-03/20210305.md")).unwrap();
    assert!(page.contains("title: \"5. Two\""));
}

#[test]
fn missing_input_fails() {
    let tmp = tempdir().unwrap();

    set_up_command(tmp.path())
        .arg(tmp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn export_without_entries_fails() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("export.txt");
    fs::write(&input, "nothing to see here\n").unwrap();

    set_up_command(tmp.path())
        .arg(&input)
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No journal entries found"));
}
