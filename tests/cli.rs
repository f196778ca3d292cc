//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn trazo() -> Command {
    Command::cargo_bin("trazo").unwrap()
}

#[test]
fn plot_rejects_an_invalid_selection() {
    trazo()
        .args(["plot", "--delay-ms", "0"])
        .write_stdin("99\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option: 99"))
        .stdout(predicate::str::contains("Table of values:").not())
        .stdout(predicate::str::contains("x: ").not());
}

#[test]
fn plot_rejects_an_invalid_function_flag() {
    trazo()
        .args(["plot", "--function", "42", "--delay-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option: 42"));
}

#[test]
fn plot_prints_the_table_and_animates() {
    trazo()
        .args(["plot", "--function", "6", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Table of values:"))
        .stdout(predicate::str::contains("x: -1.50, y: -2.00"))
        .stdout(predicate::str::contains("Animating..."));
}

#[test]
fn plot_runs_exactly_five_redraw_frames() {
    let output = trazo()
        .args(["plot", "--function", "1", "--delay-ms", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Animating...").count(), 5);
    // Each redraw frame is preceded by a clear-screen escape.
    assert_eq!(stdout.matches("\u{1b}[2J").count(), 5);
}

#[test]
fn plot_menu_reads_the_selection_from_stdin() {
    trazo()
        .args(["plot", "--delay-ms", "0"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose a function to plot:"))
        .stdout(predicate::str::contains("1 - Sine"))
        .stdout(predicate::str::contains("7 - Quadratic"))
        .stdout(predicate::str::contains("x: -3.00, y: -0.99"));
}

#[test]
fn todo_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("tasks.txt");
    let file = file.to_str().unwrap();

    // The starter list seeds a missing file; adding makes six.
    trazo()
        .args(["todo", "--file", file, "add", "ship it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6. ship it"))
        .stdout(predicate::str::contains("6 tasks"));

    trazo()
        .args(["todo", "--file", file, "remove", "reading"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 tasks"))
        .stdout(predicate::str::contains("reading").not());

    trazo()
        .args(["todo", "--file", file, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. writing"))
        .stdout(predicate::str::contains("5. ship it"));
}

#[test]
fn todo_remove_of_an_unknown_task_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("tasks.txt");

    trazo()
        .args(["todo", "--file", file.to_str().unwrap(), "remove", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such task: nope"));
}

const FAMILY_CSV: &str = "\
id,name,gender,parents,children
2,Maria,Female,\"\",\"4\"
1,Juan,Male,\"\",\"4\"
4,Luisa,Female,\"1,2\",\"\"
";

#[test]
fn family_show_prints_members_sorted_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("familia.csv");
    std::fs::write(&file, FAMILY_CSV).unwrap();

    let output = trazo()
        .args(["family", "show", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let juan = stdout.find("ID: 1 | Name: Juan").unwrap();
    let maria = stdout.find("ID: 2 | Name: Maria").unwrap();
    let luisa = stdout.find("ID: 4 | Name: Luisa").unwrap();
    assert!(juan < maria && maria < luisa);
    assert!(stdout.contains("Parents: [\"1\", \"2\"]"));
}

#[test]
fn family_add_appends_and_prints_the_updated_tree() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("familia.csv");
    std::fs::write(&file, FAMILY_CSV).unwrap();

    trazo()
        .args([
            "family",
            "add",
            file.to_str().unwrap(),
            "5",
            "Carlos",
            "Male",
            "--parents",
            "1,2",
            "--children",
            "6,7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated tree:"))
        .stdout(predicate::str::contains("ID: 5 | Name: Carlos"));

    // The member survives a reload.
    trazo()
        .args(["family", "show", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 5 | Name: Carlos"));
}

#[test]
fn family_show_reports_a_missing_file() {
    trazo()
        .args(["family", "show", "no-such-file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}
