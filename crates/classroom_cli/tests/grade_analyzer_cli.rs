use assert_cmd::Command;
use predicates::prelude::*;

fn grade_analyzer() -> Command {
    let mut cmd = Command::cargo_bin("grade-analyzer").unwrap();
    cmd.arg("--no-color").env("NO_COLOR", "1");
    cmd
}

#[test]
fn exits_on_menu_choice_five() {
    grade_analyzer()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Student Grade Analyzer ---"))
        .stdout(predicate::str::ends_with("Exiting program.\n"));
}

#[test]
fn exits_cleanly_at_end_of_input() {
    grade_analyzer()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting program due to interrupt."));
}

#[test]
fn full_session_report_and_top_performer() {
    let script = "1\nAlice\n1\nBob\n2\nalice\n90\n100\ndone\n2\nBOB\n70\nabc\n101\ndone\n3\n4\n5\n";

    grade_analyzer()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Student 'Alice' added successfully."))
        .stdout(predicate::str::contains("Invalid input. Please enter a valid number or 'done'."))
        .stdout(predicate::str::contains("Invalid grade. Grade must be between 0 and 100."))
        .stdout(predicate::str::contains("Alice's average grade is 95.0."))
        .stdout(predicate::str::contains("Bob's average grade is 70.0."))
        .stdout(predicate::str::contains("Overall Average: 82.5"))
        .stdout(predicate::str::contains(
            "The student with the highest average is Alice with a grade of 95.0.",
        ));
}

#[test]
fn json_report_mode() {
    Command::cargo_bin("grade-analyzer")
        .unwrap()
        .args(["--json", "--no-color"])
        .write_stdin("1\nAda\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"average\": null"))
        .stdout(predicate::str::contains("\"overall\": null"));
}

#[test]
fn rejects_unknown_flag() {
    Command::cargo_bin("grade-analyzer")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure();
}
