//! Integration tests for goal commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::mindtrack_in;

const TODAY: &str = "2025-01-17";

#[test]
fn test_add_goal_with_default_category() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin("goal add --target in-30-days Read two books\ngoal list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal added!"))
        .stdout(predicate::str::contains("1. Read two books"))
        .stdout(predicate::str::contains("Category: Learning"))
        .stdout(predicate::str::contains("Target: February 16, 2025"));
}

#[test]
fn test_add_goal_with_category() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin("goal add --target 2025-06-01 --category health Run a 10k\ngoal list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Health"))
        .stdout(predicate::str::contains("Target: June 01, 2025"));
}

#[test]
fn test_fresh_goal_shows_zero_progress() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin("goal add --target in-10-days Ship the feature\ngoal list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[--------------------] 0%"));
}

#[test]
fn test_unknown_category_shows_valid_ones() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin("goal add --target in-10-days --category helth Run a 10k\ngoal list\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown category: 'helth'"))
        .stderr(predicate::str::contains(
            "learning, career, personal, health, relationships",
        ))
        .stdout(predicate::str::contains("No goals yet"));
}

#[test]
fn test_empty_description_is_rejected() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin("goal add --target in-10-days\ngoal list\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Goal description cannot be empty"))
        .stdout(predicate::str::contains("No goals yet"));
}

#[test]
fn test_complete_goal() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin(
            "goal add --target in-30-days Read two books\n\
             goal done 1\n\
             goal list\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal completed: Read two books"))
        .stdout(predicate::str::contains("No pending goals"));
}

#[test]
fn test_completing_twice_is_not_an_error() {
    let temp = TempDir::new().unwrap();

    let output = mindtrack_in(temp.path(), TODAY)
        .write_stdin(
            "goal add --target in-30-days Read two books\n\
             goal done 1\n\
             goal done 1\n\
             quit\n",
        )
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.is_empty(), "unexpected stderr:\n{}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Goal completed: Read two books").count(), 2);
}

#[test]
fn test_positions_stay_stable_when_completed_goals_are_hidden() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin(
            "goal add --target in-10-days First goal\n\
             goal add --target in-20-days Second goal\n\
             goal done 1\n\
             goal list\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Second goal"))
        .stdout(predicate::str::contains("1. First goal").not());
}

#[test]
fn test_list_all_includes_completed() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin(
            "goal add --target in-10-days First goal\n\
             goal done 1\n\
             goal list --all\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("1. First goal  (completed)"));
}

#[test]
fn test_unknown_position_keeps_session_alive() {
    let temp = TempDir::new().unwrap();

    mindtrack_in(temp.path(), TODAY)
        .write_stdin("goal done 9\ngoal list\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("No goal at position 9"))
        .stderr(predicate::str::contains("goal list"))
        .stdout(predicate::str::contains("No goals yet"));
}
