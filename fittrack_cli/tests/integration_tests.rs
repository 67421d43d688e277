//! Integration tests for the fittrack binary.
//!
//! These tests verify end-to-end behavior including:
//! - Driving the menu shell from scripted stdin
//! - CSV export through the shell and the `export` command
//! - The JSON stats summary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary, isolated from any user config
fn cli(temp_dir: &TempDir) -> Command {
    let config_path = temp_dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").expect("Failed to write config");
    }
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fittrack"));
    cmd.arg("--config").arg(config_path);
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal fitness tracker"));
}

#[test]
fn test_shell_exit() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== FitTrack Main Menu ==="))
        .stdout(predicate::str::contains("Exiting FitTrack. Goodbye!"));
}

#[test]
fn test_shell_closed_stdin_exits_cleanly() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("shell")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Workout Tracker Menu ---"));
}

#[test]
fn test_workout_add_remove_and_summary() {
    let temp_dir = setup_test_dir();
    let script = [
        "1",                                       // workout menu
        "1", "Running", "30", "300", "2024-01-01", // add
        "1", "Yoga", "20", "80", "2024-01-02",     // add
        "2", "1",                                  // remove id 1
        "1", "Rowing", "15", "150", "2024-01-03",  // add gets id 3
        "9",                                       // summary
        "11", "6",
    ]
    .join("\n")
        + "\n";

    cli(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":3"))
        .stdout(predicate::str::contains(
            "Workout Summary: {\"total_workouts\":2,\"total_duration\":35.0,\"total_calories\":230.0}",
        ));
}

#[test]
fn test_invalid_choice_reprompts() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .write_stdin("7\n2\nabc\n11\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again.").count(2));
}

#[test]
fn test_meal_suggestion_and_grocery_list() {
    let temp_dir = setup_test_dir();
    let script = "2\n6\n320\n9\nVeggie Wrap, Pizza\n11\n6\n";
    cli(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"meal_name\":\"Veggie Wrap\""))
        .stdout(predicate::str::contains(
            "Grocery List: [\"bell peppers\",\"hummus\",\"spinach\",\"tortilla\"]",
        ));
}

#[test]
fn test_health_sentinels() {
    let temp_dir = setup_test_dir();
    let script = "3\n5\n9\n1\n70\n1.75\n11\n6\n";
    cli(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent Weight: none"))
        .stdout(predicate::str::contains("Average Heart Rate: undefined"))
        .stdout(predicate::str::contains("BMI: 22.857"));
}

#[test]
fn test_export_from_shell() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().join("exports");
    let script = "4\n1\nweight_loss\n10\n3\nweight_loss\n3\n11\n5\n6\ngoals\n6\nsleep\n11\n6\n";

    cli(&temp_dir)
        .arg("--export-dir")
        .arg(&export_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported to"))
        .stdout(predicate::str::contains("Invalid data type."));

    let csv = fs::read_to_string(export_dir.join("goals_data.csv")).expect("Failed to read CSV");
    assert_eq!(csv, "goal_type,target,progress,deadline\nweight_loss,10.0,3.0,\n");
}

#[test]
fn test_export_empty_category_creates_no_file() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().join("exports");

    cli(&temp_dir)
        .arg("export")
        .arg("workout")
        .arg("--export-dir")
        .arg(&export_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));

    assert!(!export_dir.join("workout_data.csv").exists());
}

#[test]
fn test_export_demo_data() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().join("exports");

    cli(&temp_dir)
        .arg("export")
        .arg("nutrition")
        .arg("--demo")
        .arg("--export-dir")
        .arg(&export_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 nutrition rows"));

    let csv = fs::read_to_string(export_dir.join("nutrition_data.csv")).expect("Failed to read CSV");
    assert!(csv.starts_with("id,meal_name,calories,proteins,fats,carbs\n"));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_export_unknown_category_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("export")
        .arg("sleep")
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnknownCategory"));
}

#[test]
fn test_summary_json() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .arg("summary")
        .arg("--demo")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats: serde_json::Value = serde_json::from_slice(&output).expect("summary is JSON");
    assert_eq!(stats["workout_summary"]["total_workouts"], 4);
    assert_eq!(stats["recent_weight"]["weight"], 77.4);
    assert_eq!(stats["goals"][0]["goal_type"], "weight_loss");
}

#[test]
fn test_configured_calorie_goal() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[nutrition]\ndaily_calorie_goal = 2000.0\n",
    )
    .unwrap();

    cli(&temp_dir)
        .write_stdin("2\n8\n11\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Calories: 2000"));
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("config.toml"), "[nutrition\n").unwrap();

    cli(&temp_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}
