//! End-to-end tests driving the `fintrack` binary against a temporary data dir

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

/// Run an add command and return the short id it printed
fn add(dir: &TempDir, args: &[&str]) -> String {
    let output = fintrack(dir)
        .args(["transaction", "add"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .map(str::to_string)
        .unwrap()
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("fintrack --help"));
}

#[test]
fn test_add_and_list_transactions() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["transaction", "add", "45.50", "-c", "Food", "-d", "2024-05-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added"));

    fintrack(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-10"))
        .stdout(predicate::str::contains("₹45.50"))
        .stdout(predicate::str::contains("Page 1 of 1"));

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn test_empty_list() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions available."));
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["transaction", "add", "abc", "-d", "2024-05-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a number"));

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions available."));
}

#[test]
fn test_future_date_is_rejected() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transaction", "add", "10", "-d", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Date cannot be in the future"));
}

#[test]
fn test_edit_and_delete_transaction() {
    let dir = TempDir::new().unwrap();
    let id = add(&dir, &["20", "-c", "Food", "-d", "2024-05-10"]);

    fintrack(&dir)
        .args(["transaction", "edit", &id, "--amount", "35"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction updated"));

    fintrack(&dir)
        .args(["transaction", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹35.00"))
        .stdout(predicate::str::contains("Food"));

    fintrack(&dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted successfully"));

    fintrack(&dir)
        .args(["transaction", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_budget_set_twice_replaces() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "Food", "100", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set"));

    fintrack(&dir)
        .args(["budget", "set", "Food", "150", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget updated"));

    fintrack(&dir)
        .args(["budget", "list", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹150.00"))
        .stdout(predicate::str::contains("₹100.00").not());
}

#[test]
fn test_budget_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["budget", "set", "Food", "100", "-m", "May"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month must be in YYYY-MM format"));
}

#[test]
fn test_overview_and_insights() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["120", "-c", "Food", "-d", "2024-05-10"]);
    add(&dir, &["3000", "-t", "income", "-c", "Salary", "-d", "2024-05-01"]);

    fintrack(&dir)
        .args(["budget", "set", "Food", "100", "-m", "2024-05"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["report", "overview", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Overview - May 2024"))
        .stdout(predicate::str::contains("-₹20.00 *"));

    fintrack(&dir)
        .args(["report", "insights", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You've exceeded your Food budget by ₹20.00!",
        ))
        .stdout(predicate::str::contains(
            "Food is your top spending category at ₹120.00.",
        ));

    fintrack(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹2880.00"));
}

#[test]
fn test_empty_reports() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["report", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense data to display"));

    fintrack(&dir)
        .args(["report", "overview", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget or expenses for May 2024."));
}

#[test]
fn test_dashboard() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["50", "-c", "Transport", "-d", "2024-05-02"]);

    fintrack(&dir)
        .args(["dashboard", "-m", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent Transactions"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn test_malformed_data_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("transactions.json"), "not json").unwrap();

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions available."));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   ₹"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}
