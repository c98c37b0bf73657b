#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FINANCIAL_AND_CREDIT: &str = r#"
[store]
name = "Sharma Kirana"

[financial]
monthly_sales = 100000
profit_margin = 20
monthly_emi = 20000
average_bank_balance = 50000
building_ownership = "own"
itr_filed = true

[credit_history]
cibil_score = 300
past_loan_defaults = 10
banking_relationship = 0
returned_cheques = 10
fully_repaid_loans = 0
loan_applications = 10
"#;

const STABILITY_AND_RISK: &str = r#"
[business_stability]
years_in_operation = 5
annual_revenue = 2000000
number_of_employees = 5
shop_size = 500
number_of_branches = 1
sells_private_label = false

[risk_support]
industry_type = "grocery"
purpose_of_loan = "growth"
distributor_payment_regularity = true
collateral_provided = true
collateral_type = "property"
collateral_value = 200000
loan_amount_requested = 100000
"#;

fn storecredit() -> Command {
    Command::cargo_bin("storecredit").expect("binary should compile")
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should create");
    }
    fs::write(&path, content).expect("application file should write");
    path
}

#[test]
fn score_merges_step_files_and_renders_markdown() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);
    let two = write(&dir, "step2.toml", STABILITY_AND_RISK);

    storecredit()
        .arg("score")
        .arg(&one)
        .arg(&two)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Credit Score Report"))
        .stdout(predicate::str::contains("Credit score: 65/100 (Bad)"))
        .stdout(predicate::str::contains("- Operational: 70"))
        .stdout(predicate::str::contains("- Risk & Support: 90"));
}

#[test]
fn score_json_outputs_total_and_rating() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);
    let two = write(&dir, "step2.toml", STABILITY_AND_RISK);

    storecredit()
        .arg("score")
        .arg(&one)
        .arg(&two)
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"total\": 65"))
        .stdout(predicate::str::contains("\"rating\": \"Bad\""))
        .stdout(predicate::str::contains("\"input_digest\""));
}

#[test]
fn score_with_only_warnings_exits_one() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);
    let two = write(&dir, "step2.toml", STABILITY_AND_RISK);
    let fix = write(
        &dir,
        "fix.toml",
        r#"
[risk_support]
loan_amount_requested = 0
"#,
    );

    storecredit()
        .arg("score")
        .arg(&one)
        .arg(&two)
        .arg(&fix)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Collateral cannot be valued"))
        .stdout(predicate::str::contains("- Risk & Support: 75"));
}

#[test]
fn score_refuses_blocking_application() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);
    let two = write(&dir, "step2.toml", STABILITY_AND_RISK);
    let fix = write(
        &dir,
        "fix.toml",
        r#"
[financial]
profit_margin = 140
"#,
    );

    storecredit()
        .arg("score")
        .arg(&one)
        .arg(&two)
        .arg(&fix)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Credit score").not())
        .stderr(predicate::str::contains("financial.profit_margin"));
}

#[test]
fn score_incomplete_application_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);

    storecredit()
        .arg("score")
        .arg(&one)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("application parse error"));
}

#[test]
fn validate_reports_blocking_findings() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);
    let two = write(&dir, "step2.toml", STABILITY_AND_RISK);
    let fix = write(
        &dir,
        "fix.toml",
        r#"
[credit_history]
cibil_score = 950
"#,
    );

    storecredit()
        .arg("validate")
        .arg(&one)
        .arg(&two)
        .arg(&fix)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "[BLOCKING] credit_history.cibil_score",
        ));
}

#[test]
fn validate_clean_application_succeeds() {
    let dir = TempDir::new().expect("temp dir should be created");
    let one = write(&dir, "step1.toml", FINANCIAL_AND_CREDIT);
    let two = write(&dir, "step2.toml", STABILITY_AND_RISK);

    storecredit()
        .arg("validate")
        .arg(&one)
        .arg(&two)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("validate: no findings"));
}

#[test]
fn init_writes_template_that_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("new/application.toml");

    storecredit()
        .arg("init")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("init: wrote"));
    assert!(path.exists(), "template should be written");

    storecredit()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Credit score: 52/100 (Poor)"));
}

#[test]
fn init_no_overwrite_keeps_existing_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write(&dir, "application.toml", "keep");

    storecredit()
        .arg("init")
        .arg(&path)
        .arg("--no-overwrite")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(&path).expect("file should read"), "keep");
}

#[test]
fn batch_scores_each_application() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        &dir,
        "a/complete.toml",
        &format!("{FINANCIAL_AND_CREDIT}{STABILITY_AND_RISK}"),
    );
    write(&dir, "b/broken.toml", FINANCIAL_AND_CREDIT);

    storecredit()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("complete.toml: 65/100 Bad"))
        .stdout(predicate::str::contains("broken.toml: failed"));
}

#[test]
fn batch_json_lists_statuses() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        &dir,
        "complete.toml",
        &format!("{FINANCIAL_AND_CREDIT}{STABILITY_AND_RISK}"),
    );

    storecredit()
        .arg("batch")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"status\": \"scored\""))
        .stdout(predicate::str::contains("\"total\": 65"));
}
