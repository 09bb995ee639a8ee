use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_writes_configuration() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("params.json");

    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written"));

    assert!(path.exists());
    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["parameters"]["s"], 0.5);
    assert_eq!(json["execution"]["generations"], 100);
}

#[test]
fn test_init_parameter_flags() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("custom.json");

    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .arg("-s")
        .arg("0.2")
        .arg("--dominance")
        .arg("0.9")
        .arg("--alpha")
        .arg("0.5")
        .arg("--life-cycle")
        .arg("migration-first")
        .arg("--generations")
        .arg("50")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generations: 50"));

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["parameters"]["s"], 0.2);
    assert_eq!(json["parameters"]["h"], 0.9);
    assert_eq!(json["parameters"]["alpha"], 0.5);
    assert_eq!(json["parameters"]["life_cycle"], "migration-then-selection");
}

#[test]
fn test_init_defaults() {
    let temp = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.current_dir(&temp).arg("init").assert().success();

    assert!(temp.path().join("params.json").exists());
}

#[test]
fn test_init_error_out_of_range() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");

    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--conversion")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid simulation parameters"));

    assert!(!path.exists());
}

#[test]
fn test_run_from_configuration() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("params.json");

    let mut cmd_init = Command::cargo_bin("demedrive").unwrap();
    cmd_init
        .arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--preset")
        .arg("b2")
        .arg("--generations")
        .arg("5")
        .assert()
        .success();

    let mut cmd_run = Command::cargo_bin("demedrive").unwrap();
    cmd_run
        .arg("run")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation complete!"))
        .stdout(predicate::str::contains("Gen: 5"));
}

#[test]
fn test_run_csv_output() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    let output = cmd
        .arg("run")
        .arg("--preset")
        .arg("b2")
        .arg("-g")
        .arg("3")
        .arg("--format")
        .arg("csv")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "generation,q1,q2");
    assert_eq!(lines[1], "0,0.5,0.3");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_run_json_output_with_window() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    let output = cmd
        .arg("run")
        .arg("-g")
        .arg("20")
        .arg("--window")
        .arg("5")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0]["generation"], 16);
    assert_eq!(points[4]["generation"], 20);
}

#[test]
fn test_run_accepts_huge_window() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    let output = cmd
        .args(["run", "--no-progress", "-g", "5", "--format", "csv"])
        .args(["--window", "18446744073709551615"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn test_run_stop_on_converge() {
    // neutral and isolated: nothing moves, so the first step converges
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    let output = cmd
        .args(["run", "-s", "0", "-c", "0", "-m", "0", "-g", "1000"])
        .args(["--stop-on-converge", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_run_genotype_sample_is_reproducible() {
    let run = || {
        let mut cmd = Command::cargo_bin("demedrive").unwrap();
        let output = cmd
            .args(["run", "-g", "10", "--sample", "20", "--seed", "42"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let first = run();
    assert!(first.contains("Genotype Sample"));
    assert!(first.contains("(n=20)"));
    assert_eq!(first, run());
}

#[test]
fn test_run_error_missing_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("non_existent.json");

    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_run_error_unknown_preset() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["run", "--preset", "no-such-preset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn test_equilibrium_reports_outcome() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["equilibrium", "-s", "0", "-c", "0", "-m", "0", "--q1", "0.9", "--q2", "0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("converged"))
        .stdout(predicate::str::contains("Outcome: differential targeting"));
}

#[test]
fn test_threshold_prints_estimate() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["threshold", "--preset", "b2", "--precision", "0.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("m* = "));
}

#[test]
fn test_threshold_error_bad_precision() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["threshold", "--precision", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid precision"));
}

#[test]
fn test_sweep_initial_conditions() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["-t", "2", "sweep", "--preset", "b2"])
        .args(["--initial", "0.001:0.01", "0.5:0.3", "0.9:0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Equilibria by initial condition"))
        .stdout(predicate::str::contains("0.900"));
}

#[test]
fn test_sweep_alphas() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["sweep", "--preset", "b2", "--alphas", "0.5", "2", "-g", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migration asymmetry"));
}

#[test]
fn test_sweep_error_bad_pair() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.args(["sweep", "--initial", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected q1:q2"));
}

#[test]
fn test_presets_lists_all() {
    let mut cmd = Command::cargo_bin("demedrive").unwrap();
    cmd.arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive-default"))
        .stdout(predicate::str::contains("b2"))
        .stdout(predicate::str::contains("malaria-vector"))
        .stdout(predicate::str::contains("rodent-dominant"));
}
