use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_scaling(args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_attenuation-scaling");
    Command::new(binary_path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("scaling command should run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dirs should be created");
    }
    fs::write(path, content).expect("file should be written");
}

#[test]
fn default_run_prints_summary_and_macro_lines() {
    let output = run_scaling(&["40"]);
    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        stderr_of(&output)
    );

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Total attenuation length: 40.0 m at 410.0 nm wavelength",
            lines[1],
            lines[2],
            "Mie scattering switched off (check WCSim code)",
            "WCSim tuning_parameters.mac output:",
            "/WCSim/tuning/abwff 0.3145",
            "/WCSim/tuning/rayff 0.3145",
            "/WCSim/tuning/mieff 0",
        ]
    );
    assert!(lines[1].starts_with("Absorption scale factor: 0.3145"));
    assert!(lines[2].starts_with("Scattering scale factor: 0.3145"));
}

#[test]
fn minimal_verbosity_prints_only_macro_lines() {
    let output = run_scaling(&["40", "-v", "1", "-m", "1"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("/WCSim/tuning/abwff "));
    assert!(lines[1].starts_with("/WCSim/tuning/rayff "));
    assert!(lines[2].starts_with("/WCSim/tuning/mieff "));
    assert_ne!(lines[2], "/WCSim/tuning/mieff 0");
}

#[test]
fn custom_table_drives_the_solution() {
    let temp = TempDir::new().expect("tempdir should be created");
    let table_path = temp.path().join("attenuation_wcsim.dat");
    // Flat 1000 cm curves: base length 5 m, so 10 m needs a factor of 2.
    write_file(
        &table_path,
        "# energy abs ray mie\n1.0 1000 1000 1000\n10.0 1000 1000 1000\n",
    );

    let output = run_scaling(&[
        "10",
        "--table",
        table_path.to_str().expect("utf-8 path"),
        "-v",
        "1",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "/WCSim/tuning/abwff 2\n/WCSim/tuning/rayff 2\n/WCSim/tuning/mieff 0\n"
    );
}

#[test]
fn json_output_reports_factors() {
    let output = run_scaling(&["40", "--json", "-w", "450", "-m", "0.5"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout should be JSON");
    assert_eq!(parsed["wavelength_nm"], Value::from(450.0));
    assert_eq!(parsed["mie_weight"], Value::from(0.5));
    let absorption = parsed["factors"]["absorption"].as_f64().expect("absorption");
    let mie = parsed["factors"]["mie"].as_f64().expect("mie");
    assert!(absorption > 0.0);
    assert!((mie / absorption - 0.5).abs() < 1.0e-12);
    assert_eq!(parsed["tuning_macro"].as_array().map(Vec::len), Some(3));
}

#[test]
fn curves_option_writes_nominal_and_tuned_curves() {
    let temp = TempDir::new().expect("tempdir should be created");
    let curves_path = temp.path().join("curves/attenuation.json");

    let output = run_scaling(&[
        "40",
        "-v",
        "1",
        "--curves",
        curves_path.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(curves_path.exists(), "curves file should be created");

    let parsed: Value =
        serde_json::from_str(&fs::read_to_string(&curves_path).expect("curves readable"))
            .expect("curves JSON should parse");
    assert_eq!(parsed["nominal"]["points"].as_array().map(Vec::len), Some(60));
    assert_eq!(parsed["tuned"]["scales"]["mie"], Value::from(1.0e6));
    assert_eq!(parsed["measured"].as_array().map(Vec::len), Some(189));
}

#[test]
fn zero_mie_weight_writes_finite_tuned_curves() {
    let temp = TempDir::new().expect("tempdir should be created");
    let curves_path = temp.path().join("curves.json");

    let output = run_scaling(&[
        "40",
        "-m",
        "0",
        "-v",
        "1",
        "--curves",
        curves_path.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).ends_with("/WCSim/tuning/mieff 0\n"));

    let parsed: Value =
        serde_json::from_str(&fs::read_to_string(&curves_path).expect("curves readable"))
            .expect("curves JSON should parse");
    let points = parsed["tuned"]["points"].as_array().expect("tuned points");
    assert_eq!(points.len(), 60);
    for point in points {
        let total = point["total_m"].as_f64().expect("total_m");
        assert!(total > 0.0, "tuned total should be positive: {point}");
        assert!(point["total_coefficient_per_m"].as_f64().is_some());
    }
}

#[test]
fn missing_table_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("missing.dat");

    let output = run_scaling(&["40", "--table", missing.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("ERROR: [IO.TABLE_READ]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 3"), "stderr: {stderr}");
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn malformed_table_exits_with_input_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let table_path = temp.path().join("bad.dat");
    write_file(&table_path, "1.0 1000 1000\n");

    let output = run_scaling(&["40", "--table", table_path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.TABLE_PARSE] line 1"));
}

#[test]
fn non_positive_target_is_rejected() {
    let output = run_scaling(&["0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("[INPUT.TARGET_LENGTH]"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = run_scaling(&["40", "--bogus"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("[INPUT.CLI_USAGE]"));
}

#[test]
fn help_exits_successfully() {
    let output = run_scaling(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("--wavelength"));
    assert!(stdout.contains("--mie-weight"));
}

#[test]
fn plot_reports_missing_root_after_printing_factors() {
    let output = run_scaling(&[
        "40",
        "-v",
        "1",
        "-p",
        "--root-bin",
        "/nonexistent/bin/root-for-attenuation-tests",
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout_of(&output).contains("/WCSim/tuning/abwff 0.3145"));
    assert!(stderr_of(&output).contains("[IO.PLOT_SPAWN]"));
}
