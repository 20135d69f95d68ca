use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_parametric");

#[test]
fn sample_csv_has_one_header_and_every_step() {
    let out = "out_sample_test";
    let status = Command::new(BIN)
        .args(["--mode", "sample", "--function", "ease-in-out-bounce", "--samples", "10", "--out-dir", out, "--no-draw"])
        .status()
        .expect("run parametric");
    assert!(status.success());

    let s = fs::read_to_string(format!("{out}/ease-in-out-bounce.csv")).unwrap();
    let mut lines = s.lines();
    assert_eq!(lines.next(), Some("t,value"));
    let rows: Vec<(f64, f64)> = lines
        .map(|l| {
            let (t, v) = l.split_once(',').expect("two columns");
            (t.parse().unwrap(), v.parse().unwrap())
        })
        .collect();
    assert_eq!(rows.len(), 11, "samples + 1 rows");
    assert_eq!(rows[0].0, 0.0);
    assert!(rows[0].1.abs() < 1e-9);
    assert!((rows[10].1 - 1.0).abs() < 1e-9);

    let _ = fs::remove_dir_all(out);
}

#[test]
fn sample_passes_extra_arguments() {
    let out = "out_sample_args_test";
    let status = Command::new(BIN)
        .args([
            "--mode", "sample", "--function", "round-trip-switch", "--args", "0.5,out-quad,out-quad",
            "--samples", "4", "--out-dir", out, "--no-draw",
        ])
        .status()
        .expect("run parametric");
    assert!(status.success());

    let s = fs::read_to_string(format!("{out}/round-trip-switch.csv")).unwrap();
    let mid = s.lines().nth(3).expect("row for t=0.5");
    assert_eq!(mid, "0.5,1.0");

    let _ = fs::remove_dir_all(out);
}

#[test]
fn spread_csv_is_reproducible_with_seed() {
    let run = |out: &str| {
        let status = Command::new(BIN)
            .args(["--mode", "spread", "--n", "8", "--distance", "2", "--seed", "42", "--out-dir", out, "--no-draw"])
            .status()
            .expect("run parametric");
        assert!(status.success());
        let s = fs::read_to_string(format!("{out}/spread.csv")).unwrap();
        let _ = fs::remove_dir_all(out);
        s
    };
    let a = run("out_spread_a");
    let b = run("out_spread_b");
    assert_eq!(a, b);
    assert_eq!(a.lines().next(), Some("index,x,y"));
    assert_eq!(a.lines().count(), 9);
}

#[test]
fn spread_accepts_json_parameters() {
    let out = "out_spread_json_test";
    let status = Command::new(BIN)
        .args([
            "--mode", "spread",
            "--params-json", r#"{"n": 3, "distance": 1, "farthest-angle-deg": 0, "order-by": "distance-from-farthest"}"#,
            "--out-dir", out, "--no-draw",
        ])
        .status()
        .expect("run parametric");
    assert!(status.success());

    let s = fs::read_to_string(format!("{out}/spread.csv")).unwrap();
    let last = s.lines().last().unwrap();
    let cols: Vec<f64> = last.split(',').skip(1).map(|c| c.parse().unwrap()).collect();
    // the anchor point sorts last
    assert!((cols[0] - 2f64.sqrt()).abs() < 1e-9);
    assert!(cols[1].abs() < 1e-9);

    let _ = fs::remove_dir_all(out);
}

#[test]
fn eval_prints_json() {
    let output = Command::new(BIN)
        .args(["--mode", "eval", "--function", "^°", "--args", "20,2"])
        .output()
        .expect("run parametric");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "40.0");
}

#[test]
fn verify_passes_for_all_curves() {
    let output = Command::new(BIN)
        .args(["--mode", "verify"])
        .output()
        .expect("run parametric");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
}

#[test]
fn unknown_mode_fails() {
    let status = Command::new(BIN).args(["--mode", "animate"]).status().expect("run parametric");
    assert!(!status.success());
}
