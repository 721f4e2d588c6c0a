use std::{path::Path, process::Command};

fn run(args: &[&str], dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cec-landscape"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_valid_problem_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["4"], dir.path());

    assert!(output.status.success(), "{:?}", output);
    assert!(dir.path().join("fun_4.jpg").is_file());

    let content = std::fs::read_to_string(dir.path().join("fun_4_bounds.csv")).unwrap();
    assert!(content.starts_with("x: -6 6\ny: -6 6\nz: "));
}

#[test]
fn test_invalid_problem_fails_without_output() {
    for id in ["0", "21", "1", "8"] {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&[id], dir.path());

        assert!(!output.status.success(), "problem {} should fail", id);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(&format!("failed to render problem {}", id)),
            "stderr: {}",
            stderr
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

#[test]
fn test_malformed_arguments_fail_without_output() {
    for args in [&[][..], &["abc"][..], &["-3"][..], &["4", "5"][..]] {
        let dir = tempfile::tempdir().unwrap();
        let output = run(args, dir.path());

        assert!(!output.status.success(), "{:?} should fail", args);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
