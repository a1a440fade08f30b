mod common;

use assert_cmd::Command;
use common::Fixture;
use insta_cmd::assert_cmd_snapshot;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

const PASSING_TIMER: &str = "#!/bin/sh\nprintf '10.0\\n9.0\\n8.0\\n'\n";
const DEGRADING_TIMER: &str = "#!/bin/sh\nprintf '10.0\\n9.0\\n2.0\\n'\n";

fn cmd_in(fx: &Fixture) -> Command {
    #[allow(clippy::unwrap_used)]
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(fx.path());
    cmd
}

//-------------//
//  SUCCESSES  //
//-------------//

#[test]
fn debug_mode_works() {
    // GIVEN
    let fx = Fixture::new();
    let mut cmd = fx.cmd(["run", "--debug", "-c", "perfgate.toml", "-n", "10"]);

    // WHEN
    // THEN
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    DEBUG INFO

    command                  : Run
    config file              : perfgate.toml
    iterations (override)    : 10
    output to file           : false
    output file              : output.txt
    plain stdout             : false

    ----- stderr -----
    ");
}

#[cfg(unix)]
#[test]
fn passing_run_reports_every_test() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", PASSING_TIMER);
    fx.write_file("perfgate.toml", r#"program = "./timer.sh""#);
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-n", "3"]);

    // WHEN
    // THEN
    cmd.assert()
        .success()
        .stdout(contains("test 1 passed"))
        .stdout(contains("test 3 passed"))
        .stdout(contains("test 4 passed").not())
        .stdout(contains("#tests passed    : 3"));
}

#[cfg(unix)]
#[test]
fn run_with_compile_step_deletes_the_artifact() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", PASSING_TIMER);
    fx.write_file(
        "perfgate.toml",
        r#"
program = "./a.out"

[compile]
command = ["cp", "timer.sh", "a.out"]
artifact = "a.out"
"#,
    );
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-n", "2"]);

    // WHEN
    // THEN
    cmd.assert()
        .success()
        .stdout(contains("test 2 passed"))
        .stdout(contains("Deleted the compiled artifact"));
    assert!(!fx.path().join("a.out").exists());
}

#[cfg(unix)]
#[test]
fn keep_artifact_is_honoured() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", PASSING_TIMER);
    fx.write_file(
        "perfgate.toml",
        r#"
program = "./a.out"

[compile]
command = ["cp", "timer.sh", "a.out"]
artifact = "a.out"
keep_artifact = true
"#,
    );
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-n", "2"]);

    // WHEN
    // THEN
    cmd.assert().success();
    assert!(fx.path().join("a.out").exists());
}

#[cfg(unix)]
#[test]
fn run_log_can_be_written_to_a_file() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", PASSING_TIMER);
    fx.write_file("perfgate.toml", r#"program = "./timer.sh""#);
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-n", "2", "-o", "--output-path", "log.txt"]);

    // WHEN
    // THEN
    cmd.assert().success();
    let contents = std::fs::read_to_string(fx.path().join("log.txt"))
        .expect("output file should've been readable");
    assert!(contents.contains("test 1 passed"));
    assert!(contents.contains("#tests passed    : 2"));
}

//-------------//
//  FAILURES   //
//-------------//

#[cfg(unix)]
#[test]
fn degraded_run_fails_with_evidence() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", DEGRADING_TIMER);
    fx.write_file("perfgate.toml", r#"program = "./timer.sh""#);
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-n", "5"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .code(1)
        .stdout(contains("test 1 failed"))
        .stdout(contains("timings: [10.0, 9.0, 2.0]"))
        .stdout(contains("test 2").not());
}

#[cfg(unix)]
#[test]
fn sample_exactly_at_the_floor_fails_the_run() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", "#!/bin/sh\nprintf '4.0\\n1.0\\n'\n");
    fx.write_file("perfgate.toml", r#"program = "./timer.sh""#);
    let mut cmd = cmd_in(&fx);
    cmd.args(["run"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .code(1)
        .stdout(contains("timings: [4.0, 1.0]"));
}

#[cfg(unix)]
#[test]
fn degraded_run_keeps_the_artifact() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", DEGRADING_TIMER);
    fx.write_file(
        "perfgate.toml",
        r#"
program = "./a.out"

[compile]
command = ["cp", "timer.sh", "a.out"]
artifact = "a.out"
"#,
    );
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-n", "2"]);

    // WHEN
    // THEN
    cmd.assert().failure().code(1);
    assert!(fx.path().join("a.out").exists());
}

#[cfg(unix)]
#[test]
fn failing_compile_command_is_a_fatal_error() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_file(
        "perfgate.toml",
        r#"
program = "./a.out"

[compile]
command = ["false"]
artifact = "a.out"
"#,
    );
    let mut cmd = cmd_in(&fx);
    cmd.args(["run"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .stderr(contains("couldn't compile the program under test"));
}

#[cfg(unix)]
#[test]
fn malformed_output_is_a_fatal_error() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", "#!/bin/sh\nprintf '10.0\\nfast\\n'\n");
    fx.write_file("perfgate.toml", r#"program = "./timer.sh""#);
    let mut cmd = cmd_in(&fx);
    cmd.args(["run"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .stderr(contains("is not a number"));
}

#[cfg(unix)]
#[test]
fn empty_output_is_a_fatal_error() {
    // GIVEN
    let fx = Fixture::new();
    fx.write_script("timer.sh", "#!/bin/sh\n");
    fx.write_file("perfgate.toml", r#"program = "./timer.sh""#);
    let mut cmd = cmd_in(&fx);
    cmd.args(["run"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .stderr(contains("printed no timings"));
}

#[test]
fn fails_if_config_file_is_missing() {
    // GIVEN
    let fx = Fixture::new();
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-c", "absent.toml"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .stderr(contains("couldn't read config file"));
}

#[test]
fn fails_if_iterations_are_out_of_range() {
    // GIVEN
    let test_cases = ["0", "1001"];
    for iterations in test_cases {
        let fx = Fixture::new();
        let mut cmd = cmd_in(&fx);
        cmd.args(["run", "-n", iterations, "--debug"]);

        // WHEN
        // THEN
        cmd.assert().failure();
    }
}

#[test]
fn fails_if_output_path_is_not_a_txt_file() {
    // GIVEN
    let fx = Fixture::new();
    let mut cmd = cmd_in(&fx);
    cmd.args(["run", "-o", "--output-path", "log.json", "--debug"]);

    // WHEN
    // THEN
    cmd.assert()
        .failure()
        .stderr(contains("file must have a .txt extension"));
}
