mod common;

use anyhow::Result;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

use common::*;

#[test]
fn test_cli_help_command() {
    let mut cmd = voltaic_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print analysis descriptors as netlist directives"))
        .stdout(predicate::str::contains("analyses"))
        .stdout(predicate::str::contains("symbolic"))
        .stdout(predicate::str::contains("table"));
}

#[test]
fn test_cli_version_command() {
    voltaic_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voltaic"));
}

#[test]
fn test_analyses_print_netlist_directives() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("analyses.toml", voltaic_test::analyses_toml())?;

    let output = env.cmd().arg("analyses").arg(&input).output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        ".op guess=true\n\
         .dc V1 start=0 stop=5 step=0.1 type=linear\n\
         .tran tstep=1e-09 tstop=1e-06 tstart=0.0 method=trap\n\
         .shooting period=0.001 method=brute-force points=100 autonomous= false\n\
         .ac start=1 stop=1e+06 nsteps=100 sweep_type=log\n"
    );
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_info_line_needs_verbosity() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("analyses.json", &voltaic_test::analyses_json())?;

    env.cmd()
        .arg("analyses")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 analyses").not());

    env.cmd()
        .arg("-v")
        .arg("analyses")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("5 analyses in"));
    Ok(())
}

#[test]
fn test_unset_locale_warns_on_stderr() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .env_remove("LANG")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "W: Locale appears not set! please export LANG=\"en_US.UTF-8\" or equivalent, ",
        ))
        .stderr(predicate::str::contains("W: or voltaic's unicode support is broken."))
        .stdout(predicate::str::contains("W:").not());
    Ok(())
}

#[test]
fn test_symbolic_results_sorted() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("sym.json", &voltaic_test::symbolic_results_json())?;

    let output = env.cmd().arg("symbolic").arg(&input).output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "I(V1)\t = -V1/(R1 + R2)\nV1\t = V1\nV3\t = R2*V1/(R1 + R2)\n"
    );
    Ok(())
}

#[test]
fn test_symbolic_transfer_functions() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("tf.json", &voltaic_test::transfer_functions_json())?;

    env.cmd()
        .arg("symbolic")
        .arg("--transfer")
        .arg(&input)
        .assert()
        .success()
        .stdout("VOUT/VIN = 1/(C1*R1*s + 1)\n\tDC: 1\n\tP0: -1/(C1*R1)\n");
    Ok(())
}

#[test]
fn test_symbolic_equations() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("eq.json", r#"["V1 = 5", "I1 = V1/R1"]"#)?;

    env.cmd()
        .arg("symbolic")
        .arg("--equations")
        .arg(&input)
        .assert()
        .success()
        .stdout("+--\n| V1 = 5\n| I1 = V1/R1\n+--\n");
    Ok(())
}

#[test]
fn test_table_with_header() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("sweep.dat", voltaic_test::whitespace_table())?;

    env.cmd()
        .arg("table")
        .arg("--header")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("v(out)"))
        .stdout(predicate::str::contains("-3.68e-4"))
        .stdout(predicate::str::contains("---"));
    Ok(())
}

#[test]
fn test_table_rounded_style() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("sweep.dat", voltaic_test::whitespace_table())?;

    env.cmd()
        .arg("table")
        .arg("--style")
        .arg("rounded")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("╭"));
    Ok(())
}

#[test]
fn test_ragged_table_reports_parse_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("bad.dat", "t v\n0 1\n1 2 3\n")?;

    env.cmd()
        .arg("table")
        .arg(&input)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("E: Parse error on line 3:\n1 2 3\n"))
        .stderr(predicate::str::contains("expected 2 columns, found 3"));
    Ok(())
}

#[test]
fn test_parse_error_routed_to_stdout() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("bad.dat", "t v\n0 1\n1 2 3\n")?;

    env.cmd()
        .arg("--diagnostics-to-stdout")
        .arg("table")
        .arg(&input)
        .assert()
        .code(4)
        .stdout(predicate::str::starts_with("E: Parse error on line 3:\n1 2 3\n"))
        .stdout(predicate::str::contains("E: Parsing error: line 3: expected 2 columns, found 3"))
        .stderr("");
    Ok(())
}

#[test]
fn test_locale_warnings_routed_to_stdout() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .env_remove("LANG")
        .args(["--diagnostics-to-stdout", "check", "--quiet"])
        .assert()
        .success()
        .stdout(
            "W: Locale appears not set! please export LANG=\"en_US.UTF-8\" or equivalent, \n\
             W: or voltaic's unicode support is broken.\n",
        )
        .stderr("");
    Ok(())
}

#[test]
fn test_missing_input_is_io_error() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .arg("analyses")
        .arg(env.home().join("missing.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::starts_with("E: IO error:"));
    Ok(())
}

#[test]
fn test_check_reports_bad_variables() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .args(["check", "V(n1)", "I(V1)"])
        .assert()
        .success()
        .stdout(
            "Warning: solution is heavily dependent on gmin.\nAffected variables:\nV(n1)\nI(V1)\n",
        );

    env.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Difference check is within margins."))
        .stdout(predicate::str::contains("ea=1e-09)"));

    env.cmd()
        .args(["check", "--quiet"])
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn test_check_uses_configured_tolerances() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.create_input_file("config.toml", "[tolerances]\nvea = 0.5\n")?;

    env.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Voltage: er=0.001, ea=0.5,"));
    Ok(())
}

#[test]
fn test_config_init_and_show() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd().args(["config", "--init"]).assert().success();
    assert!(env.home().join("config.toml").exists());

    env.cmd()
        .args(["config", "--init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[printing]"))
        .stdout(predicate::str::contains("precision = 8"));
    Ok(())
}

#[test]
fn test_missing_explicit_config() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .arg("--config")
        .arg(env.home().join("nope.toml"))
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E: Not found:"));
    Ok(())
}
