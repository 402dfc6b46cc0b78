use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::{predicate, PredicateBooleanExt};

fn check(instance: &str, additional_args: &[&str]) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.kb")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("scarab")?;
    cmd.arg("check").arg("-f").arg(file.path());
    for a in additional_args {
        cmd.arg(a);
    }
    let assert = cmd.assert();
    file.close().unwrap();
    Ok(assert)
}

#[test]
fn test_check_ok() -> Result<(), Box<dyn std::error::Error>> {
    check("--> a\nR1: a ==> b\n", &[])?
        .success()
        .stdout(predicate::str::contains("2 rule(s) (1 strict)"));
    Ok(())
}

#[test]
fn test_check_print() -> Result<(), Box<dyn std::error::Error>> {
    check(
        "R1: a ==> b # comment\n[] --> a\nR2: a ==> -b\nR2 > R1\n",
        &["--print", "--logging-level", "off"],
    )?
    .success()
    .stdout(predicate::eq("--> a\nR1: a ==> b\nR2: a ==> -b\nR1 < R2\n"));
    Ok(())
}

#[test]
fn test_check_contrapositions() -> Result<(), Box<dyn std::error::Error>> {
    check(
        "a --> b\n",
        &["--print", "--contrapositions", "--logging-level", "off"],
    )?
    .success()
    .stdout(predicate::eq("-b --> -a\na --> b\n"));
    Ok(())
}

#[test]
fn test_check_warning() -> Result<(), Box<dyn std::error::Error>> {
    check("--> a\na, a ==> b\n", &[])?
        .success()
        .stdout(predicate::str::contains("at line 2: literal a is repeated in the antecedents"));
    Ok(())
}

#[test]
fn test_check_syntax_error() -> Result<(), Box<dyn std::error::Error>> {
    check("--> a\na -> b\n", &[])?
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("while reading line 2")
                .and(predicate::str::contains("invalid rule name list")),
        );
    Ok(())
}

#[test]
fn test_check_validation_error() -> Result<(), Box<dyn std::error::Error>> {
    check("--> a\nR1: a ==> b\nR1 < R3\n", &[])?
        .failure()
        .stdout(predicate::str::contains(r#"unknown rule "R3""#));
    Ok(())
}

#[test]
fn test_check_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("scarab")?;
    cmd.arg("check").arg("-f").arg("/this/file/does/not/exist.kb");
    cmd.assert().failure().code(1);
    Ok(())
}
