mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::{create_file, licsweep_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_end_to_end_collection() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let source = temp.path().join("root");
    let output = temp.path().join("out");

    create_file(&source, "LICENSE", "mit text");
    create_file(&source, "src/main.cpp", "int main() {}");
    create_file(&source, "test/LICENSE", "mit text");
    create_file(&source, "licenses/MIT", "mit text");
    create_file(&source, "third_party/licenses/OWNERS", "someone@example.com");
    create_file(&source, "MODULE_LICENSE_APACHE2", "");

    licsweep_cmd()
        .arg(source.to_str().unwrap())
        .arg(output.to_str().unwrap())
        .assert()
        .success();

    // Exactly the two license files, mirrored at their relative paths.
    assert!(output.join("LICENSE").is_file());
    assert!(output.join("licenses/MIT").is_file());
    assert!(!output.join("src").exists());
    assert!(!output.join("test").exists());
    assert!(!output.join("third_party").exists());
    assert!(!output.join("MODULE_LICENSE_APACHE2").exists());

    assert_eq!(fs::read_to_string(output.join("LICENSE"))?, "mit text");

    // The summary report carries the three counters.
    let report = fs::read_to_string(output.join("COLLECTION_REPORT.txt"))?;
    assert!(report.contains("Collected files: 2"));
    assert!(report.contains("Skipped (copy errors): 0"));
    assert!(report.contains("Ignored files: 4"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_collection_log_written() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let source = temp.path().join("root");
    let output = temp.path().join("out");

    create_file(&source, "COPYING", "gpl text");

    licsweep_cmd()
        .arg(source.to_str().unwrap())
        .arg(output.to_str().unwrap())
        .assert()
        .success();

    let log = fs::read_to_string(output.join("collection_log.txt"))?;
    assert!(log.contains("collected: COPYING"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_verbose_echoes_collected_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let source = temp.path().join("root");
    let output = temp.path().join("out");

    create_file(&source, "sub/NOTICE", "notice text");

    // env_logger writes to stderr.
    licsweep_cmd()
        .arg(source.to_str().unwrap())
        .arg(output.to_str().unwrap())
        .arg("-v")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Collected: sub/NOTICE"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_default_verbosity_hides_per_file_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let source = temp.path().join("root");
    let output = temp.path().join("out");

    create_file(&source, "NOTICE", "notice text");

    licsweep_cmd()
        .arg(source.to_str().unwrap())
        .arg(output.to_str().unwrap())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Collected: NOTICE").not())
        .stderr(predicate::str::contains("Collection complete"));

    temp.close()?;
    Ok(())
}
