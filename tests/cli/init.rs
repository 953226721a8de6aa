use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .mcptagrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".mcptagrc.json").exists());

    let content = test.read_file(".mcptagrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["tag"], "mcp");
    assert_eq!(parsed["literalPrefixes"][0], "buf:lint:ignore");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".mcptagrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .mcptagrc.json already exists
    ");
    assert_eq!(test.read_file(".mcptagrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("comment.txt", "buf:lint:ignore\n@mcp\nDoc")?;

    assert_cmd_snapshot!(test.clean_command().arg("comment.txt"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Doc

    ----- stderr -----
    ");

    Ok(())
}
