use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_lines_text_output() -> Result<()> {
    let test = CliTest::with_file(
        "comment.txt",
        "buf:lint:ignore\n@mcp Enable this endpoint\n@ignore-comment x\nDoc",
    )?;

    assert_cmd_snapshot!(test.lines_command().arg("comment.txt"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1 | literal | buf:lint:ignore
    2 | marker  | @mcp Enable this endpoint
    3 | tag     | @ignore-comment x
    4 | text    | Doc

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_lines_json_output() -> Result<()> {
    let test = CliTest::with_file("comment.txt", "@mcp go\nDoc")?;

    let mut cmd = test.lines_command();
    cmd.args(["comment.txt", "--format", "json"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    [
      {
        "line": 1,
        "text": "@mcp go",
        "kind": "tag",
        "name": "mcp",
        "args": "go"
      },
      {
        "line": 2,
        "text": "Doc",
        "kind": "text"
      }
    ]

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_lines_marker_follows_tag_flag() -> Result<()> {
    let test = CliTest::with_file("comment.txt", "@mcp\n@expose")?;

    let mut cmd = test.lines_command();
    cmd.args(["comment.txt", "--tag", "expose"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1 | tag     | @mcp
    2 | marker  | @expose

    ----- stderr -----
    ");
    Ok(())
}
