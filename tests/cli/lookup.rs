use std::process::Command;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, FIXTURE};

fn lookup_command(test: &CliTest, args: &[&str]) -> Command {
    let mut cmd = test.command();
    cmd.arg("lookup").arg("plugins_zh_cn.ts").args(args);
    cmd
}

#[test]
fn test_lookup_finished() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    assert_cmd_snapshot!(lookup_command(&test, &["LC_Align", "Align"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    对齐

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    assert_cmd_snapshot!(lookup_command(&test, &["divide", "Empty Entity"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Empty Entity

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_with_comment() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    let mut cmd = lookup_command(
        &test,
        &[
            "plotDialog",
            "Polyline",
            "--comment",
            "Plot Equation to generate RS_Polyline",
        ],
    );

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Polyline

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_unknown_message() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    assert_cmd_snapshot!(lookup_command(&test, &["NoSuchContext", "Align"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Align

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_crlf_catalog() -> Result<()> {
    let content = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n<!DOCTYPE TS>\r\n<TS version=\"2.1\" language=\"zh_CN\">\r\n<context>\r\n    <name>LC_Align</name>\r\n    <message>\r\n        <source>line one\r\nline two</source>\r\n        <translation>第一行\r\n第二行</translation>\r\n    </message>\r\n</context>\r\n</TS>\r\n";
    let test = CliTest::with_file("plugins_zh_cn.ts", content)?;

    assert_cmd_snapshot!(lookup_command(&test, &["LC_Align", "line one\nline two"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    第一行
    第二行

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(lookup_command(&test, &["LC_Align", "Align"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to load catalog plugins_zh_cn.ts: Failed to read plugins_zh_cn.ts: No such file or directory (os error 2)
    ");

    Ok(())
}
