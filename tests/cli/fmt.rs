use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, FIXTURE, catalog};

const COMPACT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="zh_CN">
  <context>
    <name>PicFile</name>
    <message>
      <source>Picture</source>
      <translation>图片</translation>
    </message>
  </context>
</TS>"#;

const CANONICAL: &str = r#"<context>
    <name>PicFile</name>
    <message>
        <source>Picture</source>
        <translation>图片</translation>
    </message>
</context>
"#;

#[test]
fn test_fmt_canonical_file_unchanged() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    assert_cmd_snapshot!(test.fmt_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ 1 catalog(s) already formatted

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fmt_dry_run_lists_files() -> Result<()> {
    let test = CliTest::with_file("i18n/picfile_zh_cn.ts", COMPACT)?;

    assert_cmd_snapshot!(test.fmt_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Would reformat 1 catalog(s):
      - ./i18n/picfile_zh_cn.ts
    Run with --apply to rewrite these files.

    ----- stderr -----
    ");
    assert_eq!(test.read_file("i18n/picfile_zh_cn.ts")?, COMPACT);

    Ok(())
}

#[test]
fn test_fmt_apply_rewrites() -> Result<()> {
    let test = CliTest::with_file("i18n/picfile_zh_cn.ts", COMPACT)?;

    assert_cmd_snapshot!(test.fmt_command().arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Reformatted 1 catalog(s):
      - ./i18n/picfile_zh_cn.ts

    ----- stderr -----
    ");
    assert_eq!(
        test.read_file("i18n/picfile_zh_cn.ts")?,
        catalog(CANONICAL)
    );

    // A second run has nothing left to do.
    assert_cmd_snapshot!(test.fmt_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ 1 catalog(s) already formatted

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fmt_keeps_ids_and_old_sources() -> Result<()> {
    let input = catalog(
        r#"<context>
    <name>PicFile</name>
    <comment>Picture dialog</comment>
    <message id="pic.title">
        <location filename="../picfile/picfile.cpp" line="42"/>
        <source>Picture</source>
        <oldsource>Pic</oldsource>
        <oldcomment>title</oldcomment>
        <translation>图片</translation>
        <userdata>42</userdata>
        <extra-po-flags>c-format</extra-po-flags>
    </message>
</context>
"#,
    );
    let test = CliTest::with_file("i18n/picfile_zh_cn.ts", &input)?;

    assert_cmd_snapshot!(test.fmt_command().arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ 1 catalog(s) already formatted

    ----- stderr -----
    ");
    assert_eq!(test.read_file("i18n/picfile_zh_cn.ts")?, input);

    Ok(())
}

#[test]
fn test_fmt_apply_reindents_without_losing_ids() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/picfile_zh_cn.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="zh_CN">
  <context>
    <name>PicFile</name>
    <message id="pic.title">
      <source>Picture</source>
      <oldsource>Pic</oldsource>
      <translation>图片</translation>
    </message>
  </context>
</TS>"#,
    )?;

    assert_cmd_snapshot!(test.fmt_command().arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Reformatted 1 catalog(s):
      - ./i18n/picfile_zh_cn.ts

    ----- stderr -----
    ");
    assert_eq!(
        test.read_file("i18n/picfile_zh_cn.ts")?,
        catalog(
            r#"<context>
    <name>PicFile</name>
    <message id="pic.title">
        <source>Picture</source>
        <oldsource>Pic</oldsource>
        <translation>图片</translation>
    </message>
</context>
"#
        )
    );

    Ok(())
}

#[test]
fn test_fmt_keeps_relative_locations() -> Result<()> {
    let input = catalog(
        r#"<context>
    <name>divide</name>
    <message>
        <location filename="../divide/divide.cpp" line="+67"/>
        <source>Error</source>
        <translation>错误</translation>
    </message>
    <message>
        <location line="+37"/>
        <location filename="../divide/dlg.cpp" line="+5"/>
        <source>n</source>
        <translation type="unfinished">n</translation>
    </message>
</context>
"#,
    );
    let test = CliTest::with_file("plugins_zh_cn.ts", &input)?;

    assert_cmd_snapshot!(test.fmt_command().arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ 1 catalog(s) already formatted

    ----- stderr -----
    ");
    assert_eq!(test.read_file("plugins_zh_cn.ts")?, input);

    Ok(())
}

#[test]
fn test_fmt_normalizes_crlf_and_control_characters() -> Result<()> {
    let test = CliTest::with_file(
        "plugins_zh_cn.ts",
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n<!DOCTYPE TS>\r\n<TS version=\"2.1\" language=\"zh_CN\">\r\n<context>\r\n    <name>textBox</name>\r\n    <message>\r\n        <source>Esc<byte value=\"x1b\"/>seq\r\nnext</source>\r\n        <translation>转义</translation>\r\n    </message>\r\n</context>\r\n</TS>\r\n",
    )?;

    assert_cmd_snapshot!(test.fmt_command().arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Reformatted 1 catalog(s):
      - ./plugins_zh_cn.ts

    ----- stderr -----
    ");
    assert_eq!(
        test.read_file("plugins_zh_cn.ts")?,
        catalog(
            r#"<context>
    <name>textBox</name>
    <message>
        <source>Esc<byte value="x1b"/>seq
next</source>
        <translation>转义</translation>
    </message>
</context>
"#
        )
    );

    Ok(())
}

#[test]
fn test_fmt_skips_catalogs_with_unknown_elements() -> Result<()> {
    let input = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="zh_CN">
<dependencies>
    <dependency catalog="qtbase_zh_CN"/>
</dependencies>
  <context>
    <name>PicFile</name>
    <message>
      <source>Picture</source>
      <translation>图片</translation>
    </message>
  </context>
</TS>"#;
    let test = CliTest::with_file("i18n/qt_zh_cn.ts", input)?;

    assert_cmd_snapshot!(test.fmt_command().arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: left 1 catalog(s) unchanged, rewriting would drop unknown elements:
      - ./i18n/qt_zh_cn.ts (<dependencies>)

    ----- stderr -----
    ");
    assert_eq!(test.read_file("i18n/qt_zh_cn.ts")?, input);

    Ok(())
}
