use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, FIXTURE, run};

fn find<'a>(entries: &'a [Value], context: &str, source: &str) -> &'a Value {
    entries
        .iter()
        .find(|e| e["context"] == context && e["source"] == source)
        .unwrap()
}

#[test]
fn test_export_to_stdout() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    let mut cmd = test.command();
    cmd.args(["export", "plugins_zh_cn.ts"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let entries: Vec<Value> = serde_json::from_str(&output.stdout)?;
    assert_eq!(entries.len(), 225);

    let align = find(&entries, "LC_Align", "Align");
    assert_eq!(align["translation"], "对齐");
    assert_eq!(align["status"], "finished");
    assert_eq!(align["displayed"], "对齐");
    assert_eq!(
        align["locations"],
        json!([
            { "filename": "../align/align.cpp", "line": 24 },
            { "filename": "../align/align.cpp", "line": 31 }
        ])
    );

    let empty = find(&entries, "divide", "Empty Entity");
    assert_eq!(empty["translation"], "无实体");
    assert_eq!(empty["status"], "unfinished");
    assert_eq!(empty["displayed"], "Empty Entity");

    let polyline = find(&entries, "plotDialog", "Polyline");
    assert_eq!(polyline["comment"], "Plot Equation to generate RS_Polyline");

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    let mut cmd = test.command();
    cmd.args(["export", "plugins_zh_cn.ts", "--output", "entries.json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Exported 225 entries to entries.json\n");

    let entries: Vec<Value> = serde_json::from_str(&test.read_file("entries.json")?)?;
    assert_eq!(entries.len(), 225);

    Ok(())
}
