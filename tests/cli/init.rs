use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .tsglotrc.json\n");
    assert!(test.root().join(".tsglotrc.json").exists());

    let content = test.read_file(".tsglotrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in [
        "includes",
        "ignores",
        "ignoreContexts",
        "ignoreTexts",
        "checkLocations",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{field}'");
    }
    assert_eq!(parsed["checkLocations"], true);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tsglotrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("error: .tsglotrc.json already exists"));
    assert_eq!(test.read_file(".tsglotrc.json")?, "{}");

    Ok(())
}
