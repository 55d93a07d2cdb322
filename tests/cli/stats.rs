use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, FIXTURE};

#[test]
fn test_stats_fixture() -> Result<()> {
    let test = CliTest::with_file("plugins_zh_cn.ts", FIXTURE)?;

    assert_cmd_snapshot!(test.stats_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ./plugins_zh_cn.ts (zh_CN)
      AsciiFile     100.0%     1 finished     0 unfinished     0 obsolete
      LC_Align      100.0%    11 finished     0 unfinished     0 obsolete
      LC_Gear       100.0%     2 finished     0 unfinished     0 obsolete
      LC_List        96.5%    55 finished     2 unfinished     0 obsolete
      LC_SameProp   100.0%     3 finished     0 unfinished     0 obsolete
      LC_Sample     100.0%     1 finished     0 unfinished     0 obsolete
      PicFile       100.0%     2 finished     0 unfinished     0 obsolete
      dibPunto      100.0%    35 finished     0 unfinished     0 obsolete
      divide         42.4%    14 finished    19 unfinished     0 obsolete
      dividedlg      52.9%     9 finished     8 unfinished     0 obsolete
      lc_Geardlg     76.2%    16 finished     5 unfinished     0 obsolete
      lc_Listdlg    100.0%     1 finished     0 unfinished     0 obsolete
      lc_Sampledlg  100.0%    12 finished     0 unfinished     0 obsolete
      picPunto       58.3%     7 finished     5 unfinished     0 obsolete
      plot          100.0%     1 finished     0 unfinished     0 obsolete
      plotDialog      8.3%     1 finished    11 unfinished     0 obsolete
      pointBox      100.0%     1 finished     0 unfinished     0 obsolete
      textBox       100.0%     3 finished     0 unfinished     0 obsolete
      total          77.8%   175 finished    50 unfinished     0 obsolete

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_stats_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.stats_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No catalogs found

    ----- stderr -----
    ");

    Ok(())
}
