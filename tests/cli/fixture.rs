//! Library-level properties checked against the reference catalog.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tsglot::core::{
    LoadedCatalog, TranslationStatus, Translator, parse_ts_str, write_ts_string,
};
use tsglot::rules::duplicates::check_duplicates;

use crate::FIXTURE;

#[test]
fn test_fixture_shape() {
    let catalog = parse_ts_str(FIXTURE).unwrap();

    assert_eq!(catalog.version.as_deref(), Some("2.1"));
    assert_eq!(catalog.language.as_deref(), Some("zh_CN"));
    assert_eq!(catalog.message_count(), 225);

    let names: Vec<&str> = catalog.contexts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "AsciiFile",
            "LC_Align",
            "LC_Gear",
            "LC_List",
            "LC_SameProp",
            "LC_Sample",
            "PicFile",
            "dibPunto",
            "divide",
            "dividedlg",
            "lc_Geardlg",
            "lc_Listdlg",
            "lc_Sampledlg",
            "picPunto",
            "plot",
            "plotDialog",
            "pointBox",
            "textBox",
        ]
    );

    let unfinished = catalog
        .entries()
        .filter(|e| e.message.translation.status == TranslationStatus::Unfinished)
        .count();
    assert_eq!(unfinished, 50);

    let locations: usize = catalog.entries().map(|e| e.message.locations.len()).sum();
    assert_eq!(locations, 245);
}

#[test]
fn test_fixture_writes_back_byte_identical() {
    let catalog = parse_ts_str(FIXTURE).unwrap();
    assert_eq!(write_ts_string(&catalog), FIXTURE);
}

#[test]
fn test_fixture_round_trip_preserves_records() {
    let catalog = parse_ts_str(FIXTURE).unwrap();
    let reparsed = parse_ts_str(&write_ts_string(&catalog)).unwrap();
    assert_eq!(reparsed.records(), catalog.records());
}

#[test]
fn test_fixture_lookups() {
    let catalog = parse_ts_str(FIXTURE).unwrap();
    let translator = Translator::from_catalog(&catalog);

    assert_eq!(translator.translate("LC_Align", "Align", None), "对齐");
    // Unfinished with an empty draft.
    assert_eq!(
        translator.translate("LC_List", "TEXTCONTENT", None),
        "TEXTCONTENT"
    );
    // Unfinished drafts are never shown.
    assert_eq!(
        translator.translate("divide", "Empty Entity", None),
        "Empty Entity"
    );
    assert_eq!(translator.lookup("divide", "Empty Entity", None), None);
    // Same source, finished, in another context.
    assert_eq!(translator.translate("LC_List", "Empty Entity", None), "无实体");
    assert_eq!(
        translator.translate(
            "plotDialog",
            "Polyline",
            Some("Plot Equation to generate RS_Polyline")
        ),
        "Polyline"
    );
    assert_eq!(translator.translate("NoSuchContext", "Align", None), "Align");
}

#[test]
fn test_fixture_displayed_strings() {
    let catalog = parse_ts_str(FIXTURE).unwrap();
    let translator = Translator::from_catalog(&catalog);

    for entry in catalog.entries() {
        let message = entry.message;
        let translation = &message.translation;
        let expected = if translation.status == TranslationStatus::Finished
            && !translation.text.is_empty()
        {
            translation.text.as_str()
        } else {
            message.source.as_str()
        };

        assert_eq!(message.displayed(), expected);
        assert_eq!(
            translator.translate(entry.context, &message.source, message.comment.as_deref()),
            expected,
            "{}::{}",
            entry.context,
            message.source
        );
    }
}

#[test]
fn test_fixture_keys_are_unique() {
    let catalog = parse_ts_str(FIXTURE).unwrap();

    let mut seen: HashMap<(&str, &str, &str), usize> = HashMap::new();
    for entry in catalog.entries() {
        *seen
            .entry((entry.context, &entry.message.source, entry.message.comment_str()))
            .or_default() += 1;
    }
    assert!(seen.values().all(|&count| count == 1));

    let loaded = LoadedCatalog {
        path: "plugins_zh_cn.ts".to_string(),
        catalog,
    };
    let result = check_duplicates(&loaded, |_, _| false);
    assert!(result.conflicts.is_empty());
    assert!(result.duplicates.is_empty());
}
