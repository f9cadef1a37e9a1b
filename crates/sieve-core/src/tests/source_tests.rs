use sieve_config::SourceConfig;
use sieve_types::RenderMode;

use super::{FixedSource, result};
use crate::error::GroupError;
use crate::source::{DefinitionSource, SourceGroup, StaticSourceGroup};

#[test]
fn test_define_stamps_source_and_mode() {
    let mut group = StaticSourceGroup::new();
    group
        .push(
            SourceConfig::new("A", RenderMode::Markdown),
            FixedSource::new("A", vec![result("run", Some("a"))]),
        )
        .unwrap();
    group
        .push(
            SourceConfig::new("B", RenderMode::Html),
            FixedSource::new("B", vec![result("ran", Some("b")), result("runs", None)]),
        )
        .unwrap();

    let results = group.define("run");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].source, "A");
    assert_eq!(results[0].render_mode, RenderMode::Markdown);
    assert_eq!(results[1].source, "B");
    assert_eq!(results[1].render_mode, RenderMode::Html);
    assert_eq!(results[2].headword, "runs");
}

#[test]
fn test_blank_word_yields_nothing() {
    let mut group = StaticSourceGroup::new();
    group
        .push(
            SourceConfig::new("A", RenderMode::Raw),
            FixedSource::new("A", vec![result("run", Some("a"))]),
        )
        .unwrap();

    assert!(group.define("  \n ").is_empty());
}

#[test]
fn test_duplicate_names_rejected() {
    let mut group = StaticSourceGroup::new();
    group
        .push(SourceConfig::new("A", RenderMode::Raw), FixedSource::new("A", vec![]))
        .unwrap();
    let err = group
        .push(SourceConfig::new("A", RenderMode::Html), FixedSource::new("A", vec![]))
        .unwrap_err();
    assert!(matches!(err, GroupError::DuplicateSource(name) if name == "A"));

    let err = group
        .push(SourceConfig::new("", RenderMode::Html), FixedSource::new("", vec![]))
        .unwrap_err();
    assert!(matches!(err, GroupError::EmptyName));
}

#[test]
fn test_from_config_orders_by_config() {
    let loaded: Vec<Box<dyn DefinitionSource>> = vec![
        FixedSource::new("Local", vec![]),
        FixedSource::new("Extra", vec![]),
        FixedSource::new("Wiktionary", vec![]),
    ];
    let configs = vec![
        SourceConfig::new("Wiktionary", RenderMode::MarkdownHtml),
        SourceConfig::new("Missing", RenderMode::Html),
        SourceConfig::new("Local", RenderMode::Raw),
    ];

    let group = StaticSourceGroup::from_config(&configs, loaded);
    assert_eq!(group.names(), ["Wiktionary", "Local", "Extra"]);
    assert_eq!(
        group.source("Wiktionary").map(|s| s.display_mode),
        Some(RenderMode::MarkdownHtml)
    );
    assert_eq!(
        group.source("Extra").map(|s| s.display_mode),
        Some(RenderMode::Plaintext)
    );
    assert!(group.source("Missing").is_none());
}

#[test]
fn test_from_config_skips_clashing_names() {
    let loaded: Vec<Box<dyn DefinitionSource>> = vec![
        FixedSource::new("Oxford", vec![result("run", Some("to move fast"))]),
        FixedSource::new("Oxford", vec![result("walk", Some("to move slowly"))]),
        FixedSource::new("", vec![result("run", Some("nameless"))]),
        FixedSource::new("Slang", vec![result("run", Some("to leave"))]),
    ];
    let configs = vec![
        SourceConfig::new("Oxford", RenderMode::Raw),
        SourceConfig::new("Oxford", RenderMode::Html),
    ];

    let group = StaticSourceGroup::from_config(&configs, loaded);
    assert_eq!(group.names(), ["Oxford", "Slang"]);
    assert_eq!(
        group.source("Oxford").map(|s| s.display_mode),
        Some(RenderMode::Raw)
    );

    let results = group.define("run");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].definition.as_deref(), Some("to move fast"));
    assert_eq!(results[1].source, "Slang");
}
