use sieve_types::{AppEvent, NavAction};

use crate::io::{HELP, parse_command};
use crate::ui::{format_event, strip_tags};

#[test]
fn test_parse_lookup() {
    match parse_command("lookup  ice cream ") {
        Ok(AppEvent::Lookup(word)) => assert_eq!(word, "ice cream"),
        other => panic!("Unexpected {:?}", other),
    }
    assert!(parse_command("lookup").is_err());
}

#[test]
fn test_parse_navigation() {
    let cases = [
        ("next", NavAction::Next),
        ("n", NavAction::Next),
        ("prev", NavAction::Previous),
        ("first", NavAction::First),
        ("last", NavAction::Last),
    ];
    for (line, expected) in cases {
        match parse_command(line) {
            Ok(AppEvent::Navigate(action)) => assert_eq!(action, expected, "{line}"),
            other => panic!("Unexpected {:?} for {line}", other),
        }
    }
}

#[test]
fn test_parse_add_with_and_without_sentence() {
    match parse_command("add") {
        Ok(AppEvent::CreateCard { sentence }) => assert!(sentence.is_none()),
        other => panic!("Unexpected {:?}", other),
    }
    match parse_command("add she ran home") {
        Ok(AppEvent::CreateCard { sentence }) => {
            assert_eq!(sentence.as_deref(), Some("she ran home"))
        }
        other => panic!("Unexpected {:?}", other),
    }
}

#[test]
fn test_parse_import() {
    match parse_command("import /media/Kindle --highlights-only") {
        Ok(AppEvent::ImportKindle {
            path,
            highlights_only,
        }) => {
            assert_eq!(path, "/media/Kindle");
            assert!(highlights_only);
        }
        other => panic!("Unexpected {:?}", other),
    }
    match parse_command("import /media/Kindle") {
        Ok(AppEvent::ImportKindle {
            highlights_only, ..
        }) => assert!(!highlights_only),
        other => panic!("Unexpected {:?}", other),
    }
    match parse_command("import --highlights-only") {
        Ok(AppEvent::ImportKindle {
            path,
            highlights_only,
        }) => {
            assert!(path.is_empty());
            assert!(highlights_only);
        }
        other => panic!("Unexpected {:?}", other),
    }
}

#[test]
fn test_parse_messages() {
    assert_eq!(parse_command("help").unwrap_err(), HELP);
    assert_eq!(parse_command("   ").unwrap_err(), "");
    assert!(parse_command("fly").unwrap_err().contains("unknown command 'fly'"));
    assert!(matches!(parse_command("quit"), Ok(AppEvent::Quit)));
}

#[test]
fn test_format_definition_strips_info_tags() {
    let event = AppEvent::ShowDefinition {
        counter: "2/3".to_string(),
        info: "<strong>run</strong> in <em>Sample</em>".to_string(),
        text: "to move swiftly".to_string(),
    };
    assert_eq!(
        format_event(&event).unwrap(),
        "[2/3] run in Sample\nto move swiftly"
    );

    let empty = AppEvent::ShowDefinition {
        counter: "0/0".to_string(),
        info: String::new(),
        text: String::new(),
    };
    assert_eq!(format_event(&empty).unwrap(), "[0/0]");
}

#[test]
fn test_format_other_events() {
    assert_eq!(
        format_event(&AppEvent::ShowExport(String::new())).unwrap(),
        "(nothing to export)"
    );
    assert_eq!(
        format_event(&AppEvent::ShowExport("a<br>b".to_string())).unwrap(),
        "a<br>b"
    );
    assert!(format_event(&AppEvent::Reset).is_none());
    assert_eq!(strip_tags("<b>x</b>"), "x");
}

#[test]
fn test_parse_import_flag_anywhere() {
    match parse_command("import --highlights-only /mnt/My Kindle") {
        Ok(AppEvent::ImportKindle {
            path,
            highlights_only,
        }) => {
            assert_eq!(path, "/mnt/My Kindle");
            assert!(highlights_only);
        }
        other => panic!("Unexpected {:?}", other),
    }
}

#[test]
fn test_parse_reload() {
    assert!(matches!(parse_command("reload"), Ok(AppEvent::ConfigChanged)));
}
