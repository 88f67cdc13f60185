use std::fs;

use crate::{
    config::{DEFAULT_ROSTER_TOML, Options, Roster, load_roster_file},
    error::RosterError,
    record::{Employee, Record, Role},
    visit::{AgeOffset, IncomeAdjustment, Operation},
};

#[test]
fn test_default_file_matches_demo() {
    let roster = Roster::from_toml("roster.toml", DEFAULT_ROSTER_TOML).unwrap();
    assert_eq!(roster, Roster::demo());
}

#[test]
fn test_parse_options_and_operations() {
    let src = r#"
        [options]
        debug-mode = true

        [[employee]]
        role = "director"
        first-name = "Ann"
        last-name = "Lee"
        income = 3000
        age = 51
        operations = [{ kind = "age-offset", captain-age = -1 }]
    "#;

    let roster = Roster::from_toml("test", src).unwrap();
    assert_eq!(roster.options, Options { debug_mode: true });
    assert_eq!(roster.entries.len(), 1);

    let entry = &roster.entries[0];
    assert_eq!(
        entry.employee,
        Employee::new(Role::Director, "Ann", "Lee", 3000, 51)
    );
    assert_eq!(entry.operations, vec![Operation::from(AgeOffset::new(-1))]);
}

#[test]
fn test_missing_sections_default() {
    let roster = Roster::from_toml("test", "").unwrap();
    assert_eq!(roster, Roster::default());

    let src = r#"
        [[employee]]
        role = "developer"
        first-name = "Bob"
        last-name = "Bilbo"
        income = 1000
        age = 32
    "#;
    let roster = Roster::from_toml("test", src).unwrap();
    assert!(!roster.options.debug_mode);
    assert!(roster.entries[0].operations.is_empty());
    assert_eq!(roster.entries[0].employee.display_name(), "Developer Bob Bilbo");
}

#[test]
fn test_operation_order_is_kept() {
    let src = r#"
        [[employee]]
        role = "developer"
        first-name = "Bob"
        last-name = "Bilbo"
        income = 1000
        age = 32
        operations = [
            { kind = "age-offset", captain-age = 1 },
            { kind = "income-adjustment", bonus-rate = 5 },
            { kind = "age-offset", captain-age = 2 },
        ]
    "#;

    let roster = Roster::from_toml("test", src).unwrap();
    assert_eq!(
        roster.entries[0].operations,
        vec![
            Operation::from(AgeOffset::new(1)),
            Operation::from(IncomeAdjustment::new(5)),
            Operation::from(AgeOffset::new(2)),
        ]
    );
}

#[test]
fn test_unknown_role_is_error() {
    let src = r#"
        [[employee]]
        role = "intern"
        first-name = "Bob"
        last-name = "Bilbo"
        income = 1000
        age = 32
    "#;

    match Roster::from_toml("bad.toml", src) {
        Err(RosterError::Parse { path, .. }) => assert_eq!(path, "bad.toml"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_operation_is_error() {
    let src = r#"
        [[employee]]
        role = "developer"
        first-name = "Bob"
        last-name = "Bilbo"
        income = 1000
        age = 32
        operations = [{ kind = "promote" }]
    "#;

    assert!(matches!(
        Roster::from_toml("bad.toml", src),
        Err(RosterError::Parse { .. })
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_roster_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, RosterError::Io { .. }));
    assert!(err.to_string().starts_with("does/not/exist.toml: "));
}

#[test]
fn test_load_file() {
    let path = std::env::temp_dir().join(format!("roster_test_{}.toml", std::process::id()));
    fs::write(&path, DEFAULT_ROSTER_TOML).unwrap();

    let roster = load_roster_file(&path.to_string_lossy()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(roster, Roster::demo());
}
