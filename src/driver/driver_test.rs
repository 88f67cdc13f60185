use std::thread;

use crate::{
    config::{Entry, Roster},
    driver::{run, run_entry},
    record::{Developer, Director},
    visit::{AgeOffset, IncomeAdjustment},
};

#[test]
fn test_demo_output() {
    assert_eq!(
        run(&Roster::demo()),
        vec![
            "Developer Bob Bilbo",
            "1200",
            "74",
            "Director Bob Baggins",
            "2200",
            "82",
        ]
    );
}

#[test]
fn test_empty_roster() {
    assert!(run(&Roster::default()).is_empty());
}

#[test]
fn test_entry_without_operations() {
    let entry = Entry {
        employee: Director::new("Ann", "Lee", 3000, 51).into(),
        operations: vec![],
    };
    assert_eq!(run_entry(&entry), vec!["Director Ann Lee"]);
}

#[test]
fn test_operations_run_in_order() {
    let entry = Entry {
        employee: Developer::new("Bob", "Bilbo", 1000, 32).into(),
        operations: vec![
            AgeOffset::new(1).into(),
            IncomeAdjustment::new(50).into(),
            AgeOffset::new(-32).into(),
        ],
    };
    assert_eq!(
        run_entry(&entry),
        vec!["Developer Bob Bilbo", "33", "1500", "0"]
    );
}

#[test]
fn test_entries_in_parallel() {
    let roster = Roster::demo();

    let lines: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = roster
            .entries
            .iter()
            .map(|entry| s.spawn(move || run_entry(entry)))
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(lines, run(&roster));
}
