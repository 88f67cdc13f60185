use tracing::info;

use crate::{
    config::{Entry, Roster},
    record::Record,
    visit::Visitable,
};

/// Run every entry of the roster in order and return the output lines:
/// the display name of each employee followed by one result per operation.
pub fn run(roster: &Roster) -> Vec<String> {
    info!("Running roster with {} entries", roster.entries.len());
    roster.entries.iter().flat_map(run_entry).collect()
}

/// Run a single entry. Entries share no state, so they can be run in any
/// order or in parallel.
pub fn run_entry(entry: &Entry) -> Vec<String> {
    let mut lines = Vec::with_capacity(entry.operations.len() + 1);
    lines.push(entry.employee.display_name());

    for op in &entry.operations {
        let mut op = *op;
        let result: i64 = entry.employee.accept(&mut op);
        lines.push(result.to_string());
    }

    lines
}
