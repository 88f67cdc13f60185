use std::fs;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::{Res, RosterError},
    record::{Developer, Director, Employee, Role},
    visit::{AgeOffset, IncomeAdjustment, Operation},
};

pub static DEFAULT_ROSTER_FILE: &str = "roster.toml";

pub static DEFAULT_ROSTER_TOML: &str = r#"# Roster configuration

[options]
debug-mode = false # Log every dispatch to stderr

[[employee]]
role = "developer" # Employee role (developer|director)
first-name = "Bob"
last-name = "Bilbo"
income = 1000
age = 32
operations = [
    { kind = "income-adjustment", bonus-rate = 20 },
    { kind = "age-offset", captain-age = 42 },
]

[[employee]]
role = "director"
first-name = "Bob"
last-name = "Baggins"
income = 2000
age = 40
operations = [
    { kind = "income-adjustment", bonus-rate = 10 },
    { kind = "age-offset", captain-age = 42 },
]
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Options {
    /// Enable debug logging regardless of RUST_LOG.
    #[serde(default)]
    pub debug_mode: bool,
}

/// An employee together with the operations applied to it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub employee: Employee,
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub options: Options,
    pub entries: Vec<Entry>,
}

impl Roster {
    /// The fixed reference roster run when no file is given.
    pub fn demo() -> Self {
        Self {
            options: Options::default(),
            entries: vec![
                Entry {
                    employee: Developer::new("Bob", "Bilbo", 1000, 32).into(),
                    operations: vec![
                        IncomeAdjustment::new(20).into(),
                        AgeOffset::new(42).into(),
                    ],
                },
                Entry {
                    employee: Director::new("Bob", "Baggins", 2000, 40).into(),
                    operations: vec![
                        IncomeAdjustment::new(10).into(),
                        AgeOffset::new(42).into(),
                    ],
                },
            ],
        }
    }

    /// Parse roster from TOML source. Path is only used in error messages.
    pub fn from_toml(path: &str, src: &str) -> Res<Self> {
        let file: RosterFile =
            toml::from_str(src).map_err(|err| RosterError::parse(path, &err.to_string()))?;

        let entries = file
            .employees
            .into_iter()
            .map(EmployeeEntry::into_entry)
            .collect::<Vec<_>>();

        debug!("Parsed {} roster entries from {}", entries.len(), path);
        Ok(Self {
            options: file.options,
            entries,
        })
    }
}

/// Read and parse the roster file at path.
pub fn load_roster_file(path: &str) -> Res<Roster> {
    info!("Loading roster file: {}", path);
    let src = fs::read_to_string(path).map_err(|err| RosterError::io(path, err))?;
    Roster::from_toml(path, &src)
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RosterFile {
    #[serde(default)]
    options: Options,
    #[serde(default, rename = "employee")]
    employees: Vec<EmployeeEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct EmployeeEntry {
    role: Role,
    first_name: String,
    last_name: String,
    income: i64,
    age: i64,
    #[serde(default)]
    operations: Vec<Operation>,
}

impl EmployeeEntry {
    fn into_entry(self) -> Entry {
        Entry {
            employee: Employee::new(
                self.role,
                &self.first_name,
                &self.last_name,
                self.income,
                self.age,
            ),
            operations: self.operations,
        }
    }
}
