use serde::Deserialize;
use strum_macros::{Display, EnumIter};

use crate::visit::{Visitable, Visitor};

/// Role label of an employee record. Used only in display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Director,
}

/// A record is any employee variant. Records are immutable once
/// constructed, so every field is only reachable through these getters.
pub trait Record {
    fn role(&self) -> Role;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn income(&self) -> i64;
    fn age(&self) -> i64;

    /// Human readable name on the form "<Role> <FirstName> <LastName>".
    fn display_name(&self) -> String {
        format!("{} {} {}", self.role(), self.first_name(), self.last_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    first_name: String,
    last_name: String,
    income: i64,
    age: i64,
}

impl Developer {
    pub fn new(first_name: &str, last_name: &str, income: i64, age: i64) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            income,
            age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    first_name: String,
    last_name: String,
    income: i64,
    age: i64,
}

impl Director {
    pub fn new(first_name: &str, last_name: &str, income: i64, age: i64) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            income,
            age,
        }
    }
}

impl Record for Developer {
    fn role(&self) -> Role {
        Role::Developer
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn income(&self) -> i64 {
        self.income
    }

    fn age(&self) -> i64 {
        self.age
    }
}

impl Record for Director {
    fn role(&self) -> Role {
        Role::Director
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn income(&self) -> i64 {
        self.income
    }

    fn age(&self) -> i64 {
        self.age
    }
}

impl Visitable for Developer {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        visitor.visit_developer(self)
    }
}

impl Visitable for Director {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        visitor.visit_director(self)
    }
}

/// Closed set of employee variants. Adding a variant here forces every
/// match below, and every Visitor, to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Employee {
    Developer(Developer),
    Director(Director),
}

impl Employee {
    /// Create the variant matching the given role.
    pub fn new(role: Role, first_name: &str, last_name: &str, income: i64, age: i64) -> Self {
        match role {
            Role::Developer => {
                Employee::Developer(Developer::new(first_name, last_name, income, age))
            }
            Role::Director => Employee::Director(Director::new(first_name, last_name, income, age)),
        }
    }

    fn record(&self) -> &dyn Record {
        match self {
            Employee::Developer(d) => d,
            Employee::Director(d) => d,
        }
    }
}

impl Record for Employee {
    fn role(&self) -> Role {
        self.record().role()
    }

    fn first_name(&self) -> &str {
        self.record().first_name()
    }

    fn last_name(&self) -> &str {
        self.record().last_name()
    }

    fn income(&self) -> i64 {
        self.record().income()
    }

    fn age(&self) -> i64 {
        self.record().age()
    }
}

impl Visitable for Employee {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        match self {
            Employee::Developer(d) => d.accept(visitor),
            Employee::Director(d) => d.accept(visitor),
        }
    }
}

impl From<Developer> for Employee {
    fn from(d: Developer) -> Self {
        Employee::Developer(d)
    }
}

impl From<Director> for Employee {
    fn from(d: Director) -> Self {
        Employee::Director(d)
    }
}
