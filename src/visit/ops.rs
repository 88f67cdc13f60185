use serde::Deserialize;
use tracing::debug;

use crate::{
    record::{Developer, Director, Record},
    visit::Visitor,
};

/// Income plus a percentage bonus of that income. Uses integer
/// arithmetic, so the bonus is truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IncomeAdjustment {
    pub bonus_rate: i64,
}

impl IncomeAdjustment {
    pub fn new(bonus_rate: i64) -> Self {
        Self { bonus_rate }
    }

    fn adjust(&self, record: &dyn Record) -> i64 {
        let income = record.income();
        let result = income.wrapping_add(income.wrapping_mul(self.bonus_rate) / 100);
        debug!(
            "IncomeAdjustment({}) on {}: {}",
            self.bonus_rate,
            record.display_name(),
            result
        );
        result
    }
}

impl Visitor<i64> for IncomeAdjustment {
    fn visit_developer(&mut self, record: &Developer) -> i64 {
        self.adjust(record)
    }

    fn visit_director(&mut self, record: &Director) -> i64 {
        self.adjust(record)
    }
}

/// Age plus a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AgeOffset {
    pub captain_age: i64,
}

impl AgeOffset {
    pub fn new(captain_age: i64) -> Self {
        Self { captain_age }
    }

    fn offset(&self, record: &dyn Record) -> i64 {
        let result = record.age().wrapping_add(self.captain_age);
        debug!(
            "AgeOffset({}) on {}: {}",
            self.captain_age,
            record.display_name(),
            result
        );
        result
    }
}

impl Visitor<i64> for AgeOffset {
    fn visit_developer(&mut self, record: &Developer) -> i64 {
        self.offset(record)
    }

    fn visit_director(&mut self, record: &Director) -> i64 {
        self.offset(record)
    }
}

/// Closed set of numeric operations, so a list of them can be stored and
/// applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Operation {
    IncomeAdjustment(IncomeAdjustment),
    AgeOffset(AgeOffset),
}

impl Operation {
    fn visitor(&mut self) -> &mut dyn Visitor<i64> {
        match self {
            Operation::IncomeAdjustment(op) => op,
            Operation::AgeOffset(op) => op,
        }
    }
}

impl Visitor<i64> for Operation {
    fn visit_developer(&mut self, record: &Developer) -> i64 {
        self.visitor().visit_developer(record)
    }

    fn visit_director(&mut self, record: &Director) -> i64 {
        self.visitor().visit_director(record)
    }
}

impl From<IncomeAdjustment> for Operation {
    fn from(op: IncomeAdjustment) -> Self {
        Operation::IncomeAdjustment(op)
    }
}

impl From<AgeOffset> for Operation {
    fn from(op: AgeOffset) -> Self {
        Operation::AgeOffset(op)
    }
}
