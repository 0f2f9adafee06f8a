//! Calendar month type used for ordering and the monthly grid.

use serde::{Deserialize, Serialize};

/// A calendar month.
///
/// Carries the canonical English names, the 1-based month number, and the
/// January-to-December ordering that month-keyed aggregates must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Full English name, e.g. "January".
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Abbreviated name, e.g. "Jan".
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// 1-based month number (January = 1).
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Look up a month from its 1-based number.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::all().get(number.checked_sub(1)? as usize).copied()
    }

    /// Look up a month from its full English name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|m| m.name() == name).copied()
    }

    /// The month that follows this one, wrapping December to January.
    pub fn next(&self) -> Self {
        Self::from_number(self.number() % 12 + 1).expect("month number in 1..=12")
    }

    /// All twelve months in calendar order.
    pub fn all() -> &'static [Month] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
