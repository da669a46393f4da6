use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The month a student was born in.
///
/// Variants are declared in calendar order so that sorting a collection of
/// months (or iterating a `BTreeSet<BirthMonth>`) follows the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BirthMonth {
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

impl BirthMonth {
    /// All twelve months in calendar order.
    pub const ALL: [BirthMonth; 12] = [
        BirthMonth::January,
        BirthMonth::February,
        BirthMonth::March,
        BirthMonth::April,
        BirthMonth::May,
        BirthMonth::June,
        BirthMonth::July,
        BirthMonth::August,
        BirthMonth::September,
        BirthMonth::October,
        BirthMonth::November,
        BirthMonth::December,
    ];

    /// Full English month name, as stored in the `BirthMonth` column.
    pub fn name(&self) -> &'static str {
        match self {
            BirthMonth::January => "January",
            BirthMonth::February => "February",
            BirthMonth::March => "March",
            BirthMonth::April => "April",
            BirthMonth::May => "May",
            BirthMonth::June => "June",
            BirthMonth::July => "July",
            BirthMonth::August => "August",
            BirthMonth::September => "September",
            BirthMonth::October => "October",
            BirthMonth::November => "November",
            BirthMonth::December => "December",
        }
    }

    /// Calendar month number, 1 = January.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Look up a month by its calendar number (1-12).
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }
}

impl From<chrono::Month> for BirthMonth {
    fn from(month: chrono::Month) -> Self {
        // chrono numbers months 1..=12, so the lookup cannot miss
        Self::ALL[month.number_from_month() as usize - 1]
    }
}

impl From<BirthMonth> for chrono::Month {
    fn from(month: BirthMonth) -> Self {
        match month {
            BirthMonth::January => chrono::Month::January,
            BirthMonth::February => chrono::Month::February,
            BirthMonth::March => chrono::Month::March,
            BirthMonth::April => chrono::Month::April,
            BirthMonth::May => chrono::Month::May,
            BirthMonth::June => chrono::Month::June,
            BirthMonth::July => chrono::Month::July,
            BirthMonth::August => chrono::Month::August,
            BirthMonth::September => chrono::Month::September,
            BirthMonth::October => chrono::Month::October,
            BirthMonth::November => chrono::Month::November,
            BirthMonth::December => chrono::Month::December,
        }
    }
}

/// Error returned when a month label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBirthMonthError(pub String);

impl fmt::Display for ParseBirthMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown birth month: '{}'", self.0)
    }
}

impl std::error::Error for ParseBirthMonthError {}

impl FromStr for BirthMonth {
    type Err = ParseBirthMonthError;

    /// Parses full ("March") or abbreviated ("Mar") month names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<chrono::Month>()
            .map(BirthMonth::from)
            .map_err(|_| ParseBirthMonthError(s.to_string()))
    }
}

impl fmt::Display for BirthMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_months_are_in_calendar_order() {
        for (i, month) in BirthMonth::ALL.iter().enumerate() {
            assert_eq!(month.number(), i as u32 + 1);
        }
        let mut sorted = BirthMonth::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, BirthMonth::ALL.to_vec());
    }

    #[test]
    fn parses_full_names_case_insensitively() {
        assert_eq!("January".parse::<BirthMonth>().unwrap(), BirthMonth::January);
        assert_eq!("september".parse::<BirthMonth>().unwrap(), BirthMonth::September);
        assert_eq!("  DECEMBER ".parse::<BirthMonth>().unwrap(), BirthMonth::December);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "Smarch".parse::<BirthMonth>().unwrap_err();
        assert_eq!(err.to_string(), "unknown birth month: 'Smarch'");
        assert!("".parse::<BirthMonth>().is_err());
    }

    #[test]
    fn name_matches_display() {
        for month in BirthMonth::ALL {
            assert_eq!(month.to_string(), month.name());
            assert_eq!(month.name().parse::<BirthMonth>().unwrap(), month);
        }
    }

    #[test]
    fn from_number_bounds() {
        assert_eq!(BirthMonth::from_number(1), Some(BirthMonth::January));
        assert_eq!(BirthMonth::from_number(12), Some(BirthMonth::December));
        assert_eq!(BirthMonth::from_number(0), None);
        assert_eq!(BirthMonth::from_number(13), None);
    }

    #[test]
    fn converts_to_and_from_chrono() {
        let m: chrono::Month = BirthMonth::July.into();
        assert_eq!(m, chrono::Month::July);
        assert_eq!(BirthMonth::from(chrono::Month::July), BirthMonth::July);
    }
}
