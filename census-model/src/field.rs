//! Column names a chart can bind to, with typed accessors into a record.

use crate::StudentRecord;
use serde::Serialize;
use std::fmt;

/// A chart-addressable column of the joined census table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    BirthMonth,
    AgeSurveyed,
    Gender,
    YearSurveyed,
    Height,
    Armspan,
    HrsSpentWithFamily,
    HrsGames,
    HrsChores,
    HrsSocialMedia,
    MemoryGameScore,
    AcademicPressure,
}

impl Field {
    /// Column name as it appears in the source tables.
    pub fn name(&self) -> &'static str {
        match self {
            Field::BirthMonth => "BirthMonth",
            Field::AgeSurveyed => "AgeSurveyed",
            Field::Gender => "Gender",
            Field::YearSurveyed => "YearSurveyed",
            Field::Height => "Height",
            Field::Armspan => "Armspan",
            Field::HrsSpentWithFamily => "HrsSpentWithFamily",
            Field::HrsGames => "HrsGames",
            Field::HrsChores => "HrsChores",
            Field::HrsSocialMedia => "HrsSocialMedia",
            Field::MemoryGameScore => "MemoryGameScore",
            Field::AcademicPressure => "AcademicPressure",
        }
    }

    /// True for columns with categorical rather than numeric values.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Field::BirthMonth | Field::Gender)
    }

    /// Numeric value of this column for `record`.
    ///
    /// `BirthMonth` maps to its calendar number; `Gender` has no numeric
    /// value and always yields `None`.
    pub fn number(&self, record: &StudentRecord) -> Option<f64> {
        match self {
            Field::BirthMonth => Some(record.birth_month.number() as f64),
            Field::AgeSurveyed => Some(record.age_surveyed as f64),
            Field::Gender => None,
            Field::YearSurveyed => Some(record.year_surveyed as f64),
            Field::Height => record.height,
            Field::Armspan => record.armspan,
            Field::HrsSpentWithFamily => record.hrs_spent_with_family,
            Field::HrsGames => record.hrs_games,
            Field::HrsChores => record.hrs_chores,
            Field::HrsSocialMedia => record.hrs_social_media,
            Field::MemoryGameScore => record.memory_game_score,
            Field::AcademicPressure => record.academic_pressure,
        }
        .filter(|v| v.is_finite())
    }

    /// Category label of this column for `record`.
    ///
    /// Numeric columns are formatted without a trailing `.0` so that integer
    /// values such as survey years read naturally as labels.
    pub fn category(&self, record: &StudentRecord) -> Option<String> {
        match self {
            Field::BirthMonth => Some(record.birth_month.name().to_string()),
            Field::Gender => record.gender.as_ref().map(|g| g.to_string()),
            _ => self.number(record).map(format_number),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format a number as a compact label ("2018", "7.5").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
