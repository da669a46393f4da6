use crate::BirthMonth;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender label as recorded in the census (categorical, free text).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gender(pub String);

impl Gender {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One student-survey observation from the joined census table.
///
/// The demographic columns come from `StudentDemographics` and are always
/// present. Everything else is joined in from a sub-table and is `None`
/// when that table has no row for the student (or stores NULL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: i64,
    pub region: Option<String>,
    pub gender: Option<Gender>,
    pub age_surveyed: i64,
    pub year_surveyed: i64,
    pub birth_month: BirthMonth,

    // BodySpecifics
    /// Height in centimeters.
    pub height: Option<f64>,
    /// Armspan in centimeters.
    pub armspan: Option<f64>,

    // HomeLife
    pub hrs_spent_with_family: Option<f64>,
    pub hrs_chores: Option<f64>,

    // MiscPreferences
    pub memory_game_score: Option<f64>,

    // SocialActivity
    pub hrs_games: Option<f64>,
    pub hrs_social_media: Option<f64>,

    // WorldIssues
    pub academic_pressure: Option<f64>,
}

impl StudentRecord {
    /// A record with only the demographic columns filled in, as produced by
    /// a left join with no matching sub-table rows.
    pub fn demographic(
        student_id: i64,
        gender: Option<Gender>,
        age_surveyed: i64,
        year_surveyed: i64,
        birth_month: BirthMonth,
    ) -> Self {
        Self {
            student_id,
            region: None,
            gender,
            age_surveyed,
            year_surveyed,
            birth_month,
            height: None,
            armspan: None,
            hrs_spent_with_family: None,
            hrs_chores: None,
            memory_game_score: None,
            hrs_games: None,
            hrs_social_media: None,
            academic_pressure: None,
        }
    }
}
