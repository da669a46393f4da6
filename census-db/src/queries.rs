//! The fixed census join and its mapping into [`StudentRecord`]s.
//!
//! Every specialty table is LEFT JOINed onto `StudentDemographics`, so a
//! student with no row in, say, `SocialActivity` still produces a record;
//! its social activity fields come back as NULL and map to `None`.

use crate::Database;
use census_model::{BirthMonth, Gender, StudentRecord};
use rusqlite::types::Type;
use rusqlite::{Connection, Row};

/// The one query the dashboard runs.
pub const STUDENT_RECORDS_QUERY: &str = "
    SELECT
        StudentDemographics.StudentID,
        StudentDemographics.Region,
        StudentDemographics.Gender,
        StudentDemographics.AgeSurveyed,
        StudentDemographics.YearSurveyed,
        StudentDemographics.BirthMonth,
        BodySpecifics.Height,
        BodySpecifics.Armspan,
        HomeLife.HrsSpentWithFamily,
        HomeLife.HrsChores,
        MiscPreferences.MemoryGameScore,
        SocialActivity.HrsGames,
        SocialActivity.HrsSocialMedia,
        WorldIssues.AcademicPressure
    FROM StudentDemographics

    LEFT JOIN BodySpecifics
    ON BodySpecifics.StudentDemographics_StudentID = StudentDemographics.StudentID

    LEFT JOIN HomeLife
    ON HomeLife.StudentDemographics_StudentID = StudentDemographics.StudentID

    LEFT JOIN MiscPreferences
    ON MiscPreferences.StudentDemographics_StudentID = StudentDemographics.StudentID

    LEFT JOIN SocialActivity
    ON SocialActivity.StudentDemographics_StudentID = StudentDemographics.StudentID

    LEFT JOIN WorldIssues
    ON WorldIssues.StudentDemographics_StudentID = StudentDemographics.StudentID

    ORDER BY StudentDemographics.StudentID, StudentDemographics.YearSurveyed";

impl Database {
    /// Run the census join against this database.
    pub fn query_student_records(&self) -> anyhow::Result<Vec<StudentRecord>> {
        let rows = query_student_records(&self.conn.borrow())?;
        Ok(rows)
    }
}

/// Run the census join on any open connection.
pub fn query_student_records(conn: &Connection) -> rusqlite::Result<Vec<StudentRecord>> {
    let mut stmt = conn.prepare(STUDENT_RECORDS_QUERY)?;
    let rows = stmt
        .query_map([], map_student_record)?
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "[Census] query: query_student_records returned {} records",
        rows.len()
    );
    Ok(rows)
}

fn map_student_record(row: &Row<'_>) -> rusqlite::Result<StudentRecord> {
    let month_label: String = row.get(5)?;
    let birth_month = month_label
        .parse::<BirthMonth>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(StudentRecord {
        student_id: row.get(0)?,
        region: row.get(1)?,
        gender: row.get::<_, Option<String>>(2)?.map(Gender),
        age_surveyed: row.get(3)?,
        year_surveyed: row.get(4)?,
        birth_month,
        height: row.get(6)?,
        armspan: row.get(7)?,
        hrs_spent_with_family: row.get(8)?,
        hrs_chores: row.get(9)?,
        memory_game_score: row.get(10)?,
        hrs_games: row.get(11)?,
        hrs_social_media: row.get(12)?,
        academic_pressure: row.get(13)?,
    })
}
