//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Every fixture file has a header row whose names match the table's
//! columns. Empty cells (and the literal markers `NA` / `NULL`) are stored as
//! SQL NULL, which is how a sub-table records "no answer" for a student.
//!
//! # CSV Formats
//!
//! - **StudentDemographics**: `StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth`
//! - **BodySpecifics**: `StudentDemographics_StudentID,Height,Armspan,FootLength`
//! - **HomeLife**: `StudentDemographics_StudentID,HrsSpentWithFamily,HrsChores,HouseholdSize`
//! - **MiscPreferences**: `StudentDemographics_StudentID,MemoryGameScore,FavoriteSeason`
//! - **SocialActivity**: `StudentDemographics_StudentID,HrsGames,HrsSocialMedia`
//! - **WorldIssues**: `StudentDemographics_StudentID,AcademicPressure,ClimateConcern`

use crate::Database;
use anyhow::Context;
use rusqlite::{params_from_iter, Connection};

impl Database {
    /// Load the demographics table (one row per student survey).
    ///
    /// # Example CSV
    /// ```text
    /// StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth
    /// 1,NY,Male,15,2012,January
    /// ```
    pub fn load_student_demographics(&self, csv_data: &str) -> anyhow::Result<usize> {
        load_table(&self.conn.borrow(), "StudentDemographics", csv_data)
    }

    /// Load body measurements (`Height`, `Armspan`, ...).
    pub fn load_body_specifics(&self, csv_data: &str) -> anyhow::Result<usize> {
        load_table(&self.conn.borrow(), "BodySpecifics", csv_data)
    }

    /// Load home life answers (`HrsSpentWithFamily`, `HrsChores`, ...).
    pub fn load_home_life(&self, csv_data: &str) -> anyhow::Result<usize> {
        load_table(&self.conn.borrow(), "HomeLife", csv_data)
    }

    /// Load miscellaneous preferences (`MemoryGameScore`, ...).
    pub fn load_misc_preferences(&self, csv_data: &str) -> anyhow::Result<usize> {
        load_table(&self.conn.borrow(), "MiscPreferences", csv_data)
    }

    /// Load social activity answers (`HrsGames`, `HrsSocialMedia`).
    pub fn load_social_activity(&self, csv_data: &str) -> anyhow::Result<usize> {
        load_table(&self.conn.borrow(), "SocialActivity", csv_data)
    }

    /// Load world issue answers (`AcademicPressure`, ...).
    pub fn load_world_issues(&self, csv_data: &str) -> anyhow::Result<usize> {
        load_table(&self.conn.borrow(), "WorldIssues", csv_data)
    }
}

/// Insert every CSV row into `table`, using the header row as column list.
///
/// Returns the number of rows inserted. Unknown column names surface as a
/// prepare error from SQLite.
fn load_table(conn: &Connection, table: &str, csv_data: &str) -> anyhow::Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() || columns.iter().any(|c| c.is_empty()) {
        anyhow::bail!("{}: CSV header row is missing or has blank column names", table);
    }

    let placeholders = (1..=columns.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    );

    let tx = conn.unchecked_transaction()?;
    let mut count = 0usize;
    {
        let mut stmt = tx
            .prepare(&sql)
            .with_context(|| format!("{}: columns {:?} do not match the schema", table, columns))?;
        for (line, result) in rdr.records().enumerate() {
            let r = result.with_context(|| format!("{}: malformed CSV row {}", table, line + 2))?;
            let values = r.iter().map(null_if_blank);
            stmt.execute(params_from_iter(values))
                .with_context(|| format!("{}: failed to insert CSV row {}", table, line + 2))?;
            count += 1;
        }
    }
    tx.commit()?;

    log::info!("[Census] loader: Loaded {} rows into {}", count, table);
    Ok(count)
}

fn null_if_blank(cell: &str) -> Option<&str> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("NA") || cell.eq_ignore_ascii_case("NULL") {
        None
    } else {
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn count(db: &Database, table: &str) -> i64 {
        db.conn
            .borrow()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn loads_demographics() {
        let db = Database::new().unwrap();
        let n = db
            .load_student_demographics(
                "StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth\n\
                 1,NY,Male,15,2012,January\n\
                 2,TX,Female,10,2016,February\n",
            )
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(count(&db, "StudentDemographics"), 2);
    }

    #[test]
    fn blank_cells_become_null() {
        let db = Database::new().unwrap();
        db.load_social_activity(
            "StudentDemographics_StudentID,HrsGames,HrsSocialMedia\n1,,4.5\n2,NA,1\n",
        )
        .unwrap();
        let nulls: i64 = db
            .conn
            .borrow()
            .query_row(
                "SELECT COUNT(*) FROM SocialActivity WHERE HrsGames IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 2);
    }

    #[test]
    fn numeric_text_is_stored_as_real() {
        let db = Database::new().unwrap();
        db.load_body_specifics("StudentDemographics_StudentID,Height,Armspan,FootLength\n1, 160.5 ,158,24\n")
            .unwrap();
        let height: f64 = db
            .conn
            .borrow()
            .query_row("SELECT Height FROM BodySpecifics", [], |row| row.get(0))
            .unwrap();
        assert!((height - 160.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let db = Database::new().unwrap();
        let err = db
            .load_home_life("StudentDemographics_StudentID,HoursAsleep\n1,8\n")
            .unwrap_err();
        assert!(err.to_string().contains("HomeLife"), "{}", err);
        assert_eq!(count(&db, "HomeLife"), 0);
    }

    #[test]
    fn missing_required_demographic_is_rejected() {
        let db = Database::new().unwrap();
        let result = db.load_student_demographics(
            "StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth\n1,NY,Male,,2012,January\n",
        );
        assert!(result.is_err(), "AgeSurveyed is NOT NULL");
    }

    #[test]
    fn header_only_csv_loads_nothing() {
        let db = Database::new().unwrap();
        let n = db
            .load_world_issues("StudentDemographics_StudentID,AcademicPressure,ClimateConcern\n")
            .unwrap();
        assert_eq!(n, 0);
    }
}
