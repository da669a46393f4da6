//! SQL schema definitions for the census tables.
//!
//! One demographics table keyed by `StudentID`, and five specialty tables
//! that reference it through a `StudentDemographics_StudentID` column.
//! The schema is applied as a single batch when an in-memory database is
//! created.

/// Names of the six source tables, demographics first.
pub const TABLES: [&str; 6] = [
    "StudentDemographics",
    "BodySpecifics",
    "HomeLife",
    "MiscPreferences",
    "SocialActivity",
    "WorldIssues",
];

/// Returns the full SQL schema as a single batch string.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS StudentDemographics (
        StudentID INTEGER PRIMARY KEY,
        Region TEXT,
        Gender TEXT,
        AgeSurveyed INTEGER NOT NULL,
        YearSurveyed INTEGER NOT NULL,
        BirthMonth TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS BodySpecifics (
        StudentDemographics_StudentID INTEGER NOT NULL REFERENCES StudentDemographics(StudentID),
        Height REAL,
        Armspan REAL,
        FootLength REAL
    );
    CREATE INDEX IF NOT EXISTS idx_body_student ON BodySpecifics(StudentDemographics_StudentID);

    CREATE TABLE IF NOT EXISTS HomeLife (
        StudentDemographics_StudentID INTEGER NOT NULL REFERENCES StudentDemographics(StudentID),
        HrsSpentWithFamily REAL,
        HrsChores REAL,
        HouseholdSize INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_home_student ON HomeLife(StudentDemographics_StudentID);

    CREATE TABLE IF NOT EXISTS MiscPreferences (
        StudentDemographics_StudentID INTEGER NOT NULL REFERENCES StudentDemographics(StudentID),
        MemoryGameScore REAL,
        FavoriteSeason TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_misc_student ON MiscPreferences(StudentDemographics_StudentID);

    CREATE TABLE IF NOT EXISTS SocialActivity (
        StudentDemographics_StudentID INTEGER NOT NULL REFERENCES StudentDemographics(StudentID),
        HrsGames REAL,
        HrsSocialMedia REAL
    );
    CREATE INDEX IF NOT EXISTS idx_social_student ON SocialActivity(StudentDemographics_StudentID);

    CREATE TABLE IF NOT EXISTS WorldIssues (
        StudentDemographics_StudentID INTEGER NOT NULL REFERENCES StudentDemographics(StudentID),
        AcademicPressure REAL,
        ClimateConcern REAL
    );
    CREATE INDEX IF NOT EXISTS idx_world_student ON WorldIssues(StudentDemographics_StudentID);
    "#
}
