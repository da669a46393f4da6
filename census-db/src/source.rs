//! Data sources that produce the joined census table.
//!
//! A session calls [`DataSource::fetch`] exactly once. Each implementation
//! opens its own connection inside `fetch` and lets it drop before
//! returning, so the connection is released on every path, failures
//! included.

use crate::queries::query_student_records;
use crate::config::ENV_DB_PATH;
use crate::{Database, DataSourceError, StoreConfig};
use census_model::RawTable;
use rusqlite::{Connection, OpenFlags};

/// Something that can load the census table once.
pub trait DataSource {
    /// Human-readable description for logs and error messages.
    fn describe(&self) -> String;

    /// Open a connection, run the census join and return every row.
    fn fetch(&self) -> Result<RawTable, DataSourceError>;
}

/// Reads the census from an on-disk SQLite database, opened read-only.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    config: StoreConfig,
}

impl SqliteStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn connect(&self) -> Result<Connection, DataSourceError> {
        let target = self.describe();
        let conn = Connection::open_with_flags(
            &self.config.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| DataSourceError::connection(target.clone(), e))?;
        conn.busy_timeout(self.config.busy_timeout())
            .map_err(|e| DataSourceError::connection(target, e))?;
        Ok(conn)
    }
}

impl DataSource for SqliteStore {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.config.path.display())
    }

    fn fetch(&self) -> Result<RawTable, DataSourceError> {
        log::info!("[Census] source: connecting to {}", self.describe());
        let conn = self.connect()?;
        let records = query_student_records(&conn)
            .map_err(|e| DataSourceError::query("running the census join", e))?;
        drop(conn);
        log::info!("[Census] source: connection to {} released", self.describe());
        Ok(RawTable::new(records))
    }
}

/// The six source tables as CSV text, in the loader's formats.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub student_demographics: &'a str,
    pub body_specifics: &'a str,
    pub home_life: &'a str,
    pub misc_preferences: &'a str,
    pub social_activity: &'a str,
    pub world_issues: &'a str,
}

/// Serves the census from CSV snapshots of the source tables.
///
/// Every `fetch` builds a fresh in-memory SQLite database from the
/// snapshot and runs the same join an on-disk store would. This is what the
/// browser build uses, since no database file is reachable from WASM.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotStore<'a> {
    snapshot: Snapshot<'a>,
}

impl<'a> SnapshotStore<'a> {
    pub fn new(snapshot: Snapshot<'a>) -> Self {
        Self { snapshot }
    }
}

impl DataSource for SnapshotStore<'_> {
    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }

    fn fetch(&self) -> Result<RawTable, DataSourceError> {
        let db = Database::new().map_err(|e| DataSourceError::connection(self.describe(), e))?;

        let s = &self.snapshot;
        let loads: [(&str, &str, fn(&Database, &str) -> anyhow::Result<usize>); 6] = [
            ("StudentDemographics", s.student_demographics, Database::load_student_demographics),
            ("BodySpecifics", s.body_specifics, Database::load_body_specifics),
            ("HomeLife", s.home_life, Database::load_home_life),
            ("MiscPreferences", s.misc_preferences, Database::load_misc_preferences),
            ("SocialActivity", s.social_activity, Database::load_social_activity),
            ("WorldIssues", s.world_issues, Database::load_world_issues),
        ];
        for (table, csv_data, load) in loads {
            load(&db, csv_data)
                .map_err(|e| DataSourceError::query(format!("loading {}", table), e))?;
        }

        let records = db
            .query_student_records()
            .map_err(|e| DataSourceError::query("running the census join", e))?;
        Ok(RawTable::new(records))
    }
}

/// The store a dashboard process loads from: the configured database when
/// one is named, otherwise the embedded snapshot.
#[derive(Debug, Clone)]
pub enum CensusSource<'a> {
    Store(SqliteStore),
    Snapshot(SnapshotStore<'a>),
}

impl<'a> CensusSource<'a> {
    /// Pick the source from the process environment.
    pub fn from_env(snapshot: Snapshot<'a>) -> Result<Self, DataSourceError> {
        Self::from_lookup(|key| std::env::var(key).ok(), snapshot)
    }

    /// Pick the source from a key lookup.
    ///
    /// Without `CENSUS_DB_PATH` the snapshot is served. Once the path is
    /// named, a bad setting is a connection error rather than a silent
    /// fallback to the snapshot.
    pub fn from_lookup<F>(lookup: F, snapshot: Snapshot<'a>) -> Result<Self, DataSourceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup(ENV_DB_PATH).is_none() {
            return Ok(Self::Snapshot(SnapshotStore::new(snapshot)));
        }
        let config = StoreConfig::from_lookup(lookup)?;
        Ok(Self::Store(SqliteStore::new(config)))
    }

    /// True when reading the embedded snapshot.
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot(_))
    }
}

impl DataSource for CensusSource<'_> {
    fn describe(&self) -> String {
        match self {
            Self::Store(store) => store.describe(),
            Self::Snapshot(snapshot) => snapshot.describe(),
        }
    }

    fn fetch(&self) -> Result<RawTable, DataSourceError> {
        match self {
            Self::Store(store) => store.fetch(),
            Self::Snapshot(snapshot) => snapshot.fetch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_model::BirthMonth;
    use std::path::Path;

    const DEMOGRAPHICS: &str = "StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth\n\
                                1,NY,Male,15,2012,January\n\
                                2,TX,Female,10,2016,February\n";
    const BODY: &str = "StudentDemographics_StudentID,Height,Armspan,FootLength\n1,170,168,25\n";
    const HOME: &str = "StudentDemographics_StudentID,HrsSpentWithFamily,HrsChores,HouseholdSize\n";
    const MISC: &str = "StudentDemographics_StudentID,MemoryGameScore,FavoriteSeason\n";
    const SOCIAL: &str = "StudentDemographics_StudentID,HrsGames,HrsSocialMedia\n2,3,9\n";
    const WORLD: &str = "StudentDemographics_StudentID,AcademicPressure,ClimateConcern\n";

    fn snapshot() -> Snapshot<'static> {
        Snapshot {
            student_demographics: DEMOGRAPHICS,
            body_specifics: BODY,
            home_life: HOME,
            misc_preferences: MISC,
            social_activity: SOCIAL,
            world_issues: WORLD,
        }
    }

    /// Write a database file with the census schema and sample rows.
    fn write_store(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(crate::schema::create_schema()).unwrap();
        conn.execute_batch(
            "INSERT INTO StudentDemographics VALUES (1, 'NY', 'Male', 15, 2012, 'January');
             INSERT INTO StudentDemographics VALUES (2, 'TX', 'Female', 10, 2016, 'February');
             INSERT INTO BodySpecifics VALUES (1, 170.0, 168.0, 25.0);",
        )
        .unwrap();
    }

    #[test]
    fn snapshot_store_fetches_joined_rows() {
        let table = SnapshotStore::new(snapshot()).fetch().unwrap();
        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.birth_month, BirthMonth::January);
        assert_eq!(first.height, Some(170.0));
        assert_eq!(first.hrs_games, None);
        let second = &table.records()[1];
        assert_eq!(second.height, None);
        assert_eq!(second.hrs_games, Some(3.0));
    }

    #[test]
    fn snapshot_with_schema_drift_is_a_query_error() {
        let mut drifted = snapshot();
        drifted.home_life = "StudentDemographics_StudentID,HoursAsleep\n1,8\n";
        let err = SnapshotStore::new(drifted).fetch().unwrap_err();
        assert!(err.is_query(), "{}", err);
        assert!(err.to_string().contains("HomeLife"));
    }

    #[test]
    fn sqlite_store_reads_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("census.db");
        write_store(&path);

        let table = SqliteStore::new(StoreConfig::new(&path)).fetch().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].armspan, Some(168.0));
        assert_eq!(table.records()[1].armspan, None);
    }

    #[test]
    fn sqlite_store_missing_file_is_a_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(StoreConfig::new(dir.path().join("absent.db")));
        let err = store.fetch().unwrap_err();
        assert!(err.is_connection(), "{}", err);
        assert!(!dir.path().join("absent.db").exists(), "read-only open must not create the file");
    }

    #[test]
    fn sqlite_store_without_schema_is_a_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE Unrelated (id INTEGER);")
            .unwrap();

        let err = SqliteStore::new(StoreConfig::new(&path)).fetch().unwrap_err();
        assert!(err.is_query(), "{}", err);
    }

    fn env(pairs: &[(&'static str, String)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn census_source_defaults_to_snapshot() {
        let source = CensusSource::from_lookup(env(&[]), snapshot()).unwrap();
        assert!(source.is_snapshot());
        assert_eq!(source.describe(), "in-memory snapshot");
        assert_eq!(source.fetch().unwrap().len(), 2);
    }

    #[test]
    fn census_source_opens_configured_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("census.db");
        write_store(&path);

        let lookup = env(&[
            (ENV_DB_PATH, path.display().to_string()),
            (crate::config::ENV_BUSY_TIMEOUT_MS, "250".to_string()),
        ]);
        let source = CensusSource::from_lookup(lookup, snapshot()).unwrap();
        let CensusSource::Store(store) = &source else {
            panic!("expected the configured store, got {:?}", source);
        };
        assert_eq!(store.config().busy_timeout_ms, 250);
        assert_eq!(source.fetch().unwrap().records()[0].armspan, Some(168.0));
    }

    #[test]
    fn census_source_rejects_bad_settings() {
        let lookup = env(&[
            (ENV_DB_PATH, "census.db".to_string()),
            (crate::config::ENV_BUSY_TIMEOUT_MS, "soon".to_string()),
        ]);
        let err = CensusSource::from_lookup(lookup, snapshot()).unwrap_err();
        assert!(err.is_connection(), "{}", err);
    }

    #[test]
    fn sqlite_store_describes_its_path() {
        let store = SqliteStore::new(StoreConfig::new("census.db"));
        assert_eq!(store.describe(), "sqlite:census.db");
    }
}
