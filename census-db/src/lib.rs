//! SQLite data source for the student census dashboard.
//!
//! The census lives in six tables: `StudentDemographics` plus five
//! specialty tables keyed on `StudentDemographics_StudentID`. This crate
//! runs the one fixed LEFT JOIN across them and hands back a
//! [`RawTable`](census_model::RawTable).
//!
//! # Architecture
//!
//! - [`DataSource`] is the seam a session loads through, once.
//! - [`SqliteStore`] opens an on-disk database read-only using a
//!   [`StoreConfig`].
//! - [`SnapshotStore`] builds an in-memory database from CSV snapshots of
//!   the six tables (embedded with `include_str!` in the web app) and runs
//!   the same join.
//! - [`CensusSource`] picks between the two from `CENSUS_DB_PATH`.
//! - [`Database`] is the in-memory SQLite wrapper with per-table CSV
//!   loaders, using `Rc<RefCell<Connection>>` for single-threaded WASM.
//!
//! # Usage
//!
//! ```rust
//! use census_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_student_demographics(
//!     "StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth\n1,NY,Male,15,2012,January\n",
//! )
//! .unwrap();
//! let records = db.query_student_records().unwrap();
//! assert_eq!(records.len(), 1);
//! assert!(records[0].height.is_none());
//! ```

pub mod config;
pub mod error;
mod loader;
pub mod queries;
pub mod schema;
pub mod source;

pub use config::StoreConfig;
pub use error::DataSourceError;
pub use source::{CensusSource, DataSource, Snapshot, SnapshotStore, SqliteStore};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the six census tables.
///
/// Cheaply cloneable (via `Rc`); clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
