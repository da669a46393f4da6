//! Core types for the student census dashboard.
//!
//! A [`StudentRecord`] is one row of the joined census table: the
//! demographic columns that every student has, plus the specialty columns
//! pulled in from the body, home life, preference, social and world issues
//! sub-tables. Those may be missing when a sub-table has no row for the
//! student.
//!
//! [`RawTable`] is the ordered, load-once collection of records and
//! [`Field`] names every column a chart can bind to.

pub mod birth_month;
pub mod field;
pub mod raw_table;
pub mod student;

pub use birth_month::BirthMonth;
pub use field::Field;
pub use raw_table::RawTable;
pub use student::{Gender, StudentRecord};
