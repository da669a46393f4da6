//! Filter state and filtered views over the student census table.
//!
//! The dashboard narrows the loaded [`RawTable`](census_model::RawTable)
//! by two controls: which birth months are selected, and an inclusive
//! range of surveyed ages. [`filter::apply`] is the pure function from
//! (table, selection) to a [`FilteredTable`].

pub mod filter;

pub use filter::{apply, initialize, AgeRange, FilterSelection, FilteredTable};
