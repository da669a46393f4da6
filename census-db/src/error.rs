//! Error types for loading the census table.

use thiserror::Error;

/// Boxed underlying cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a [`DataSource`](crate::DataSource) could not produce the table.
///
/// Both variants are fatal at startup; nothing retries.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The store could not be reached: missing database, unreadable path,
    /// or an unusable connection configuration.
    #[error("cannot connect to census store {target}: {source}")]
    Connection {
        target: String,
        #[source]
        source: BoxError,
    },

    /// The store was reached but the join could not be run or mapped
    /// (schema drift, malformed rows).
    #[error("census query failed while {context}: {source}")]
    Query {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl DataSourceError {
    pub fn connection(target: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Connection {
            target: target.into(),
            source: source.into(),
        }
    }

    pub fn query(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Query {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. })
    }

    /// Short name of the failure class, for the startup error box.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::Query { .. } => "query",
        }
    }
}
