//! SQLite persistence for diet and workout plans.
//!
//! This module owns the connection handling, schema management and the plan
//! queries. Both plan kinds share one set of queries; [`PlanKind`] selects the
//! table.
//!
//! [`PlanKind`]: crate::models::PlanKind

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;

/// How long a connection waits for a competing writer before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Like [`Database::new`], with an explicit busy timeout.
    pub fn with_busy_timeout<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let db = Self::connect(path, busy_timeout)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a connection to an already initialized database without touching
    /// the schema.
    pub fn connect<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(busy_timeout)
            .db_context("Failed to set busy timeout")?;

        Ok(Self { connection })
    }
}
