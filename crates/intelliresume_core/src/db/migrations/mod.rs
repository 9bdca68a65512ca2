//! Schema steps for the key-value store database.
//!
//! Each step is a SQL script plus the `user_version` it leaves behind.
//! Steps run in one transaction, so a failed upgrade leaves the previous
//! schema in place.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    label: &'static str,
    sql: &'static str,
}

const STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    label: "kv_entries",
    sql: include_str!("0001_init.sql"),
}];

/// Highest schema version this build can write.
pub fn latest_version() -> u32 {
    STEPS.iter().map(|step| step.version).max().unwrap_or(0)
}

/// Brings `conn` up to [`latest_version`].
///
/// Fails with [`DbError::UnsupportedSchemaVersion`] when the file is newer
/// than this build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = stored_version(conn)?;
    let to = latest_version();

    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    let mut steps = STEPS.iter().filter(|step| step.version > from).peekable();
    if steps.peek().is_none() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in steps {
        debug!(
            "event=db_migrate_step module=db version={} label={}",
            step.version, step.label
        );
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from} to_version={to}");
    Ok(())
}

fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
