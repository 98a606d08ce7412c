//! Time-window child rows
//!
//! Jobs, shipments and breaks own a set of time windows kept in a separate
//! relation. The set travels on the record as a collection field; the compiler
//! leaves it out of the parent statement and the store writes the child rows in
//! the same transaction as the parent.

use super::bind::bind_args;
use super::core::ResourceStore;
use super::crud::{
    fetch_records, insert_record, owner_column, read_sql, soft_delete_record, update_record,
};
use crate::compiler::{select_list, window_insert_sql, window_select_list, PartialSql};
use crate::errors::ResourceError;
use crate::field::Resource;
use chrono::NaiveDateTime;
use serde_json::Value;
use sqlx::PgConnection;

/// One child time-window row
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRow {
    /// `p` or `d` for shipment windows, `None` elsewhere
    pub kind: Option<String>,
    pub tw_open: NaiveDateTime,
    pub tw_close: NaiveDateTime,
}

/// A time-window collection field as read back from the child relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGroup {
    /// Public field the windows are returned under
    pub field: &'static str,
    /// Only child rows of this `kind`; every row when `None`
    pub kind: Option<&'static str>,
}

impl WindowGroup {
    pub const fn all(field: &'static str) -> Self {
        Self { field, kind: None }
    }

    pub const fn of_kind(field: &'static str, kind: &'static str) -> Self {
        Self {
            field,
            kind: Some(kind),
        }
    }
}

/// A record that carries a time-window collection
pub trait WindowedRecord: Resource {
    /// Relation holding the windows, keyed by the owner's id
    const WINDOW_TABLE: &'static str;

    /// Collection fields rebuilt from the child relation on reads
    const WINDOW_GROUPS: &'static [WindowGroup];

    /// The windows on this payload, `None` when the payload does not mention them
    fn window_rows(&self) -> Option<Vec<WindowRow>>;
}

async fn insert_windows(
    conn: &mut PgConnection,
    table: &str,
    owner_id: i64,
    rows: &[WindowRow],
) -> Result<(), ResourceError> {
    let Some(PartialSql { sql, args }) = window_insert_sql(table, owner_id, rows) else {
        return Ok(());
    };
    debug_log!("[WINDOWS] SQL: {}", sql);

    bind_args(sqlx::query(&sql), args)?
        .execute(&mut *conn)
        .await
        .map_err(|e| ResourceError::from_db(table, e))?;
    Ok(())
}

async fn delete_windows(
    conn: &mut PgConnection,
    table: &str,
    owner_id: i64,
) -> Result<u64, ResourceError> {
    let sql = format!("DELETE FROM {} WHERE id = $1", table);
    let result = sqlx::query(&sql)
        .bind(owner_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| ResourceError::from_db(table, e))?;
    Ok(result.rows_affected())
}

fn windowed_columns<R: WindowedRecord>() -> String {
    let columns = select_list::<R>();
    if R::WINDOW_GROUPS.is_empty() {
        return columns;
    }
    format!(
        "{}, {}",
        columns,
        window_select_list(R::TABLE, R::WINDOW_TABLE, R::WINDOW_GROUPS)
    )
}

impl<R: WindowedRecord> ResourceStore<R> {
    /// Insert the record and its windows atomically
    pub async fn create_with_windows(&self, record: &R) -> Result<i64, ResourceError> {
        let mut tx = self.db_pool.begin().await.map_err(|e| {
            ResourceError::DatabaseError(format!("Failed to begin transaction: {}", e))
        })?;

        let id = insert_record(&mut tx, record).await?;
        if let Some(rows) = record.window_rows() {
            insert_windows(&mut tx, R::WINDOW_TABLE, id, &rows).await?;
        }

        tx.commit().await.map_err(|e| {
            ResourceError::DatabaseError(format!("Failed to commit transaction: {}", e))
        })?;
        Ok(id)
    }

    /// Patch the record and, when the payload carries windows, replace them.
    ///
    /// Replacement covers the whole child relation of the record. For a
    /// shipment, a payload with only `p_time_windows` also deletes the stored
    /// delivery windows; send both sides to keep one of them.
    pub async fn update_with_windows(&self, id: i64, record: &R) -> Result<i64, ResourceError> {
        let mut tx = self.db_pool.begin().await.map_err(|e| {
            ResourceError::DatabaseError(format!("Failed to begin transaction: {}", e))
        })?;

        let id = update_record(&mut tx, id, record).await?;
        if let Some(rows) = record.window_rows() {
            delete_windows(&mut tx, R::WINDOW_TABLE, id).await?;
            insert_windows(&mut tx, R::WINDOW_TABLE, id, &rows).await?;
        }

        tx.commit().await.map_err(|e| {
            ResourceError::DatabaseError(format!("Failed to commit transaction: {}", e))
        })?;
        Ok(id)
    }

    /// Append windows to an existing record
    pub async fn add_windows(&self, id: i64, rows: &[WindowRow]) -> Result<(), ResourceError> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .map_err(|e| ResourceError::from_db(R::WINDOW_TABLE, e))?;
        insert_windows(&mut conn, R::WINDOW_TABLE, id, rows).await
    }

    /// Remove every window of a record, returning how many were removed
    pub async fn clear_windows(&self, id: i64) -> Result<u64, ResourceError> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .map_err(|e| ResourceError::from_db(R::WINDOW_TABLE, e))?;
        delete_windows(&mut conn, R::WINDOW_TABLE, id).await
    }

    /// Read a record back with its windows
    pub async fn get_with_windows(&self, id: i64) -> Result<Option<Value>, ResourceError> {
        let sql = read_sql(R::TABLE, &windowed_columns::<R>(), "id");
        debug_log!("[GET] SQL: {}", sql);

        let records = fetch_records::<R>(&self.db_pool, &sql, id).await?;
        Ok(records.into_iter().next())
    }

    /// Every live record whose `owner` field equals `owner_id`, with windows,
    /// oldest first
    pub async fn list_with_windows_by(
        &self,
        owner: &str,
        owner_id: i64,
    ) -> Result<Vec<Value>, ResourceError> {
        let sql = read_sql(R::TABLE, &windowed_columns::<R>(), owner_column::<R>(owner)?);
        debug_log!("[LIST] SQL: {}", sql);

        fetch_records::<R>(&self.db_pool, &sql, owner_id).await
    }

    /// Soft delete the record and drop its windows atomically
    pub async fn delete_with_windows(&self, id: i64) -> Result<bool, ResourceError> {
        let mut tx = self.db_pool.begin().await.map_err(|e| {
            ResourceError::DatabaseError(format!("Failed to begin transaction: {}", e))
        })?;

        let deleted = soft_delete_record::<R>(&mut tx, id).await?;
        if deleted {
            delete_windows(&mut tx, R::WINDOW_TABLE, id).await?;
        }

        tx.commit().await.map_err(|e| {
            ResourceError::DatabaseError(format!("Failed to commit transaction: {}", e))
        })?;
        Ok(deleted)
    }
}
