//! Create, read, update and soft delete for any [`Resource`].

use super::bind::bind_args;
use super::core::{ResourceStore, StoreObject};
use crate::compiler::{insert_sql, select_list, update_sql, PartialSql};
use crate::errors::ResourceError;
use crate::field::{FieldKind, Resource};
use crate::introspect::introspect;
use crate::location::Location;
use crate::policy;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgConnection, PgPool, Row};

/// Insert the present fields of `record` and return the new id
pub(crate) async fn insert_record<R: Resource>(
    conn: &mut PgConnection,
    record: &R,
) -> Result<i64, ResourceError> {
    let PartialSql { sql, args } = insert_sql(R::TABLE, &introspect(record)).returning("id");
    debug_log!("[CREATE] Table: {}", R::TABLE);
    debug_log!("[CREATE] SQL: {}", sql);
    debug_log!("[CREATE] params count: {}", args.len());

    let row = bind_args(sqlx::query(&sql), args)?
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| ResourceError::from_db(R::TABLE, e))?;

    row.try_get::<i64, _>("id")
        .map_err(|e| ResourceError::from_db(R::TABLE, e))
}

/// Patch the present fields of `record` onto row `id`
pub(crate) async fn update_record<R: Resource>(
    conn: &mut PgConnection,
    id: i64,
    record: &R,
) -> Result<i64, ResourceError> {
    let PartialSql { sql, args } = update_sql(R::TABLE, &introspect(record), id).returning("id");
    debug_log!("[UPDATE] Table: {}", R::TABLE);
    debug_log!("[UPDATE] SQL: {}", sql);
    debug_log!("[UPDATE] params count: {}", args.len());

    let row = bind_args(sqlx::query(&sql), args)?
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| ResourceError::from_db(R::TABLE, e))?
        .ok_or_else(|| ResourceError::NotFound(format!("{} with id {}", R::TABLE, id)))?;

    row.try_get::<i64, _>("id")
        .map_err(|e| ResourceError::from_db(R::TABLE, e))
}

/// Soft delete row `id`; `false` when it was missing or already deleted
pub(crate) async fn soft_delete_record<R: Resource>(
    conn: &mut PgConnection,
    id: i64,
) -> Result<bool, ResourceError> {
    let sql = format!(
        "UPDATE {} SET deleted = TRUE WHERE id = $1 AND deleted = FALSE RETURNING id",
        R::TABLE
    );
    debug_log!("[DELETE] SQL: {}", sql);

    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| ResourceError::from_db(R::TABLE, e))?;
    Ok(row.is_some())
}

/// Read query over live rows of `relation` where `filter` equals `$1`.
///
/// Each row comes back as one JSON object in a `record` column, oldest first.
pub(crate) fn read_sql(relation: &str, columns: &str, filter: &str) -> String {
    format!(
        "SELECT to_jsonb(r) AS record FROM (SELECT {} FROM {} WHERE {} = $1 AND deleted = FALSE) r \
         ORDER BY r.created_at, r.id",
        columns, relation, filter
    )
}

/// Physical column a list read may filter on
pub(crate) fn owner_column<R: Resource>(owner: &str) -> Result<&'static str, ResourceError> {
    match R::field(owner) {
        Some(spec) if !spec.collection && spec.kind == FieldKind::Scalar => Ok(spec.name),
        _ => Err(ResourceError::UnknownField(format!(
            "{} has no scalar field '{}'",
            R::TABLE,
            owner
        ))),
    }
}

pub(crate) async fn fetch_records<R: Resource>(
    pool: &PgPool,
    sql: &str,
    value: i64,
) -> Result<Vec<Value>, ResourceError> {
    let rows = sqlx::query(sql)
        .bind(value)
        .fetch_all(pool)
        .await
        .map_err(|e| ResourceError::from_db(R::TABLE, e))?;

    rows.into_iter()
        .map(|row| {
            let mut record: Value = row
                .try_get("record")
                .map_err(|e| ResourceError::SerializationError(e.to_string()))?;
            restore_public_fields(&mut record);
            Ok(record)
        })
        .collect()
}

/// Replace aliased key columns by their public name and decoded location
pub(crate) fn restore_public_fields(record: &mut Value) {
    let Value::Object(map) = record else {
        return;
    };

    let keyed: Vec<String> = map
        .keys()
        .filter(|column| policy::public_name_for(column).is_some())
        .cloned()
        .collect();

    for column in keyed {
        let Some(public) = policy::public_name_for(&column) else {
            continue;
        };
        let restored = match map.remove(&column) {
            Some(Value::Number(key)) => match key.as_i64() {
                Some(key) => serde_json::to_value(Location::from_key(key)).unwrap_or(Value::Null),
                None => Value::Null,
            },
            _ => Value::Null,
        };
        map.insert(public.to_string(), restored);
    }
}

#[async_trait]
impl<R: Resource> StoreObject for ResourceStore<R> {
    type Record = R;

    async fn create(&self, record: &R) -> Result<i64, ResourceError> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .map_err(|e| ResourceError::from_db(R::TABLE, e))?;
        insert_record(&mut conn, record).await
    }

    async fn get(&self, id: i64) -> Result<Option<Value>, ResourceError> {
        let sql = read_sql(R::TABLE, &select_list::<R>(), "id");
        debug_log!("[GET] SQL: {}", sql);

        let records = fetch_records::<R>(&self.db_pool, &sql, id).await?;
        Ok(records.into_iter().next())
    }

    async fn update(&self, id: i64, record: &R) -> Result<i64, ResourceError> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .map_err(|e| ResourceError::from_db(R::TABLE, e))?;
        update_record(&mut conn, id, record).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ResourceError> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .map_err(|e| ResourceError::from_db(R::TABLE, e))?;
        soft_delete_record::<R>(&mut conn, id).await
    }
}

impl<R: Resource> ResourceStore<R> {
    /// Every live record whose `owner` field equals `owner_id`, oldest first
    pub async fn list_by(&self, owner: &str, owner_id: i64) -> Result<Vec<Value>, ResourceError> {
        let sql = read_sql(R::TABLE, &select_list::<R>(), owner_column::<R>(owner)?);
        debug_log!("[LIST] SQL: {}", sql);

        fetch_records::<R>(&self.db_pool, &sql, owner_id).await
    }
}
