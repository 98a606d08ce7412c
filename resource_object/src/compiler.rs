//! Partial SQL compiler
//!
//! Turns a [`PartialRecord`] into statement text and the matching positional
//! arguments. Nothing here touches the database and nothing here fails: any
//! error shows up when the caller executes the statement. Appending a
//! `RETURNING` clause is also the caller's job.

use crate::field::Resource;
use crate::introspect::PartialRecord;
use crate::policy;
use crate::store::{WindowGroup, WindowRow};
use type_mapping::PostgresValue;

/// Statement text plus arguments in placeholder order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialSql {
    pub sql: String,
    pub args: Vec<PostgresValue>,
}

impl PartialSql {
    /// Append a `RETURNING` clause
    pub fn returning(mut self, columns: &str) -> Self {
        self.sql.push_str(" RETURNING ");
        self.sql.push_str(columns);
        self
    }
}

/// Positional placeholder for a column, cast to a duration for interval fields
fn placeholder(name: &str, index: usize) -> String {
    if policy::is_interval(name) {
        format!("${}::INTERVAL", index)
    } else {
        format!("${}", index)
    }
}

/// Build `INSERT INTO <relation> (<columns>) VALUES (<placeholders>)`.
///
/// Absent fields are left out so column defaults apply. Child collections have
/// no column and are never part of the statement. A record with nothing present
/// inserts `DEFAULT VALUES`.
pub fn insert_sql(relation: &str, record: &PartialRecord) -> PartialSql {
    let mut columns = Vec::with_capacity(record.len());
    let mut values = Vec::with_capacity(record.len());
    let mut args = Vec::with_capacity(record.len());

    for field in record.columns() {
        args.push(field.value.clone());
        columns.push(field.column);
        values.push(placeholder(field.name, args.len()));
    }

    let sql = if columns.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES", relation)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            relation,
            columns.join(", "),
            values.join(", ")
        )
    };

    PartialSql { sql, args }
}

/// Build `UPDATE <relation> SET <column> = <placeholder>, ... WHERE id = <id>`.
///
/// With nothing to assign, the statement still runs as `SET id = id` so callers
/// can rely on the returned row to tell whether the record exists.
pub fn update_sql(relation: &str, record: &PartialRecord, id: i64) -> PartialSql {
    let mut assignments = Vec::with_capacity(record.len());
    let mut args = Vec::with_capacity(record.len());

    for field in record.columns() {
        args.push(field.value.clone());
        assignments.push(format!(
            "{} = {}",
            field.column,
            placeholder(field.name, args.len())
        ));
    }

    if assignments.is_empty() {
        assignments.push("id = id".to_string());
    }

    PartialSql {
        sql: format!(
            "UPDATE {} SET {} WHERE id = {}",
            relation,
            assignments.join(", "),
            id
        ),
        args,
    }
}

/// Column list for reading a resource back.
///
/// Aliased fields are read from their physical column. Interval columns come
/// back as `HH:MM:SS`, timestamp columns as `YYYY-MM-DDTHH:MM:SS`.
pub fn select_list<R: Resource>() -> String {
    let mut columns = vec!["id"];
    for spec in R::FIELDS.iter().filter(|spec| !spec.collection) {
        let column = policy::alias_for(spec.name).unwrap_or(spec.name);
        if !columns.contains(&column) && !policy::is_read_only(column) {
            columns.push(column);
        }
    }
    columns.extend(["created_at", "updated_at"]);

    columns
        .into_iter()
        .map(output_column)
        .collect::<Vec<_>>()
        .join(", ")
}

fn output_column(column: &str) -> String {
    if policy::is_interval(column) {
        format!("to_char({0}, 'HH24:MI:SS') AS {0}", column)
    } else if policy::is_timestamp(column) {
        format!("{} AS {}", timestamp_text(column), column)
    } else {
        column.to_string()
    }
}

fn timestamp_text(expr: &str) -> String {
    format!(
        "to_char({0}, 'YYYY-MM-DD') || 'T' || to_char({0}, 'HH24:MI:SS')",
        expr
    )
}

/// Extra output columns aggregating the time windows of each row of `relation`.
///
/// Every group comes back as a JSON array of `[tw_open, tw_close]` pairs in
/// opening order, `[]` when the owner has none.
pub fn window_select_list(relation: &str, window_table: &str, groups: &[WindowGroup]) -> String {
    groups
        .iter()
        .map(|group| {
            let kind = group
                .kind
                .map(|kind| format!(" AND tw.kind = '{}'", kind))
                .unwrap_or_default();
            format!(
                "COALESCE((SELECT jsonb_agg(jsonb_build_array({}, {}) ORDER BY tw.tw_open, tw.tw_close) \
                 FROM {} tw WHERE tw.id = {}.id{}), '[]'::jsonb) AS {}",
                timestamp_text("tw.tw_open"),
                timestamp_text("tw.tw_close"),
                window_table,
                relation,
                kind,
                group.field
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a multi-row insert of time windows owned by `owner_id`.
///
/// Rows carrying a kind (shipment pickup/delivery windows) also fill the `kind`
/// column. Returns `None` when there is nothing to insert.
pub fn window_insert_sql(table: &str, owner_id: i64, rows: &[WindowRow]) -> Option<PartialSql> {
    let first = rows.first()?;
    let with_kind = first.kind.is_some();
    let width = if with_kind { 4 } else { 3 };

    let mut tuples = Vec::with_capacity(rows.len());
    let mut args = Vec::with_capacity(rows.len() * width);

    for (i, row) in rows.iter().enumerate() {
        let base = i * width;
        let placeholders: Vec<String> = (1..=width).map(|n| format!("${}", base + n)).collect();
        tuples.push(format!("({})", placeholders.join(", ")));

        args.push(PostgresValue::BigInt(owner_id));
        if with_kind {
            args.push(PostgresValue::Text(row.kind.clone().unwrap_or_default()));
        }
        args.push(PostgresValue::Timestamp(row.tw_open));
        args.push(PostgresValue::Timestamp(row.tw_close));
    }

    let columns = if with_kind {
        "id, kind, tw_open, tw_close"
    } else {
        "id, tw_open, tw_close"
    };

    Some(PartialSql {
        sql: format!(
            "INSERT INTO {} ({}) VALUES {}",
            table,
            columns,
            tuples.join(", ")
        ),
        args,
    })
}
