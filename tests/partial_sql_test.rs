//! Integration tests for the domain records
//!
//! Client payloads are deserialized into the derived records and pushed through
//! introspection and the partial SQL compiler, the same path the stores take.

use chrono::{NaiveDate, NaiveDateTime};
use scheduleserv::prelude::*;
use serde_json::json;

fn timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid timestamp")
}

#[test]
fn test_domain_records_have_valid_field_tables() {
    verify_resource::<Project>().expect("projects");
    verify_resource::<Job>().expect("jobs");
    verify_resource::<Shipment>().expect("shipments");
    verify_resource::<Vehicle>().expect("vehicles");
    verify_resource::<Break>().expect("breaks");
}

#[test]
fn test_project_insert_from_payload() {
    let project: Project = serde_json::from_value(json!({"name": "X"})).unwrap();

    let partial = insert_sql(Project::TABLE, &introspect(&project));
    assert_eq!(partial.sql, "INSERT INTO projects (name) VALUES ($1)");
    assert_eq!(partial.args, vec![PostgresValue::Text("X".to_string())]);
}

#[test]
fn test_project_empty_patch() {
    let project: Project = serde_json::from_value(json!({})).unwrap();

    let partial = update_sql(Project::TABLE, &introspect(&project), 42);
    assert_eq!(partial.sql, "UPDATE projects SET id = id WHERE id = 42");
    assert!(partial.args.is_empty());
}

#[test]
fn test_project_id_in_payload_is_ignored() {
    let project: Project = serde_json::from_value(json!({"id": 9, "name": "Y"})).unwrap();

    let partial = update_sql(Project::TABLE, &introspect(&project), 1);
    assert_eq!(partial.sql, "UPDATE projects SET name = $1 WHERE id = 1");
}

#[test]
fn test_job_insert() {
    let job: Job = serde_json::from_value(json!({
        "location": {"latitude": 48.6113, "longitude": 2.0365},
        "service": "00:02:00",
        "skills": [1, 5],
        "time_windows": [["2021-10-26T21:24:38", "2021-10-26T23:24:38"]],
        "project_id": 1234,
        "data": {"key1": "value1"}
    }))
    .unwrap();

    let partial = insert_sql(Job::TABLE, &introspect(&job));
    assert_eq!(
        partial.sql,
        "INSERT INTO jobs (location_key, service, skills, project_id, data) \
         VALUES ($1, $2::INTERVAL, $3, $4, $5)"
    );
    assert_eq!(
        partial.args,
        vec![
            PostgresValue::BigInt(48611300020365),
            PostgresValue::Text("00:02:00".to_string()),
            PostgresValue::IntegerArray(vec![1, 5]),
            PostgresValue::BigInt(1234),
            PostgresValue::Json(json!({"key1": "value1"})),
        ]
    );

    let rows = job.window_rows().expect("windows present");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, None);
    assert_eq!(rows[0].tw_close, timestamp("2021-10-26T23:24:38"));
}

#[test]
fn test_job_update_keeps_windows_out_of_the_statement() {
    let job: Job = serde_json::from_value(json!({
        "priority": 100,
        "time_windows": []
    }))
    .unwrap();

    let partial = update_sql(Job::TABLE, &introspect(&job), 7);
    assert_eq!(partial.sql, "UPDATE jobs SET priority = $1 WHERE id = 7");
    assert_eq!(job.window_rows(), Some(vec![]));
}

#[test]
fn test_job_without_windows_leaves_them_alone() {
    let job: Job = serde_json::from_value(json!({"priority": 1})).unwrap();
    assert_eq!(job.window_rows(), None);
}

#[test]
fn test_shipment_update_casts_every_duration() {
    let shipment: Shipment = serde_json::from_value(json!({
        "p_location": {"latitude": -32.234, "longitude": -23.2342},
        "p_setup": "00:00:10",
        "p_service": "00:01:00",
        "d_setup": "00:00:20",
        "d_service": "00:02:00",
        "amount": [5, 15]
    }))
    .unwrap();

    let partial = update_sql(Shipment::TABLE, &introspect(&shipment), 5);
    assert_eq!(
        partial.sql,
        "UPDATE shipments SET p_location_key = $1, p_setup = $2::INTERVAL, \
         p_service = $3::INTERVAL, d_setup = $4::INTERVAL, d_service = $5::INTERVAL, \
         amount = $6 WHERE id = 5"
    );
    assert_eq!(
        partial.args[0],
        PostgresValue::BigInt(resource_object::location::encode(-32.234, -23.2342))
    );
    assert_eq!(partial.args[5], PostgresValue::BigIntArray(vec![5, 15]));
}

#[test]
fn test_shipment_windows_are_tagged_by_side() {
    let shipment: Shipment = serde_json::from_value(json!({
        "p_time_windows": [["2021-10-26T08:00:00", "2021-10-26T09:00:00"]],
        "d_time_windows": [
            ["2021-10-26T12:00:00", "2021-10-26T13:00:00"],
            ["2021-10-26T15:00:00", "2021-10-26T16:00:00"]
        ]
    }))
    .unwrap();

    let kinds: Vec<_> = shipment
        .window_rows()
        .expect("windows present")
        .into_iter()
        .map(|row| row.kind.unwrap_or_default())
        .collect();
    assert_eq!(kinds, ["p", "d", "d"]);

    let insert = window_insert_sql_for(&shipment, 11);
    assert!(insert.starts_with("INSERT INTO shipments_time_windows (id, kind, tw_open, tw_close)"));
    assert!(insert.ends_with("($9, $10, $11, $12)"));
}

fn window_insert_sql_for<R: WindowedRecord>(record: &R, id: i64) -> String {
    let rows = record.window_rows().unwrap_or_default();
    resource_object::window_insert_sql(R::WINDOW_TABLE, id, &rows)
        .map(|partial| partial.sql)
        .unwrap_or_default()
}

#[test]
fn test_shipment_single_side_still_replaces() {
    let shipment = Shipment {
        d_time_windows: Some(TimeWindows::default()),
        ..Default::default()
    };
    assert_eq!(shipment.window_rows(), Some(vec![]));
}

#[test]
fn test_vehicle_insert_uses_key_columns() {
    let vehicle = Vehicle {
        start_location: Some(Location::new(-90.0, -180.0)),
        end_location: Some(Location::new(90.0, 180.0)),
        tw_open: Some(timestamp("2021-10-26T08:00:00")),
        speed_factor: Some(1.5),
        ..Default::default()
    };

    let partial = insert_sql(Vehicle::TABLE, &introspect(&vehicle));
    assert_eq!(
        partial.sql,
        "INSERT INTO vehicles (start_key, end_key, tw_open, speed_factor) VALUES ($1, $2, $3, $4)"
    );
    assert_eq!(
        partial.args,
        vec![
            PostgresValue::BigInt(1090000011800000),
            PostgresValue::BigInt(90000001800000),
            PostgresValue::Timestamp(timestamp("2021-10-26T08:00:00")),
            PostgresValue::Float(1.5),
        ]
    );
}

#[test]
fn test_vehicle_select_list() {
    let list = select_list::<Vehicle>();
    assert!(list.starts_with("id, start_key, end_key, capacity, skills, "));
    assert!(list.contains(
        "to_char(tw_open, 'YYYY-MM-DD') || 'T' || to_char(tw_open, 'HH24:MI:SS') AS tw_open"
    ));
    assert!(list.contains("speed_factor, max_tasks, project_id, data"));
}

#[test]
fn test_break_patch_with_only_windows() {
    let brk = Break {
        time_windows: Some(TimeWindows(vec![TimeWindow::new(
            NaiveDate::from_ymd_opt(2021, 12, 31)
                .and_then(|d| d.and_hms_opt(23, 0, 0))
                .unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 31)
                .and_then(|d| d.and_hms_opt(23, 59, 0))
                .unwrap(),
        )])),
        ..Default::default()
    };

    let partial = update_sql(Break::TABLE, &introspect(&brk), 3);
    assert_eq!(partial.sql, "UPDATE breaks SET id = id WHERE id = 3");
    assert_eq!(brk.window_rows().map(|rows| rows.len()), Some(1));
}

#[test]
fn test_location_keys_deduplicate_nearby_points() {
    let a = Location::new(12.34567, 56.78);
    let b = Location::new(12.345671, 56.780001);
    assert_eq!(a.key(), b.key());
    assert_eq!(Location::from_key(a.key()), Location::new(12.3457, 56.78));
}

#[test]
fn test_windowed_records_read_windows_back_by_group() {
    let shipment = window_select_list(
        Shipment::TABLE,
        Shipment::WINDOW_TABLE,
        Shipment::WINDOW_GROUPS,
    );
    assert!(shipment.contains("FROM shipments_time_windows tw WHERE tw.id = shipments.id AND tw.kind = 'p'"));
    assert!(shipment.ends_with("AND tw.kind = 'd'), '[]'::jsonb) AS d_time_windows"));

    let job = window_select_list(Job::TABLE, Job::WINDOW_TABLE, Job::WINDOW_GROUPS);
    assert!(job.ends_with("WHERE tw.id = jobs.id), '[]'::jsonb) AS time_windows"));

    let brk = window_select_list(Break::TABLE, Break::WINDOW_TABLE, Break::WINDOW_GROUPS);
    assert!(brk.contains("FROM breaks_time_windows tw"));
}
