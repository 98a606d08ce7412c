use chrono::NaiveDateTime;
use record_derive::{Resource, resource};
use resource_object::Location;
use serde_json::Value;

/// A vehicle with its depot locations, capacity and shift
#[resource]
#[table(name = "vehicles")]
pub struct Vehicle {
    #[field(readonly)]
    pub id: Option<i64>,
    pub start_location: Option<Location>,
    pub end_location: Option<Location>,
    pub capacity: Option<Vec<i64>>,
    pub skills: Option<Vec<i32>>,
    pub tw_open: Option<NaiveDateTime>,
    pub tw_close: Option<NaiveDateTime>,
    pub speed_factor: Option<f64>,
    pub max_tasks: Option<i32>,
    pub project_id: Option<i64>,
    pub data: Option<Value>,
}
