use record_derive::{Resource, resource};
use serde_json::Value;

/// A scheduling project, the owner of jobs, shipments and vehicles
#[resource]
#[table(name = "projects")]
pub struct Project {
    #[field(readonly)]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub data: Option<Value>,
}
