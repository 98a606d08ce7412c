use record_derive::{Resource, resource};
use resource_object::{Location, WindowGroup, WindowRow, WindowedRecord};
use serde_json::Value;

use super::time_window::TimeWindows;

/// A single-stop task served at one location
#[resource]
#[table(name = "jobs")]
pub struct Job {
    #[field(readonly)]
    pub id: Option<i64>,
    pub location: Option<Location>,
    /// `HH:MM:SS`
    pub setup: Option<String>,
    /// `HH:MM:SS`
    pub service: Option<String>,
    pub delivery: Option<Vec<i64>>,
    pub pickup: Option<Vec<i64>>,
    pub skills: Option<Vec<i32>>,
    pub priority: Option<i32>,
    #[field(collection)]
    pub time_windows: Option<TimeWindows>,
    pub project_id: Option<i64>,
    pub data: Option<Value>,
}

impl WindowedRecord for Job {
    const WINDOW_TABLE: &'static str = "jobs_time_windows";
    const WINDOW_GROUPS: &'static [WindowGroup] = &[WindowGroup::all("time_windows")];

    fn window_rows(&self) -> Option<Vec<WindowRow>> {
        self.time_windows.as_ref().map(|windows| windows.rows(None))
    }
}
