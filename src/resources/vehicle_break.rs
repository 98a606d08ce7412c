use record_derive::{Resource, resource};
use resource_object::{WindowGroup, WindowRow, WindowedRecord};
use serde_json::Value;

use super::time_window::TimeWindows;

/// A driver break attached to a vehicle
#[resource]
#[table(name = "breaks")]
pub struct Break {
    #[field(readonly)]
    pub id: Option<i64>,
    pub vehicle_id: Option<i64>,
    /// `HH:MM:SS`
    pub service: Option<String>,
    #[field(collection)]
    pub time_windows: Option<TimeWindows>,
    pub data: Option<Value>,
}

impl WindowedRecord for Break {
    const WINDOW_TABLE: &'static str = "breaks_time_windows";
    const WINDOW_GROUPS: &'static [WindowGroup] = &[WindowGroup::all("time_windows")];

    fn window_rows(&self) -> Option<Vec<WindowRow>> {
        self.time_windows.as_ref().map(|windows| windows.rows(None))
    }
}
