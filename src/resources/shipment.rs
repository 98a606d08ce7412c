use record_derive::{Resource, resource};
use resource_object::{Location, WindowGroup, WindowRow, WindowedRecord};
use serde_json::Value;

use super::time_window::{ShipmentTimeWindow, TimeWindows, WindowKind};

/// A pickup-and-delivery pair moved by one vehicle
#[resource]
#[table(name = "shipments")]
pub struct Shipment {
    #[field(readonly)]
    pub id: Option<i64>,
    pub p_location: Option<Location>,
    /// `HH:MM:SS`
    pub p_setup: Option<String>,
    /// `HH:MM:SS`
    pub p_service: Option<String>,
    pub d_location: Option<Location>,
    /// `HH:MM:SS`
    pub d_setup: Option<String>,
    /// `HH:MM:SS`
    pub d_service: Option<String>,
    pub amount: Option<Vec<i64>>,
    pub skills: Option<Vec<i32>>,
    pub priority: Option<i32>,
    #[field(collection)]
    pub p_time_windows: Option<TimeWindows>,
    #[field(collection)]
    pub d_time_windows: Option<TimeWindows>,
    pub project_id: Option<i64>,
    pub data: Option<Value>,
}

impl Shipment {
    /// Pickup windows followed by delivery windows, tagged with their side
    pub fn time_windows(&self) -> Vec<ShipmentTimeWindow> {
        let sides = [
            (WindowKind::Pickup, &self.p_time_windows),
            (WindowKind::Delivery, &self.d_time_windows),
        ];
        sides
            .into_iter()
            .filter_map(|(kind, windows)| windows.as_ref().map(|windows| (kind, windows)))
            .flat_map(|(kind, windows)| {
                windows.iter().map(move |window| ShipmentTimeWindow {
                    kind,
                    tw_open: window.tw_open,
                    tw_close: window.tw_close,
                })
            })
            .collect()
    }
}

/// Both sides share one child relation, so a payload naming either side
/// replaces the windows of both.
impl WindowedRecord for Shipment {
    const WINDOW_TABLE: &'static str = "shipments_time_windows";
    const WINDOW_GROUPS: &'static [WindowGroup] = &[
        WindowGroup::of_kind("p_time_windows", "p"),
        WindowGroup::of_kind("d_time_windows", "d"),
    ];

    fn window_rows(&self) -> Option<Vec<WindowRow>> {
        if self.p_time_windows.is_none() && self.d_time_windows.is_none() {
            return None;
        }
        Some(self.time_windows().into_iter().map(WindowRow::from).collect())
    }
}
