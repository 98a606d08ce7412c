//! Time windows
//!
//! On the wire a window is a `[tw_open, tw_close]` pair of
//! `YYYY-MM-DDTHH:MM:SS` timestamps. Jobs, shipments and breaks carry a list of
//! them as a collection field; the rows live in a child relation keyed by the
//! owner's id.

use chrono::NaiveDateTime;
use resource_object::{FieldData, FieldKind, FieldValue, PostgresValue, WindowRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(NaiveDateTime, NaiveDateTime)",
    into = "(NaiveDateTime, NaiveDateTime)"
)]
pub struct TimeWindow {
    pub tw_open: NaiveDateTime,
    pub tw_close: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(tw_open: NaiveDateTime, tw_close: NaiveDateTime) -> Self {
        Self { tw_open, tw_close }
    }

    fn row(&self, kind: Option<WindowKind>) -> WindowRow {
        WindowRow {
            kind: kind.map(|kind| kind.as_str().to_string()),
            tw_open: self.tw_open,
            tw_close: self.tw_close,
        }
    }
}

impl From<(NaiveDateTime, NaiveDateTime)> for TimeWindow {
    fn from((tw_open, tw_close): (NaiveDateTime, NaiveDateTime)) -> Self {
        Self { tw_open, tw_close }
    }
}

impl From<TimeWindow> for (NaiveDateTime, NaiveDateTime) {
    fn from(window: TimeWindow) -> Self {
        (window.tw_open, window.tw_close)
    }
}

/// The set of windows on one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeWindows(pub Vec<TimeWindow>);

impl TimeWindows {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeWindow> {
        self.0.iter()
    }

    /// Child rows for these windows, tagged with `kind` when given
    pub fn rows(&self, kind: Option<WindowKind>) -> Vec<WindowRow> {
        self.iter().map(|window| window.row(kind)).collect()
    }
}

impl From<Vec<TimeWindow>> for TimeWindows {
    fn from(windows: Vec<TimeWindow>) -> Self {
        Self(windows)
    }
}

impl FieldValue for TimeWindows {
    const KIND: FieldKind = FieldKind::Slice;

    fn to_field_data(&self) -> FieldData {
        FieldData::Slice(PostgresValue::Array(
            self.iter()
                .map(|window| {
                    PostgresValue::Array(vec![
                        PostgresValue::Timestamp(window.tw_open),
                        PostgresValue::Timestamp(window.tw_close),
                    ])
                })
                .collect(),
        ))
    }
}

/// Pickup or delivery side of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowKind {
    #[serde(rename = "p")]
    Pickup,
    #[serde(rename = "d")]
    Delivery,
}

impl WindowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Pickup => "p",
            WindowKind::Delivery => "d",
        }
    }
}

/// A shipment window row, as stored in `shipments_time_windows`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentTimeWindow {
    pub kind: WindowKind,
    pub tw_open: NaiveDateTime,
    pub tw_close: NaiveDateTime,
}

impl From<ShipmentTimeWindow> for WindowRow {
    fn from(window: ShipmentTimeWindow) -> Self {
        TimeWindow::new(window.tw_open, window.tw_close).row(Some(window.kind))
    }
}
