//! Domain resources
//!
//! One partial-update record per relation. Every field is optional: a field
//! left out of a payload is left out of the generated statement.

pub mod job;
pub mod project;
pub mod shipment;
pub mod time_window;
pub mod vehicle;
pub mod vehicle_break;

pub use job::Job;
pub use project::Project;
pub use shipment::Shipment;
pub use time_window::{ShipmentTimeWindow, TimeWindow, TimeWindows, WindowKind};
pub use vehicle::Vehicle;
pub use vehicle_break::Break;
