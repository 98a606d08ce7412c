//! Convenience re-exports for common scheduleserv usage
//!
//! ```rust
//! use scheduleserv::prelude::*;
//!
//! let job = Job {
//!     priority: Some(10),
//!     ..Default::default()
//! };
//! assert_eq!(update_sql(Job::TABLE, &introspect(&job), 7).sql, "UPDATE jobs SET priority = $1 WHERE id = 7");
//! ```

// Core components
pub use crate::core::ScheduleServ;
pub use crate::errors::ScheduleServError;

// Domain records
pub use crate::resources::{
    Break, Job, Project, Shipment, ShipmentTimeWindow, TimeWindow, TimeWindows, Vehicle,
    WindowKind,
};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export commonly used resource-object types for convenience
pub use resource_object::prelude::*;

// Record derive for defining new resources
pub use record_derive::{Resource, resource};

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;
