//! # scheduleserv
//!
//! Resource mapping layer of a vehicle-routing scheduling server. Domain
//! records (projects, jobs, shipments, vehicles, breaks) are partial-update
//! payloads: every field is optional, and only the fields a client sends are
//! written. Locations are stored as integer keys so equal coordinates share one
//! optimization node.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scheduleserv::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "scheduleserv".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let server = ScheduleServ::new(config).await?;
//!
//!     let project_id = server
//!         .store::<Project>()
//!         .create(&Project {
//!             name: Some("Berlin deliveries".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     let job = Job {
//!         location: Some(Location::new(52.5200, 13.4050)),
//!         service: Some("00:05:00".to_string()),
//!         project_id: Some(project_id),
//!         ..Default::default()
//!     };
//!     let job_id = server.store::<Job>().create_with_windows(&job).await?;
//!     println!("Created job {}", job_id);
//!
//!     for location in server.project_locations(project_id).await? {
//!         println!("{:?}", location);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;
pub mod resources;

// Re-export the main public types for convenience
pub use core::ScheduleServ;
pub use errors::ScheduleServError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export internal crates used by macros and public API
pub use record_derive;
pub use resource_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
