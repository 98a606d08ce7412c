//! Execution layer
//!
//! Runs the statements produced by the compiler against PostgreSQL.

mod bind;
pub mod core;
pub mod crud;
pub mod windows;

pub use self::core::{ResourceStore, StoreObject};
pub use windows::{WindowGroup, WindowRow, WindowedRecord};
