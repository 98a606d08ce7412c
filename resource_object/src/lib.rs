//! Resource Object - dynamic resource mapping for scheduleserv
//!
//! Every domain entity (projects, jobs, shipments, vehicles, breaks and their
//! time windows) goes through the same pipeline: a partial-update record is
//! walked through its compile-time field table, the present fields become an
//! ordered [`PartialRecord`], and the compiler turns that into SQL text plus a
//! positional argument list. Locations are collapsed into integer keys by the
//! [`location`] codec on the way in and expanded again on the way out.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod compiler;
pub mod errors;
pub mod field;
pub mod introspect;
pub mod location;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod validation;

pub use compiler::{
    insert_sql, select_list, update_sql, window_insert_sql, window_select_list, PartialSql,
};
pub use errors::ResourceError;
pub use field::{FieldData, FieldKind, FieldSpec, FieldValue, Resource};
pub use introspect::{introspect, FieldDescriptor, PartialRecord};
pub use location::{Location, LocationKey};
pub use store::{ResourceStore, StoreObject, WindowGroup, WindowRow, WindowedRecord};
pub use validation::{verify_resource, ValidationError};

pub use type_mapping::PostgresValue;

pub type DbPool = sqlx::PgPool;
