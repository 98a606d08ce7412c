//! Convenience re-exports for common resource-object usage

// Field tables
pub use crate::field::{FieldData, FieldKind, FieldSpec, FieldValue, Resource};

// Introspection and SQL compilation
pub use crate::compiler::{
    insert_sql, select_list, update_sql, window_insert_sql, window_select_list, PartialSql,
};
pub use crate::introspect::{introspect, PartialRecord};

// Argument values
pub use type_mapping::PostgresValue;

// Location codec
pub use crate::location::{Location, LocationKey};

// Storage
pub use crate::store::{ResourceStore, StoreObject, WindowGroup, WindowRow, WindowedRecord};

// Error types
pub use crate::errors::ResourceError;
pub use crate::validation::{verify_resource, ValidationError};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{PgPool, Row};
