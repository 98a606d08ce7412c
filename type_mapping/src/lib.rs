//! Value types shared between the resource layer and the storage driver
//!
//! `PostgresValue` is the positional argument type produced by the partial SQL
//! compiler and bound by the execution layer.

pub mod types;

pub use types::PostgresValue;
