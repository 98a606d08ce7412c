//! Field tables
//!
//! Each resource type declares, once and at compile time, an ordered table of
//! its logical fields. The table replaces runtime reflection: walking it in
//! order yields the present fields in the same order every time, and that order
//! becomes the SQL placeholder order.
//!
//! Tables are normally generated with `#[derive(Resource)]`, but can be written
//! by hand:
//!
//! ```
//! use resource_object::{FieldSpec, FieldValue, Resource};
//!
//! #[derive(Default)]
//! pub struct ProjectParams {
//!     pub name: Option<String>,
//!     pub data: Option<serde_json::Value>,
//! }
//!
//! impl Resource for ProjectParams {
//!     const TABLE: &'static str = "projects";
//!     const FIELDS: &'static [FieldSpec<Self>] = &[
//!         FieldSpec::new("name", <String as FieldValue>::KIND, |record: &ProjectParams| {
//!             record.name.as_ref().map(FieldValue::to_field_data)
//!         }),
//!         FieldSpec::new("data", <serde_json::Value as FieldValue>::KIND, |record: &ProjectParams| {
//!             record.data.as_ref().map(FieldValue::to_field_data)
//!         }),
//!     ];
//! }
//! ```

use crate::location::Location;
use chrono::NaiveDateTime;
use std::fmt;
use type_mapping::PostgresValue;

/// Shape of a logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Scalar,
    Slice,
    /// Nested coordinate pair, stored as one location key
    Location,
    /// Schema-less payload stored as JSONB
    OpaqueJson,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Slice => "slice",
            FieldKind::Location => "location",
            FieldKind::OpaqueJson => "opaque json",
        };
        f.write_str(name)
    }
}

/// A present field value, tagged with its shape
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    Scalar(PostgresValue),
    Slice(PostgresValue),
    Location(Location),
    Json(serde_json::Value),
}

impl FieldData {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldData::Scalar(_) => FieldKind::Scalar,
            FieldData::Slice(_) => FieldKind::Slice,
            FieldData::Location(_) => FieldKind::Location,
            FieldData::Json(_) => FieldKind::OpaqueJson,
        }
    }
}

/// Types a partial-update record may carry.
///
/// A record field of a type without this impl does not compile, so a resource
/// declared with an unsupported field shape never reaches live traffic.
pub trait FieldValue {
    const KIND: FieldKind;

    fn to_field_data(&self) -> FieldData;
}

macro_rules! scalar_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Scalar;

                fn to_field_data(&self) -> FieldData {
                    FieldData::Scalar(PostgresValue::from(self.clone()))
                }
            }
        )*
    };
}

macro_rules! slice_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for Vec<$ty> {
                const KIND: FieldKind = FieldKind::Slice;

                fn to_field_data(&self) -> FieldData {
                    FieldData::Slice(PostgresValue::from(self.clone()))
                }
            }
        )*
    };
}

scalar_field_value!(String, i32, i64, f64, bool, NaiveDateTime);
slice_field_value!(String, i32, i64);

impl FieldValue for Location {
    const KIND: FieldKind = FieldKind::Location;

    fn to_field_data(&self) -> FieldData {
        FieldData::Location(*self)
    }
}

impl FieldValue for serde_json::Value {
    const KIND: FieldKind = FieldKind::OpaqueJson;

    fn to_field_data(&self) -> FieldData {
        FieldData::Json(self.clone())
    }
}

/// Reads one field off a record; `None` when the field is absent
pub type FieldAccessor<R> = fn(&R) -> Option<FieldData>;

/// One entry of a resource's field table
pub struct FieldSpec<R> {
    /// Lower-cased logical (public) name
    pub name: &'static str,
    pub kind: FieldKind,
    /// Server assigned, never written
    pub readonly: bool,
    /// A child collection with no column of its own (time-window sets)
    pub collection: bool,
    pub access: FieldAccessor<R>,
}

impl<R> FieldSpec<R> {
    pub const fn new(name: &'static str, kind: FieldKind, access: FieldAccessor<R>) -> Self {
        Self {
            name,
            kind,
            readonly: false,
            collection: false,
            access,
        }
    }

    pub const fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub const fn collection(mut self) -> Self {
        self.collection = true;
        self
    }
}

impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldSpec<R> {}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("readonly", &self.readonly)
            .field("collection", &self.collection)
            .finish()
    }
}

/// A partial-update record type backed by a database relation.
///
/// Derive it with `#[derive(Resource)]` and `#[table(name = "...")]`.
pub trait Resource: Sized + Send + Sync + 'static {
    /// Relation the record is written to
    const TABLE: &'static str;

    /// Field table in declaration order
    const FIELDS: &'static [FieldSpec<Self>];

    /// Look up a field by logical name
    fn field(name: &str) -> Option<&'static FieldSpec<Self>> {
        Self::FIELDS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }
}
