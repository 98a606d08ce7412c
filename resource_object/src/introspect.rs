//! Field introspection
//!
//! Walks a record's field table and keeps the fields that are present and
//! writable, in declaration order.

use crate::field::{FieldData, FieldKind, FieldSpec, Resource};
use crate::location;
use crate::policy;
use type_mapping::PostgresValue;

/// A present, writable field of a partial record
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Logical (public) name
    pub name: &'static str,
    /// Physical column after aliasing
    pub column: &'static str,
    pub kind: FieldKind,
    /// No column of its own; dropped by the compiler
    pub collection: bool,
    pub value: PostgresValue,
}

/// Present fields of one request payload, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRecord {
    pub fields: Vec<FieldDescriptor>,
}

impl PartialRecord {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields that map onto a physical column
    pub fn columns(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| !field.collection)
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

/// Collect the present fields of `record`.
///
/// # Panics
///
/// When a field yields a value whose kind differs from the kind declared in the
/// field table. That is a mis-declared resource, not a runtime condition.
pub fn introspect<R: Resource>(record: &R) -> PartialRecord {
    let mut fields = Vec::with_capacity(R::FIELDS.len());

    for spec in R::FIELDS {
        if spec.readonly || policy::is_read_only(spec.name) {
            trace_log!("Skipping read-only field {}.{}", R::TABLE, spec.name);
            continue;
        }

        let Some(data) = (spec.access)(record) else {
            continue;
        };

        fields.push(describe(R::TABLE, spec, data));
    }

    PartialRecord { fields }
}

fn describe<R>(table: &str, spec: &FieldSpec<R>, data: FieldData) -> FieldDescriptor {
    if data.kind() != spec.kind {
        panic!(
            "field {}.{} is declared as {} but produced a {} value",
            table,
            spec.name,
            spec.kind,
            data.kind()
        );
    }

    let value = match data {
        FieldData::Scalar(value) | FieldData::Slice(value) => value,
        FieldData::Location(loc) => PostgresValue::BigInt(location::encode(loc.latitude, loc.longitude)),
        FieldData::Json(json) => PostgresValue::Json(json),
    };

    FieldDescriptor {
        name: spec.name,
        column: policy::alias_for(spec.name).unwrap_or(spec.name),
        kind: spec.kind,
        collection: spec.collection,
        value,
    }
}
