//! Procedural macros for generating resource field tables
//!
//! This crate provides the `#[resource]` attribute and the `Resource` derive,
//! which emit a compile-time `resource_object::Resource` implementation for a
//! partial-update record.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parsing;
mod resource_macro;

use codegen::generate_resource_impl;
use parsing::{parse_field_attributes, parse_table_attributes};
use resource_macro::resource_attribute;

/// Derive macro for the `Resource` trait
///
/// Every mapped field must be an `Option<T>` where `T` implements
/// `resource_object::FieldValue`; a type without that impl is a compile error.
///
/// ```rust,ignore
/// #[derive(Debug, Default, Resource)]
/// #[table(name = "breaks")]
/// pub struct Break {
///     #[field(readonly)]
///     pub id: Option<i64>,
///
///     pub vehicle_id: Option<i64>,
///     pub service: Option<String>,
///
///     #[field(collection)]
///     pub time_windows: Option<Vec<TimeWindow>>,
///
///     #[field(skip)]
///     pub cached: bool,
/// }
/// ```
///
/// `readonly` fields are never written, `collection` fields are child rows kept
/// out of the parent statement, and `skip` leaves a field out of the table.
#[proc_macro_derive(Resource, attributes(table, field))]
pub fn derive_resource(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let table_info = match parse_table_attributes(&input.attrs) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let fields = match parse_field_attributes(&input.data) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_resource_impl(name, &table_info, &fields))
}

/// Convenience attribute macro that adds all necessary derives for a record
///
/// Usage:
/// ```rust,ignore
/// use record_derive::resource;
///
/// #[resource]
/// #[table(name = "projects")]
/// pub struct Project {
///     pub name: Option<String>,
///     pub data: Option<serde_json::Value>,
/// }
/// ```
#[proc_macro_attribute]
pub fn resource(attr: TokenStream, item: TokenStream) -> TokenStream {
    resource_attribute(attr, item)
}
