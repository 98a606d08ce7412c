//! Code generation for the `Resource` field table

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::{FieldInfo, TableInfo};

fn field_spec(name: &Ident, field: &FieldInfo) -> TokenStream {
    let ident = &field.ident;
    let column = &field.name;
    let ty = &field.value_type;

    let mut spec = quote! {
        resource_object::FieldSpec::new(
            #column,
            <#ty as resource_object::FieldValue>::KIND,
            |record: &#name| {
                record
                    .#ident
                    .as_ref()
                    .map(<#ty as resource_object::FieldValue>::to_field_data)
            },
        )
    };
    if field.readonly {
        spec = quote! { #spec.readonly() };
    }
    if field.collection {
        spec = quote! { #spec.collection() };
    }
    spec
}

pub fn generate_resource_impl(
    name: &Ident,
    table_info: &TableInfo,
    fields: &[FieldInfo],
) -> TokenStream {
    let table_name = &table_info.name;
    let specs = fields.iter().map(|field| field_spec(name, field));

    quote! {
        impl resource_object::Resource for #name {
            const TABLE: &'static str = #table_name;
            const FIELDS: &'static [resource_object::FieldSpec<Self>] = &[
                #(#specs),*
            ];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{parse_field_attributes, parse_table_attributes};
    use syn::{parse_quote, DeriveInput};

    fn expand(input: DeriveInput) -> String {
        let table = parse_table_attributes(&input.attrs).expect("table");
        let fields = parse_field_attributes(&input.data).expect("fields");
        generate_resource_impl(&input.ident, &table, &fields)
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn test_generates_table_and_fields() {
        let code = expand(parse_quote! {
            #[table(name = "jobs")]
            struct Job {
                #[field(readonly)]
                id: Option<i64>,
                location: Option<Location>,
                #[field(collection)]
                time_windows: Option<Vec<TimeWindow>>,
            }
        });

        assert!(code.contains("implresource_object::ResourceforJob"));
        assert!(code.contains("constTABLE:&'staticstr=\"jobs\""));
        assert!(code.contains("\"id\",<i64asresource_object::FieldValue>::KIND"));
        assert!(code.contains(".readonly()"));
        assert!(code.contains("<Locationasresource_object::FieldValue>::KIND"));
        assert!(code.contains(".collection()"));
    }

    #[test]
    fn test_plain_fields_have_no_flags() {
        let code = expand(parse_quote! {
            #[table(name = "projects")]
            struct Project {
                name: Option<String>,
            }
        });

        assert!(!code.contains(".readonly()"));
        assert!(!code.contains(".collection()"));
    }
}
