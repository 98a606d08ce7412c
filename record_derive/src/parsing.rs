//! Parsing utilities for `#[table]` and `#[field]` attributes
//!
//! Also validates relation and field names, mirroring
//! `resource_object::validation` so bad names fail at compile time.

use syn::{
    punctuated::Punctuated, Attribute, Data, Error, Fields, GenericArgument, Ident, LitStr, Meta,
    PathArguments, Result, Token, Type,
};

const RESERVED_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "ON", "AS", "AND", "OR",
    "NOT", "NULL", "TRUE", "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "IN", "ORDER", "BY",
    "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL", "DISTINCT", "CREATE", "DROP", "ALTER",
    "TABLE", "PRIMARY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT", "CONSTRAINT",
    "COLUMN", "RETURNING", "INTERVAL", "TIMESTAMP",
];

/// Validation logic that mirrors resource_object::validation::validate_identifier
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    let first = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;

    if name.len() > 63 {
        return Err(format!(
            "Name '{}' is too long: {} characters (max 63)",
            name,
            name.len()
        ));
    }
    if !first.is_ascii_lowercase() && first != '_' {
        return Err(format!(
            "Name '{}' must start with a lowercase letter or underscore",
            name
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(format!(
            "Name '{}' contains invalid characters: only lowercase letters, digits and underscores are allowed",
            name
        ));
    }
    if RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str()) {
        return Err(format!("Name '{}' is a reserved SQL keyword", name));
    }
    Ok(())
}

/// Validate table name and return syn::Error for better proc macro error handling
pub fn validate_table_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid table name '{}': {}", name, e)))
}

/// Validate field name and return syn::Error for better proc macro error handling
pub fn validate_field_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid field name '{}': {}", name, e)))
}

#[derive(Debug)]
pub struct TableInfo {
    pub name: String,
}

#[derive(Debug)]
pub struct FieldInfo {
    pub ident: Ident,
    /// Public name, the Rust field name
    pub name: String,
    /// `T` of the `Option<T>` the field is declared as
    pub value_type: Type,
    pub readonly: bool,
    pub collection: bool,
}

/// Read `#[table(name = "...")]`
pub fn parse_table_attributes(attrs: &[Attribute]) -> Result<TableInfo> {
    let mut table_name: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("table")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                table_name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported table attribute, expected `name`"))
            }
        })?;
    }

    let table_name = table_name.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "table attribute is required: add #[table(name = \"table_name\")] to your struct",
        )
    })?;

    validate_table_name_syn(&table_name.value(), table_name.span())?;

    Ok(TableInfo {
        name: table_name.value(),
    })
}

#[derive(Debug, Default)]
struct FieldOptions {
    readonly: bool,
    collection: bool,
    skip: bool,
}

fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("field")) {
        let Meta::List(list) = &attr.meta else {
            return Err(Error::new_spanned(
                attr,
                "expected #[field(readonly)], #[field(collection)] or #[field(skip)]",
            ));
        };
        let flags = list.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
        for flag in flags {
            match flag.to_string().as_str() {
                "readonly" => options.readonly = true,
                "collection" => options.collection = true,
                "skip" => options.skip = true,
                _ => {
                    return Err(Error::new(
                        flag.span(),
                        format!("unknown field option `{}`", flag),
                    ))
                }
            }
        }
    }

    Ok(options)
}

/// `T` when `ty` is spelled `Option<T>`
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Collect the mapped fields of a struct in declaration order
pub fn parse_field_attributes(data: &Data) -> Result<Vec<FieldInfo>> {
    let Data::Struct(data_struct) = data else {
        return Err(Error::new(
            proc_macro2::Span::call_site(),
            "Resource can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(Error::new(
            proc_macro2::Span::call_site(),
            "Resource can only be derived for structs with named fields",
        ));
    };

    let mut fields = Vec::new();
    for field in &fields_named.named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
        let options = parse_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let name = ident.to_string();
        validate_field_name_syn(&name, ident.span())?;

        let value_type = option_inner(&field.ty).cloned().ok_or_else(|| {
            Error::new_spanned(
                &field.ty,
                format!(
                    "field `{}` must be declared as Option<T> so absence can be told apart from a value",
                    name
                ),
            )
        })?;

        fields.push(FieldInfo {
            ident,
            name,
            value_type,
            readonly: options.readonly,
            collection: options.collection,
        });
    }

    Ok(fields)
}

#[cfg(test)]
mod validation_tests {
    use super::*;
    use syn::{parse_quote, DeriveInput};

    fn validate_table_name(name: &str) {
        if let Err(e) = validate_table_name_syn(name, proc_macro2::Span::call_site()) {
            panic!("Invalid table name: {}", e);
        }
    }

    #[test]
    fn test_valid_table_names() {
        validate_table_name("jobs");
        validate_table_name("shipments_time_windows");
        validate_table_name("_private");
        validate_table_name("t2");
    }

    #[test]
    #[should_panic(expected = "Invalid table name")]
    fn test_reserved_keyword() {
        validate_table_name("select");
    }

    #[test]
    #[should_panic(expected = "Invalid table name")]
    fn test_uppercase_rejected() {
        validate_table_name("Jobs");
    }

    #[test]
    fn test_sql_injection_prevention() {
        let malicious_names = [
            "jobs; drop table jobs; --",
            "jobs' or '1'='1",
            "jobs/**/union/**/select",
        ];

        for name in malicious_names {
            assert!(
                validate_table_name_syn(name, proc_macro2::Span::call_site()).is_err(),
                "Should reject malicious name: {}",
                name
            );
        }
    }

    #[test]
    fn test_parse_table_name() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "vehicles")]
            struct Vehicle {}
        };
        let info = parse_table_attributes(&input.attrs).expect("table attribute");
        assert_eq!(info.name, "vehicles");
    }

    #[test]
    fn test_missing_table_attribute() {
        let input: DeriveInput = parse_quote! {
            struct Vehicle {}
        };
        let err = parse_table_attributes(&input.attrs).unwrap_err();
        assert!(err.to_string().contains("table attribute is required"));
    }

    #[test]
    fn test_parse_fields() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "breaks")]
            struct Break {
                #[field(readonly)]
                id: Option<i64>,
                vehicle_id: Option<i64>,
                #[field(collection)]
                time_windows: Option<Vec<TimeWindow>>,
                #[field(skip)]
                cached: bool,
            }
        };

        let fields = parse_field_attributes(&input.data).expect("fields");
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "vehicle_id", "time_windows"]);
        assert!(fields[0].readonly);
        assert!(!fields[1].readonly && !fields[1].collection);
        assert!(fields[2].collection);

        let expected: Type = parse_quote!(Vec<TimeWindow>);
        assert_eq!(fields[2].value_type, expected);
    }

    #[test]
    fn test_non_option_field_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "projects")]
            struct Project {
                name: String,
            }
        };
        let err = parse_field_attributes(&input.data).unwrap_err();
        assert!(err.to_string().contains("must be declared as Option<T>"));
    }

    #[test]
    fn test_unknown_field_option() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "projects")]
            struct Project {
                #[field(virtual_column)]
                name: Option<String>,
            }
        };
        let err = parse_field_attributes(&input.data).unwrap_err();
        assert!(err.to_string().contains("unknown field option"));
    }

    #[test]
    fn test_option_inner() {
        let ty: Type = parse_quote!(std::option::Option<String>);
        let expected: Type = parse_quote!(String);
        assert_eq!(option_inner(&ty), Some(&expected));

        let ty: Type = parse_quote!(Vec<String>);
        assert_eq!(option_inner(&ty), None);
    }
}
