//! Column policy tables
//!
//! Process-wide, read-only classification of logical field names. Keys are
//! lower-cased logical names; lookups ignore ASCII case.

/// Fields whose column holds a duration. A textual `HH:MM:SS` value needs an
/// explicit cast, the driver will not turn a plain string into an interval.
pub const INTERVAL_FIELDS: &[&str] = &[
    "setup",
    "service",
    "p_setup",
    "p_service",
    "d_setup",
    "d_service",
];

/// Fields rendered as timestamps on the read path.
pub const TIMESTAMP_FIELDS: &[&str] = &["tw_open", "tw_close", "created_at", "updated_at"];

/// Public field name -> physical column name.
pub const ALIAS_FIELDS: &[(&str, &str)] = &[
    ("location", "location_key"),
    ("p_location", "p_location_key"),
    ("d_location", "d_location_key"),
    ("start_location", "start_key"),
    ("end_location", "end_key"),
];

/// Server-assigned fields, never client writable.
pub const READ_ONLY_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

fn contains(table: &[&str], name: &str) -> bool {
    table.iter().any(|field| field.eq_ignore_ascii_case(name))
}

pub fn is_interval(name: &str) -> bool {
    contains(INTERVAL_FIELDS, name)
}

pub fn is_timestamp(name: &str) -> bool {
    contains(TIMESTAMP_FIELDS, name)
}

pub fn is_read_only(name: &str) -> bool {
    contains(READ_ONLY_FIELDS, name)
}

/// Physical column for an aliased public name
pub fn alias_for(name: &str) -> Option<&'static str> {
    ALIAS_FIELDS
        .iter()
        .find(|(public, _)| public.eq_ignore_ascii_case(name))
        .map(|(_, column)| *column)
}

/// Public name for an aliased physical column (inverse of [`alias_for`])
pub fn public_name_for(column: &str) -> Option<&'static str> {
    ALIAS_FIELDS
        .iter()
        .find(|(_, physical)| physical.eq_ignore_ascii_case(column))
        .map(|(public, _)| *public)
}

/// The column a logical field is stored in
pub fn physical_column(name: &str) -> &str {
    alias_for(name).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fields() {
        assert!(is_interval("service"));
        assert!(is_interval("P_SERVICE"));
        assert!(is_interval("d_setup"));
        assert!(!is_interval("tw_open"));
        assert!(!is_interval("name"));
    }

    #[test]
    fn test_timestamp_fields() {
        assert!(is_timestamp("tw_open"));
        assert!(is_timestamp("Created_At"));
        assert!(!is_timestamp("service"));
    }

    #[test]
    fn test_alias_fields() {
        assert_eq!(alias_for("location"), Some("location_key"));
        assert_eq!(alias_for("START_LOCATION"), Some("start_key"));
        assert_eq!(alias_for("priority"), None);

        assert_eq!(physical_column("p_location"), "p_location_key");
        assert_eq!(physical_column("priority"), "priority");

        assert_eq!(public_name_for("end_key"), Some("end_location"));
        assert_eq!(public_name_for("priority"), None);
    }

    #[test]
    fn test_tables_are_lower_case() {
        let names = INTERVAL_FIELDS
            .iter()
            .chain(TIMESTAMP_FIELDS)
            .chain(READ_ONLY_FIELDS)
            .chain(ALIAS_FIELDS.iter().map(|(public, _)| public));

        for name in names {
            assert_eq!(*name, name.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_read_only_fields() {
        assert!(is_read_only("id"));
        assert!(is_read_only("updated_at"));
        assert!(!is_read_only("project_id"));
    }
}
