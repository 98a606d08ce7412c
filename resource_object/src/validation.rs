//! Identifier validation
//!
//! Relation and column names are spliced into statement text, so every name a
//! field table declares has to be a plain SQL identifier. `record-derive`
//! performs the same checks at compile time; [`verify_resource`] is the runtime
//! counterpart for hand-written tables.

use crate::field::Resource;
use crate::policy;
use std::collections::HashSet;
use std::fmt;

/// PostgreSQL identifier length limit
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

const RESERVED_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "ON", "AS", "AND", "OR",
    "NOT", "NULL", "TRUE", "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "IN", "ORDER", "BY",
    "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL", "DISTINCT", "CREATE", "DROP", "ALTER",
    "TABLE", "PRIMARY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT", "CONSTRAINT",
    "COLUMN", "RETURNING", "INTERVAL", "TIMESTAMP",
];

/// Validation errors for relation and column names
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is empty
    Empty,
    /// Name is longer than [`MAX_IDENTIFIER_LENGTH`]
    TooLong { name: String, length: usize },
    /// Name must start with a lowercase letter or underscore
    InvalidStartCharacter(String),
    /// Only lowercase ASCII letters, digits and underscores are allowed
    InvalidCharacters(String),
    /// Name is a reserved SQL keyword
    ReservedKeyword(String),
    /// Two fields of the same resource write the same physical column
    DuplicateColumn { table: String, column: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Name cannot be empty"),
            ValidationError::TooLong { name, length } => write!(
                f,
                "Name '{}' is too long: {} characters (max {})",
                name, length, MAX_IDENTIFIER_LENGTH
            ),
            ValidationError::InvalidStartCharacter(name) => write!(
                f,
                "Name '{}' must start with a lowercase letter or underscore",
                name
            ),
            ValidationError::InvalidCharacters(name) => write!(
                f,
                "Invalid characters in name '{}': only lowercase letters, digits and underscores are allowed",
                name
            ),
            ValidationError::ReservedKeyword(name) => {
                write!(f, "Name '{}' is a reserved SQL keyword", name)
            }
            ValidationError::DuplicateColumn { table, column } => {
                write!(f, "Column '{}' is written twice by '{}'", column, table)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that `name` can be used verbatim as a relation or column name
pub fn validate_identifier(name: &str) -> Result<(), ValidationError> {
    let first = name.chars().next().ok_or(ValidationError::Empty)?;

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            name: name.to_string(),
            length: name.len(),
        });
    }
    if !first.is_ascii_lowercase() && first != '_' {
        return Err(ValidationError::InvalidStartCharacter(name.to_string()));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ValidationError::InvalidCharacters(name.to_string()));
    }
    if RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str()) {
        return Err(ValidationError::ReservedKeyword(name.to_string()));
    }
    Ok(())
}

/// Check a resource's field table: relation name, every field name, and that no
/// two writable fields land on the same physical column.
pub fn verify_resource<R: Resource>() -> Result<(), ValidationError> {
    validate_identifier(R::TABLE)?;

    let mut columns = HashSet::new();
    for spec in R::FIELDS {
        validate_identifier(spec.name)?;
        if spec.collection || spec.readonly || policy::is_read_only(spec.name) {
            continue;
        }
        let column = policy::physical_column(spec.name);
        if !columns.insert(column) {
            return Err(ValidationError::DuplicateColumn {
                table: R::TABLE.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
