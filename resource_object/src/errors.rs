use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A storage constraint rejected the write
    #[error("{0}")]
    Constraint(String),

    /// A lookup named a field the resource cannot be filtered on
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unsupported argument: {0}")]
    UnsupportedArgument(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ResourceError {
    /// Translate a driver error raised while working on `table`
    pub fn from_db(table: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ResourceError::NotFound(table.to_string()),
            sqlx::Error::Database(db_err) => {
                match db_err.constraint().and_then(constraint_message) {
                    Some(message) => ResourceError::Constraint(message.to_string()),
                    None => ResourceError::DatabaseError(format!("{}: {}", table, db_err)),
                }
            }
            other => ResourceError::DatabaseError(format!("{}: {}", table, other)),
        }
    }
}

/// Message for a named schema constraint, if it is one clients can trip
pub fn constraint_message(constraint: &str) -> Option<&'static str> {
    let message = match constraint {
        "jobs_project_id_fkey" | "shipments_project_id_fkey" | "vehicles_project_id_fkey" => {
            "Project with the given 'project_id' does not exist"
        }
        "breaks_vehicle_id_fkey" => "Vehicle with the given 'vehicle_id' does not exist",
        "jobs_time_windows_id_fkey" => "Job with the given 'job_id' does not exist",
        "shipments_time_windows_id_fkey" => "Shipment with the given 'shipment_id' does not exist",
        "breaks_time_windows_id_fkey" => "Break with the given 'break_id' does not exist",
        "jobs_check" => "Field 'pickup' and 'delivery' must have same length",
        "vehicles_check"
        | "jobs_time_windows_check"
        | "shipments_time_windows_check"
        | "breaks_time_windows_check" => {
            "Field 'tw_open' must be less than or equal to field 'tw_close'"
        }
        "jobs_time_windows_pkey" => "Jobs time window with given values already exist",
        "shipments_time_windows_pkey" => "Shipments time window with given values already exist",
        "breaks_time_windows_pkey" => "Breaks time window with given values already exist",
        _ => return None,
    };
    Some(message)
}
