//! Error types for the scheduleserv crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleServError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error(transparent)]
    Resource(#[from] resource_object::ResourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
