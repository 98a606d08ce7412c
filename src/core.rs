//! Core ScheduleServ functionality
//!
//! The coordinator owns the connection pool and hands out typed stores for the
//! domain resources.

use resource_object::location::{Location, LocationKey};
use resource_object::{Resource, ResourceStore};
use sqlx::PgPool;
use std::time::Duration;

use crate::errors::ScheduleServError;
use config::{AppConfig, DatabaseConfig};

/// Distinct location keys referenced by a project's live jobs, shipments and vehicles
const PROJECT_LOCATIONS_SQL: &str = "\
    SELECT unnest(ARRAY[location_key]) AS location_key FROM jobs \
        WHERE project_id = $1 AND deleted = FALSE \
    UNION \
    SELECT unnest(ARRAY[p_location_key, d_location_key]) FROM shipments \
        WHERE project_id = $1 AND deleted = FALSE \
    UNION \
    SELECT unnest(ARRAY[start_key, end_key]) FROM vehicles \
        WHERE project_id = $1 AND deleted = FALSE";

/// Main coordinator that manages the database connection
#[derive(Debug, Clone)]
pub struct ScheduleServ {
    pool: PgPool,
}

impl ScheduleServ {
    /// Create new ScheduleServ with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, ScheduleServError> {
        config.validate()?;
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;
        tracing::info!(
            "Connected to {}:{}/{}",
            config.host,
            config.port,
            config.database
        );

        Ok(Self { pool })
    }

    /// Load configuration from the environment and connect
    pub async fn from_env() -> Result<Self, ScheduleServError> {
        let config = AppConfig::load()?;
        Self::new(config.database).await
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Typed store for one resource
    pub fn store<R: Resource>(&self) -> ResourceStore<R> {
        ResourceStore::new(self.pool.clone())
    }

    /// Every distinct location used by a project, decoded from its keys
    pub async fn project_locations(
        &self,
        project_id: i64,
    ) -> Result<Vec<Location>, ScheduleServError> {
        let keys: Vec<Option<LocationKey>> = sqlx::query_scalar(PROJECT_LOCATIONS_SQL)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(keys.into_iter().flatten().map(Location::from_key).collect())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), ScheduleServError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
