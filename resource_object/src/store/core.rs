use crate::errors::ResourceError;
use crate::field::Resource;
use crate::DbPool;
use async_trait::async_trait;
use std::marker::PhantomData;

/// Operations every resource supports
#[async_trait]
pub trait StoreObject: Send + Sync {
    /// The partial-update record written by this store
    type Record: Resource;

    /// Insert the present fields of `record`, returning the new id
    async fn create(&self, record: &Self::Record) -> Result<i64, ResourceError>;

    /// Read a record back, formatted for output
    async fn get(&self, id: i64) -> Result<Option<serde_json::Value>, ResourceError>;

    /// Patch the present fields of `record` onto row `id`
    async fn update(&self, id: i64, record: &Self::Record) -> Result<i64, ResourceError>;

    /// Soft delete row `id`; `false` when there was nothing to delete
    async fn delete(&self, id: i64) -> Result<bool, ResourceError>;
}

/// Store writing one resource type to its relation
pub struct ResourceStore<R: Resource> {
    pub(crate) db_pool: DbPool,
    _phantom: PhantomData<R>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            _phantom: PhantomData,
        }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    pub fn table_name(&self) -> &'static str {
        R::TABLE
    }
}

impl<R: Resource> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        Self::new(self.db_pool.clone())
    }
}

impl<R: Resource> std::fmt::Debug for ResourceStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("table", &R::TABLE)
            .field("fields", &R::FIELDS.len())
            .finish()
    }
}
