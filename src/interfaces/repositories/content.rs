use async_trait::async_trait;

use crate::errors::AppError;

/// Store operations shared by every collection. One implementation exists
/// per entity so each carries its own literal column list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository<E: 'static + Send + Sync>: Send + Sync {
    /// All rows, newest creation first. Zero rows is an empty vec, not an
    /// error.
    async fn list(&self) -> Result<Vec<E>, AppError>;

    /// Insert-or-replace keyed on `id`. The stored row is returned as
    /// confirmation. `created_at` is set on first insert and never updated.
    async fn upsert(&self, record: &E) -> Result<E, AppError>;

    /// Removes at most one row. Succeeds even when nothing matched.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
