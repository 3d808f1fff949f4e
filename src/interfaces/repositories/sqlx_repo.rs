use sqlx::PgPool;

/// Postgres-backed implementation of [`super::content::ContentRepository`]
/// for all three collections.
#[derive(Clone)]
pub struct SqlxContentRepo {
    pub pool: PgPool,
}

impl SqlxContentRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContentRepo { pool }
    }
}
