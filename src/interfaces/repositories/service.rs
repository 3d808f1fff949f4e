use async_trait::async_trait;

use crate::{
    entities::service::Service, errors::AppError, repositories::content::ContentRepository,
    repositories::sqlx_repo::SqlxContentRepo,
};

#[async_trait]
impl ContentRepository<Service> for SqlxContentRepo {
    async fn list(&self) -> Result<Vec<Service>, AppError> {
        let records = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, title, description, icon, category
            FROM services
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn upsert(&self, record: &Service) -> Result<Service, AppError> {
        let stored = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (id, title, description, icon, category)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                icon = EXCLUDED.icon,
                category = EXCLUDED.category
            RETURNING id, title, description, icon, category
            "#,
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.icon)
        .bind(&record.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
