use async_trait::async_trait;

use crate::{
    entities::project::Project, errors::AppError, repositories::content::ContentRepository,
    repositories::sqlx_repo::SqlxContentRepo,
};

#[async_trait]
impl ContentRepository<Project> for SqlxContentRepo {
    async fn list(&self) -> Result<Vec<Project>, AppError> {
        let records = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, tech_stack, image_url, featured, live_url, repo_url
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn upsert(&self, record: &Project) -> Result<Project, AppError> {
        let stored = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (id, title, description, tech_stack, image_url, featured, live_url, repo_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                tech_stack = EXCLUDED.tech_stack,
                image_url = EXCLUDED.image_url,
                featured = EXCLUDED.featured,
                live_url = EXCLUDED.live_url,
                repo_url = EXCLUDED.repo_url
            RETURNING id, title, description, tech_stack, image_url, featured, live_url, repo_url
            "#,
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.tech_stack)
        .bind(&record.image_url)
        .bind(record.featured)
        .bind(&record.live_url)
        .bind(&record.repo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
