use async_trait::async_trait;

use crate::{
    entities::blog::Blog, errors::AppError, repositories::content::ContentRepository,
    repositories::sqlx_repo::SqlxContentRepo,
};

#[async_trait]
impl ContentRepository<Blog> for SqlxContentRepo {
    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let records = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, excerpt, content, date, author, image_url
            FROM blogs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn upsert(&self, record: &Blog) -> Result<Blog, AppError> {
        let stored = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (id, title, excerpt, content, date, author, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                excerpt = EXCLUDED.excerpt,
                content = EXCLUDED.content,
                date = EXCLUDED.date,
                author = EXCLUDED.author,
                image_url = EXCLUDED.image_url
            RETURNING id, title, excerpt, content, date, author, image_url
            "#,
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(&record.excerpt)
        .bind(&record.content)
        .bind(&record.date)
        .bind(&record.author)
        .bind(&record.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
