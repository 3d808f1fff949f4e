use std::marker::PhantomData;

use crate::{
    entities::{record_id, CollectionRecord},
    errors::AppError,
    repositories::content::ContentRepository,
};

/// The Collection Service: generic list/upsert/delete over one collection.
/// Id assignment and whitelist projection happen here; everything else is a
/// single pass-through call to the store.
pub struct ContentHandler<E, R>
where
    E: CollectionRecord,
    R: ContentRepository<E>,
{
    pub repo: R,
    _record: PhantomData<E>,
}

impl<E, R> ContentHandler<E, R>
where
    E: CollectionRecord,
    R: ContentRepository<E>,
{
    pub fn new(repo: R) -> Self {
        ContentHandler {
            repo,
            _record: PhantomData,
        }
    }

    /// All records, newest-created first.
    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        self.repo.list().await
    }

    /// Assigns an id when the draft has none, coerces a submitted one to a
    /// string, assembles the full replacement row, and writes it. The only
    /// validation is the projection itself; field values pass through as-is.
    pub async fn upsert(&self, draft: E::Draft) -> Result<E, AppError> {
        let id = match E::draft_id(&draft) {
            Some(id) => id.as_str().to_owned(),
            None => record_id::generate().into_string(),
        };

        let record = E::assemble(id, draft);
        tracing::debug!(collection = E::COLLECTION, id = record.id(), "upserting record");
        self.repo.upsert(&record).await
    }

    /// Idempotent: deleting an id with no matching row still succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        tracing::debug!(collection = E::COLLECTION, id, "deleting record");
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::{Project, ProjectDraft};
    use crate::entities::record_id::RecordId;
    use crate::repositories::content::MockContentRepository;

    fn handler(
        repo: MockContentRepository<Project>,
    ) -> ContentHandler<Project, MockContentRepository<Project>> {
        ContentHandler::new(repo)
    }

    #[actix_rt::test]
    async fn upsert_without_id_generates_a_nonempty_one() {
        let mut repo = MockContentRepository::new();
        repo.expect_upsert()
            .withf(|record: &Project| {
                !record.id.is_empty() && record.id.chars().all(|c| c.is_ascii_digit())
            })
            .returning(|record| Ok(record.clone()));

        let stored = handler(repo)
            .upsert(ProjectDraft {
                title: Some("Portal".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(stored.title, "Portal");
        assert!(!stored.id.is_empty());
    }

    #[actix_rt::test]
    async fn upsert_keeps_a_submitted_id() {
        let mut repo = MockContentRepository::new();
        repo.expect_upsert()
            .withf(|record: &Project| record.id == "p_42")
            .returning(|record| Ok(record.clone()));

        let stored = handler(repo)
            .upsert(ProjectDraft {
                id: Some(RecordId::new("p_42")),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(stored.id, "p_42");
    }

    #[actix_rt::test]
    async fn unwhitelisted_draft_fields_never_reach_the_store() {
        let mut repo = MockContentRepository::new();
        repo.expect_upsert().returning(|record: &Project| {
            let stored = serde_json::to_value(record).unwrap();
            assert!(stored.get("clientType").is_none());
            Ok(record.clone())
        });

        handler(repo)
            .upsert(ProjectDraft {
                client_type: Some("External Client".into()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    #[actix_rt::test]
    async fn list_passes_an_empty_store_result_through() {
        let mut repo = MockContentRepository::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let records = handler(repo).list().await.unwrap();
        assert!(records.is_empty());
    }

    #[actix_rt::test]
    async fn delete_of_a_missing_id_succeeds() {
        let mut repo = MockContentRepository::new();
        repo.expect_delete()
            .withf(|id: &str| id == "never-existed")
            .returning(|_| Ok(()));

        assert!(handler(repo).delete("never-existed").await.is_ok());
    }

    #[actix_rt::test]
    async fn store_faults_surface_unretried() {
        let mut repo = MockContentRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Err(AppError::StoreError("relation does not exist".into())));

        let err = handler(repo).list().await.unwrap_err();
        assert!(matches!(err, AppError::StoreError(_)));
    }
}
