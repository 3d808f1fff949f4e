use serde::{Deserialize, Serialize};

use super::{record_id::RecordId, CollectionRecord};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Name of a known icon identifier; resolved by the frontend.
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CollectionRecord for Service {
    const COLLECTION: &'static str = "services";
    type Draft = ServiceDraft;

    fn draft_id(draft: &Self::Draft) -> Option<&RecordId> {
        draft.id.as_ref()
    }

    fn assemble(id: String, draft: Self::Draft) -> Self {
        Service {
            id,
            title: draft.title.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            icon: draft.icon.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
