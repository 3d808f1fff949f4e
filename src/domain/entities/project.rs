use serde::{Deserialize, Serialize};

use super::{record_id::RecordId, CollectionRecord};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: String,
    pub featured: bool,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Edited by the admin console but not part of the persisted schema; it
    /// is accepted here and dropped on assembly, matching observed behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_type: Option<String>,
}

impl CollectionRecord for Project {
    const COLLECTION: &'static str = "projects";
    type Draft = ProjectDraft;

    fn draft_id(draft: &Self::Draft) -> Option<&RecordId> {
        draft.id.as_ref()
    }

    fn assemble(id: String, draft: Self::Draft) -> Self {
        Project {
            id,
            title: draft.title.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            tech_stack: draft.tech_stack.unwrap_or_default(),
            image_url: draft.image_url.unwrap_or_default(),
            featured: draft.featured.unwrap_or_default(),
            live_url: draft.live_url,
            repo_url: draft.repo_url,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_replaces_every_column_with_draft_or_default() {
        let draft = ProjectDraft {
            title: Some("Portal".into()),
            tech_stack: Some(vec!["React".into(), "Node".into()]),
            ..Default::default()
        };

        let record = Project::assemble("1".into(), draft);

        assert_eq!(record.title, "Portal");
        assert_eq!(record.tech_stack, vec!["React", "Node"]);
        assert_eq!(record.description, "");
        assert!(!record.featured);
        assert_eq!(record.live_url, None);
    }

    #[test]
    fn unknown_fields_are_dropped_on_deserialization() {
        let draft: ProjectDraft = serde_json::from_value(serde_json::json!({
            "title": "Portal",
            "bogusField": 42
        }))
        .unwrap();
        assert_eq!(draft.title.as_deref(), Some("Portal"));
    }

    #[test]
    fn client_type_is_accepted_but_never_persisted() {
        let draft: ProjectDraft = serde_json::from_value(serde_json::json!({
            "title": "Portal",
            "clientType": "External Client"
        }))
        .unwrap();
        assert_eq!(draft.client_type.as_deref(), Some("External Client"));

        let record = Project::assemble("1".into(), draft);
        let stored = serde_json::to_value(&record).unwrap();
        assert!(stored.get("clientType").is_none());
    }

    #[test]
    fn record_serializes_with_camel_case_field_names() {
        let record = Project::assemble("1".into(), ProjectDraft::default());
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("techStack").is_some());
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("tech_stack").is_none());
    }

    #[test]
    fn numeric_draft_ids_are_coerced_to_strings() {
        let draft: ProjectDraft =
            serde_json::from_value(serde_json::json!({ "id": 1699000000000u64 })).unwrap();
        assert_eq!(
            Project::draft_id(&draft).map(RecordId::as_str),
            Some("1699000000000")
        );
    }
}
