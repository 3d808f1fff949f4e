use serde::{Deserialize, Serialize};

use super::{record_id::RecordId, CollectionRecord};

/// `date` stays a plain string: value formats are deliberately not validated
/// anywhere in the write path, only the field whitelist is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub author: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CollectionRecord for Blog {
    const COLLECTION: &'static str = "blogs";
    type Draft = BlogDraft;

    fn draft_id(draft: &Self::Draft) -> Option<&RecordId> {
        draft.id.as_ref()
    }

    fn assemble(id: String, draft: Self::Draft) -> Self {
        Blog {
            id,
            title: draft.title.unwrap_or_default(),
            excerpt: draft.excerpt.unwrap_or_default(),
            content: draft.content.unwrap_or_default(),
            date: draft.date.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            image_url: draft.image_url.unwrap_or_default(),
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
    fn a_resubmitted_draft_overwrites_fields_it_omits() {
        // Full-replace semantics: saving without `content` clears it.
        let first = Blog::assemble(
            "b1".into(),
            BlogDraft {
                title: Some("Launch".into()),
                content: Some("Long form".into()),
                ..Default::default()
            },
        );
        assert_eq!(first.content, "Long form");

        let second = Blog::assemble(
            "b1".into(),
            BlogDraft {
                title: Some("Launch, revised".into()),
                ..Default::default()
            },
        );
        assert_eq!(second.content, "");
        assert_eq!(second.title, "Launch, revised");
    }

    #[test]
    fn malformed_dates_pass_through_unvalidated() {
        let record = Blog::assemble(
            "b2".into(),
            BlogDraft {
                date: Some("not-a-date".into()),
                ..Default::default()
            },
        );
        assert_eq!(record.date, "not-a-date");
    }
}
