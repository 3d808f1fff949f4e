use crate::entities::{
    blog::{Blog, BlogDraft},
    project::{Project, ProjectDraft},
    record_id::RecordId,
};

/// Project edit form. `tech_stack` is edited as one comma-separated string
/// and converted back to the stored sequence on save. `client_type` is
/// edited like any other field but never survives persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub image_url: String,
    pub featured: bool,
    pub live_url: String,
    pub repo_url: String,
    pub client_type: String,
}

impl ProjectForm {
    pub fn from_record(record: &Project) -> Self {
        ProjectForm {
            id: Some(RecordId::new(record.id.clone())),
            title: record.title.clone(),
            description: record.description.clone(),
            tech_stack: record.tech_stack.join(", "),
            image_url: record.image_url.clone(),
            featured: record.featured,
            live_url: record.live_url.clone().unwrap_or_default(),
            repo_url: record.repo_url.clone().unwrap_or_default(),
            // Never persisted, so loading an existing record starts blank.
            client_type: String::new(),
        }
    }

    pub fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            id: self.id,
            title: Some(self.title),
            description: Some(self.description),
            tech_stack: Some(split_tech_stack(&self.tech_stack)),
            image_url: Some(self.image_url),
            featured: Some(self.featured),
            live_url: Some(self.live_url).filter(|s| !s.is_empty()),
            repo_url: Some(self.repo_url).filter(|s| !s.is_empty()),
            client_type: Some(self.client_type).filter(|s| !s.is_empty()),
        }
    }
}

/// Blog edit form. The persisted `excerpt` field is edited under the label
/// `description` and relabeled on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: String,
    pub author: String,
    pub image_url: String,
}

impl BlogForm {
    pub fn from_record(record: &Blog) -> Self {
        BlogForm {
            id: Some(RecordId::new(record.id.clone())),
            title: record.title.clone(),
            description: record.excerpt.clone(),
            content: record.content.clone(),
            date: record.date.clone(),
            author: record.author.clone(),
            image_url: record.image_url.clone(),
        }
    }

    pub fn into_draft(self) -> BlogDraft {
        BlogDraft {
            id: self.id,
            title: Some(self.title),
            excerpt: Some(self.description),
            content: Some(self.content),
            date: Some(self.date),
            author: Some(self.author),
            image_url: Some(self.image_url),
        }
    }
}

/// Split on comma, trim whitespace, drop empty segments.
fn split_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
