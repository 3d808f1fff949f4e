use serde::{de::DeserializeOwned, Serialize};

use crate::entities::{
    blog::{Blog, BlogDraft},
    project::{Project, ProjectDraft},
    record_id,
    responses::UpsertResponse,
    service::{Service, ServiceDraft},
    session::{LoginRequest, LoginResponse},
    CollectionRecord,
};

use super::session::SessionStore;

/// The Client Data Gateway. Every operation degrades to a safe default on
/// transport failure or a non-success status: list returns an empty vec,
/// save returns `None`, delete returns unit. Failures go to the tracing
/// diagnostic channel only; callers cannot tell "no data" from "request
/// failed". That is the contract, kept deliberately.
pub struct ContentGateway {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ContentGateway {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        ContentGateway {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ───── Projects ──────────────────────────────────────────────────

    pub async fn projects(&self) -> Vec<Project> {
        self.list::<Project>(Project::COLLECTION).await
    }

    pub async fn save_project(&self, mut draft: ProjectDraft) -> Option<Project> {
        if draft.id.is_none() {
            draft.id = Some(record_id::generate());
        }
        self.save(Project::COLLECTION, &draft).await
    }

    pub async fn delete_project(&self, id: &str) {
        self.delete(Project::COLLECTION, id).await
    }

    // ───── Blogs ─────────────────────────────────────────────────────

    pub async fn blogs(&self) -> Vec<Blog> {
        self.list::<Blog>(Blog::COLLECTION).await
    }

    pub async fn save_blog(&self, mut draft: BlogDraft) -> Option<Blog> {
        if draft.id.is_none() {
            draft.id = Some(record_id::generate());
        }
        self.save(Blog::COLLECTION, &draft).await
    }

    pub async fn delete_blog(&self, id: &str) {
        self.delete(Blog::COLLECTION, id).await
    }

    // ───── Services ──────────────────────────────────────────────────

    pub async fn services(&self) -> Vec<Service> {
        self.list::<Service>(Service::COLLECTION).await
    }

    pub async fn save_service(&self, mut draft: ServiceDraft) -> Option<Service> {
        if draft.id.is_none() {
            draft.id = Some(record_id::generate());
        }
        self.save(Service::COLLECTION, &draft).await
    }

    pub async fn delete_service(&self, id: &str) {
        self.delete(Service::COLLECTION, id).await
    }

    // ───── Authentication ────────────────────────────────────────────

    pub async fn login(&self, username: &str, password: &str) -> bool {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        match self.try_login(&request).await {
            Ok(logged_in) => logged_in,
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                false
            }
        }
    }

    pub fn logout(&self) {
        if let Err(e) = self.session.clear_token() {
            tracing::error!(error = %e, "failed to clear session token");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ───── Shared plumbing ───────────────────────────────────────────

    async fn list<E: DeserializeOwned>(&self, collection: &str) -> Vec<E> {
        match self.try_list(collection).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(collection, error = %e, "failed to fetch collection");
                Vec::new()
            }
        }
    }

    async fn try_list<E: DeserializeOwned>(&self, collection: &str) -> anyhow::Result<Vec<E>> {
        let response = self
            .http
            .get(format!("{}/api/{}", self.base_url, collection))
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::error!(collection, status = %response.status(), "list returned non-success");
            return Ok(Vec::new());
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn save<D, E>(&self, collection: &str, draft: &D) -> Option<E>
    where
        D: Serialize,
        E: DeserializeOwned,
    {
        match self.try_save(collection, draft).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(collection, error = %e, "failed to save record");
                None
            }
        }
    }

    async fn try_save<D, E>(&self, collection: &str, draft: &D) -> anyhow::Result<Option<E>>
    where
        D: Serialize,
        E: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(format!("{}/api/{}", self.base_url, collection))
            .json(draft);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            tracing::error!(collection, status = %response.status(), "save returned non-success");
            return Ok(None);
        }

        let body: UpsertResponse<E> = response.json().await?;
        if !body.success {
            return Ok(None);
        }
        Ok(Some(body.data))
    }

    async fn delete(&self, collection: &str, id: &str) {
        if let Err(e) = self.try_delete(collection, id).await {
            tracing::error!(collection, id, error = %e, "failed to delete record");
        }
    }

    async fn try_delete(&self, collection: &str, id: &str) -> anyhow::Result<()> {
        let mut request = self
            .http
            .delete(format!("{}/api/{}/{}", self.base_url, collection, id));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            tracing::error!(collection, id, status = %response.status(), "delete returned non-success");
        }
        Ok(())
    }

    async fn try_login(&self, request: &LoginRequest) -> anyhow::Result<bool> {
        let response = self
            .http
            .post(format!("{}/api/login", self.base_url))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body: LoginResponse = response.json().await?;
        if body.success {
            self.session.set_token(&body.token)?;
            return Ok(true);
        }
        Ok(false)
    }
}
