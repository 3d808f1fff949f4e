mod domain;
mod infrastructure;
mod interfaces;

pub mod client;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::db;
pub use interfaces::{handlers, repositories, routes};

use entities::{blog::Blog, project::Project, service::Service};
use repositories::sqlx_repo::SqlxContentRepo;
use use_cases::{auth::AuthHandler, content::ContentHandler};

pub type CollectionService<E> = ContentHandler<E, SqlxContentRepo>;

pub struct AppState {
    pub projects: CollectionService<Project>,
    pub blogs: CollectionService<Blog>,
    pub services: CollectionService<Service>,
    pub auth_handler: AuthHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        AppState {
            projects: ContentHandler::new(SqlxContentRepo::new(pool.clone())),
            blogs: ContentHandler::new(SqlxContentRepo::new(pool.clone())),
            services: ContentHandler::new(SqlxContentRepo::new(pool)),
            auth_handler: AuthHandler::new(config),
        }
    }
}
