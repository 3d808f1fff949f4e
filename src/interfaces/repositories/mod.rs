pub mod content;
pub mod sqlx_repo;

mod blog;
mod project;
mod service;
