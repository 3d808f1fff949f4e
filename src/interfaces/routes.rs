use actix_web::web;

use crate::handlers::home::home;

mod auth;
mod content;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(auth::config_routes)
            .configure(content::config_routes),
    );
}
