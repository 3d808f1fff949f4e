use actix_web::web;

use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(content::list_projects))
                    .route(web::post().to(content::upsert_project)),
            )
            .service(web::resource("/{id}").route(web::delete().to(content::delete_project))),
    );

    cfg.service(
        web::scope("/blogs")
            .service(
                web::resource("")
                    .route(web::get().to(content::list_blogs))
                    .route(web::post().to(content::upsert_blog)),
            )
            .service(web::resource("/{id}").route(web::delete().to(content::delete_blog))),
    );

    cfg.service(
        web::scope("/services")
            .service(
                web::resource("")
                    .route(web::get().to(content::list_services))
                    .route(web::post().to(content::upsert_service)),
            )
            .service(web::resource("/{id}").route(web::delete().to(content::delete_service))),
    );
}
