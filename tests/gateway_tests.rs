use std::net::TcpListener;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use tigratech_backend::client::{gateway::ContentGateway, session::SessionStore};
use tigratech_backend::entities::{
    project::{Project, ProjectDraft},
    CollectionRecord,
};

const STUB_TOKEN: &str = "stub-token";

// A stand-in for the real backend with canned behaviors per collection:
// projects fault, blogs return an empty body, services return data.

async fn stub_list_projects() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "relation does not exist" }))
}

async fn stub_list_blogs() -> HttpResponse {
    HttpResponse::Ok().body("")
}

async fn stub_list_services() -> HttpResponse {
    HttpResponse::Ok().json(json!([{
        "id": "s1",
        "title": "Consulting",
        "description": "Advice",
        "icon": "wrench",
        "category": "Web Development"
    }]))
}

async fn stub_upsert_project(req: HttpRequest, draft: web::Json<ProjectDraft>) -> HttpResponse {
    let authorized = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", STUB_TOKEN))
        .unwrap_or(false);
    if !authorized {
        return HttpResponse::Unauthorized().json(json!({ "success": false }));
    }

    let draft = draft.into_inner();
    let id = draft
        .id
        .clone()
        .map(|id| id.into_string())
        .unwrap_or_else(|| "server-generated".into());
    let stored = Project::assemble(id, draft);
    HttpResponse::Ok().json(json!({ "success": true, "data": stored }))
}

async fn stub_delete_service() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "boom" }))
}

async fn stub_login(body: web::Json<serde_json::Value>) -> HttpResponse {
    if body["username"] == "admin" && body["password"] == "secret" {
        HttpResponse::Ok().json(json!({
            "success": true,
            "token": STUB_TOKEN,
            "user": { "name": "Admin" }
        }))
    } else {
        HttpResponse::Unauthorized()
            .json(json!({ "success": false, "message": "Invalid credentials" }))
    }
}

fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    let server = HttpServer::new(|| {
        App::new().service(
            web::scope("/api")
                .route("/projects", web::get().to(stub_list_projects))
                .route("/projects", web::post().to(stub_upsert_project))
                .route("/blogs", web::get().to(stub_list_blogs))
                .route("/services", web::get().to(stub_list_services))
                .route("/services/{id}", web::delete().to(stub_delete_service))
                .route("/login", web::post().to(stub_login)),
        )
    })
    .listen(listener)
    .expect("failed to listen")
    .workers(1)
    .run();

    tokio::spawn(server);
    address
}

fn gateway_at(address: &str, test_name: &str) -> ContentGateway {
    let path = std::env::temp_dir()
        .join(format!("tt-gateway-{}-{}", std::process::id(), test_name))
        .join("session.json");
    let _ = std::fs::remove_file(&path);
    ContentGateway::new(address, SessionStore::new(path))
}

#[actix_rt::test]
async fn a_store_fault_degrades_to_an_empty_list() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "fault");

    assert!(gateway.projects().await.is_empty());
}

#[actix_rt::test]
async fn an_empty_response_body_degrades_to_an_empty_list() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "empty");

    assert!(gateway.blogs().await.is_empty());
}

#[actix_rt::test]
async fn a_transport_failure_degrades_to_an_empty_list() {
    // Nothing listens here; the connection is refused.
    let gateway = gateway_at("http://127.0.0.1:1", "refused");

    assert!(gateway.services().await.is_empty());
}

#[actix_rt::test]
async fn lists_deserialize_stored_records() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "records");

    let services = gateway.services().await;
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].title, "Consulting");
    assert_eq!(services[0].icon, "wrench");
}

#[actix_rt::test]
async fn login_round_trip_persists_and_clears_the_token() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "login");

    assert!(!gateway.is_authenticated());
    assert!(!gateway.login("admin", "wrong").await);
    assert!(!gateway.is_authenticated());

    assert!(gateway.login("admin", "secret").await);
    assert!(gateway.is_authenticated());
    assert_eq!(gateway.session().token().as_deref(), Some(STUB_TOKEN));

    gateway.logout();
    assert!(!gateway.is_authenticated());
}

#[actix_rt::test]
async fn saves_without_a_session_degrade_to_none() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "save-noauth");

    let stored = gateway
        .save_project(ProjectDraft {
            title: Some("Portal".into()),
            ..Default::default()
        })
        .await;
    assert!(stored.is_none());
}

#[actix_rt::test]
async fn saves_assign_an_id_and_return_the_stored_record() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "save");
    assert!(gateway.login("admin", "secret").await);

    let stored = gateway
        .save_project(ProjectDraft {
            title: Some("Portal".into()),
            tech_stack: Some(vec!["React".into(), "Node".into()]),
            ..Default::default()
        })
        .await
        .expect("save should succeed with a session");

    assert_eq!(stored.title, "Portal");
    assert_eq!(stored.tech_stack, vec!["React", "Node"]);
    // The gateway fills a generated id before posting.
    assert!(!stored.id.is_empty());
    assert_ne!(stored.id, "server-generated");
}

#[actix_rt::test]
async fn deletes_swallow_failures() {
    let address = spawn_stub();
    let gateway = gateway_at(&address, "delete");

    // The stub faults on delete; the gateway logs and returns unit.
    gateway.delete_service("s1").await;
}
