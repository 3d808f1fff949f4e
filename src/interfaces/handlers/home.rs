use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;

use crate::constants::START_TIME;

#[get("/")]
pub async fn home() -> impl Responder {
    let uptime = Utc::now().signed_duration_since(*START_TIME);
    HttpResponse::Ok().json(serde_json::json!({
        "message": "TigraTech content API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime.num_seconds(),
    }))
}
