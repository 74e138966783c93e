use crate::{auth, session_state::SessionStorage};
use actix_web::{get, post, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessStatus {
    is_admin: bool,
}

#[post("/api/session/login")]
pub async fn api_simulate_login(storage: SessionStorage) -> impl Responder {
    HttpResponse::Ok().json(auth::simulate_login(&storage))
}

#[get("/api/session/admin")]
pub async fn api_check_admin_access(storage: SessionStorage) -> impl Responder {
    HttpResponse::Ok().json(AccessStatus {
        is_admin: auth::check_admin_access(&storage),
    })
}

#[post("/api/session/clear")]
pub async fn api_clear_session(storage: SessionStorage) -> impl Responder {
    auth::clear_session(&storage);
    HttpResponse::NoContent()
}
