use crate::{auth, session_state::SessionStorage, utils};
use actix_web::{post, Responder};
use actix_web_flash_messages::FlashMessage;

#[post("/simulate-login")]
pub async fn simulate_login(storage: SessionStorage) -> impl Responder {
    let login = auth::simulate_login(&storage);
    FlashMessage::info(format!("Logged in as {}.", login.user.email)).send();
    utils::see_other("/")
}

#[post("/clear-session")]
pub async fn clear_session(storage: SessionStorage) -> impl Responder {
    auth::clear_session(&storage);
    FlashMessage::info("Session cleared.").send();
    utils::see_other("/")
}
