use crate::storage::Storage;
use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// The browser-held session cookie, seen as persisted key-value storage.
pub struct SessionStorage(Session);

impl Storage for SessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get::<String>(key).unwrap_or_else(|e| {
            tracing::warn!(error.cause_chain = ?e, key, "Failed to read session entry");
            None
        })
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = self.0.insert(key, value) {
            tracing::warn!(error.cause_chain = ?e, key, "Failed to write session entry");
        }
    }

    fn remove_item(&self, key: &str) {
        self.0.remove(key);
    }
}

impl FromRequest for SessionStorage {
    type Error = <Session as FromRequest>::Error;

    type Future = Ready<Result<SessionStorage, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(SessionStorage(req.get_session())))
    }
}
