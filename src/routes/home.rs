use crate::{auth, session_state::SessionStorage};
use actix_web::{get, http::header::ContentType, HttpResponse, Responder};
use actix_web_flash_messages::IncomingFlashMessages;
use std::fmt::Write;

#[get("/")]
pub async fn home(
    storage: SessionStorage,
    flash_messages: IncomingFlashMessages,
) -> actix_web::Result<impl Responder> {
    let mut msg_html = String::new();
    for m in flash_messages.iter() {
        writeln!(msg_html, "<p><i>{}</i></p>", htmlescape::encode_minimal(m.content()))
            .map_err(crate::utils::e500)?;
    }

    let status = if auth::check_admin_access(&storage) {
        "✅ Admin session active"
    } else {
        "❌ No admin session"
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Admin Login Test</title>
</head>
<body>
    <h1>Admin Login Test</h1>
    {msg_html}
    <p id="status">{status}</p>
    <form action="/simulate-login" method="post">
        <button type="submit">Simulate Admin Login</button>
    </form>
    <form action="/clear-session" method="post">
        <button type="submit">Clear Session</button>
    </form>
    <form action="/run-tests" method="post">
        <button type="submit">Run Basic Tests</button>
    </form>
    <form action="/run-final-test" method="post">
        <button type="submit">Run Final Test</button>
    </form>
</body>
</html>
        "#
        )))
}
