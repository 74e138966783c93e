use crate::{
    collaborators::Collaborators,
    harness::{BasicTestSuite, FinalTestRunner, LogEntry},
    session_state::SessionStorage,
};
use actix_web::{http::header::ContentType, post, web, HttpResponse, Responder};
use std::fmt::Write;

#[post("/run-tests")]
pub async fn run_tests(
    storage: SessionStorage,
    collaborators: web::Data<Collaborators>,
) -> actix_web::Result<impl Responder> {
    let result = BasicTestSuite::new(&storage, collaborators.get_ref())
        .run_all_tests()
        .await;

    let headline = format!(
        "{} passed, {} failed, {} total",
        result.passed, result.failed, result.total
    );
    report("Basic Test Results", result.success, &headline, &result.results)
}

#[post("/run-final-test")]
pub async fn run_final_test(
    storage: SessionStorage,
    collaborators: web::Data<Collaborators>,
) -> actix_web::Result<impl Responder> {
    let result = FinalTestRunner::new(&storage, collaborators.get_ref())
        .run_final_test()
        .await;

    let headline = match (&result.message, &result.error) {
        (_, Some(error)) => error.as_str(),
        (Some(message), None) => message.as_str(),
        (None, None) => "",
    };
    report("Final Test Result", result.success, headline, &result.results)
}

fn report(
    title: &str,
    success: bool,
    headline: &str,
    entries: &[LogEntry],
) -> actix_web::Result<HttpResponse> {
    let outcome = if success { "PASSED" } else { "FAILED" };
    let headline = htmlescape::encode_minimal(headline);

    let mut log_html = String::new();
    for entry in entries {
        writeln!(
            log_html,
            r#"<li class="{kind}">[{timestamp}] {message}</li>"#,
            kind = entry.kind.as_str(),
            timestamp = entry.timestamp,
            message = htmlescape::encode_minimal(&entry.message),
        )
        .map_err(crate::utils::e500)?;
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}: {outcome}</h1>
    <p>{headline}</p>
    <ul>
{log_html}    </ul>
    <p><a href="/">&lt;- Back</a></p>
</body>
</html>
"#
        )))
}
