use crate::{
    collaborators::Collaborators,
    harness::{BasicTestSuite, FinalTestRunner},
    session_state::SessionStorage,
};
use actix_web::{post, web, HttpResponse, Responder};

#[post("/api/tests/basic")]
pub async fn api_run_tests(
    storage: SessionStorage,
    collaborators: web::Data<Collaborators>,
) -> impl Responder {
    let result = BasicTestSuite::new(&storage, collaborators.get_ref())
        .run_all_tests()
        .await;
    HttpResponse::Ok().json(result)
}

#[post("/api/tests/final")]
pub async fn api_run_final_test(
    storage: SessionStorage,
    collaborators: web::Data<Collaborators>,
) -> impl Responder {
    let result = FinalTestRunner::new(&storage, collaborators.get_ref())
        .run_final_test()
        .await;
    HttpResponse::Ok().json(result)
}
