use crate::config::ServerConfig;
use crate::services::credentials::store;
use actix_web::{web, HttpResponse, Responder};
use common::requests::Envelope;

pub(crate) async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    let installed = store::exists(&config.credentials_path).await;
    HttpResponse::Ok().json(Envelope::<()>::with_result(installed))
}
