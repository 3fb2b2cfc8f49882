use crate::config::ServerConfig;
use crate::services::credentials::store;
use actix_web::{web, HttpResponse, Responder};
use common::requests::Envelope;
use log::{info, warn};

pub(crate) async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    match store::remove(&config.credentials_path).await {
        Ok(()) => {
            info!("Removed credentials file {}", config.credentials_path.display());
            HttpResponse::Ok().json(Envelope::<()>::ok())
        }
        Err(e) => {
            warn!("Credential removal failed: {}", e);
            HttpResponse::Ok().json(Envelope::<()>::failed(e.to_string()))
        }
    }
}
