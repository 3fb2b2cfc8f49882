use crate::config::ServerConfig;
use crate::services::credentials::store::{self, StoreError, ALLOWED_EXTENSIONS};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{Envelope, FORM_FILE};
use futures_util::StreamExt;
use log::{info, warn};

/// Failures are reported inside the envelope with `200 OK`, so the dashboard
/// can show the message next to the upload button.
pub(crate) async fn process(payload: Multipart, config: web::Data<ServerConfig>) -> impl Responder {
    match upload_credentials(payload, &config).await {
        Ok(()) => {
            info!("Installed new credentials file {}", config.credentials_path.display());
            HttpResponse::Ok().json(Envelope::<()>::ok())
        }
        Err(e) => {
            warn!("Credential upload rejected: {}", e);
            HttpResponse::Ok().json(Envelope::<()>::failed(e.to_string()))
        }
    }
}

async fn upload_credentials(mut payload: Multipart, config: &ServerConfig) -> Result<(), StoreError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| StoreError::Io(std::io::Error::other(e.to_string())))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some(FORM_FILE) {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        store::validate_filename(&filename, ALLOWED_EXTENSIONS)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| StoreError::Io(std::io::Error::other(e.to_string())))?;
            bytes.extend_from_slice(&chunk);
        }

        return store::replace(&config.credentials_path, &bytes).await;
    }

    Err(StoreError::MissingFilePart)
}
