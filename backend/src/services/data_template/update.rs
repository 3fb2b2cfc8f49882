use crate::config::ServerConfig;
use crate::services::data_template::template;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{DataTemplateUpdate, Envelope};
use log::{error, info};

pub(crate) async fn process(
    config: web::Data<ServerConfig>,
    req: web::Json<DataTemplateUpdate>,
) -> impl Responder {
    let entries = req.into_inner().data;
    let path = config.data_template_path.clone();

    let merge = tokio::task::spawn_blocking(move || template::merge_entries(&path, &entries)).await;
    match merge {
        Ok(Ok(changed)) => {
            if changed > 0 {
                info!("Data template updated with {} row(s)", changed);
            }
            HttpResponse::Ok().json(Envelope::<()>::ok())
        }
        Ok(Err(e)) => {
            error!("{}", e);
            HttpResponse::Ok().json(Envelope::<()>::failed(e.to_string()))
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
