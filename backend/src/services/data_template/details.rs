use crate::config::ServerConfig;
use crate::services::data_template::template;
use actix_web::{web, HttpResponse, Responder};
use common::model::field::TemplateEntry;
use common::requests::{DataTemplateRequest, Envelope};
use log::{debug, error};

pub(crate) async fn process(
    config: web::Data<ServerConfig>,
    req: web::Json<DataTemplateRequest>,
) -> impl Responder {
    let names = req.into_inner().data;
    let path = config.data_template_path.clone();

    let lookup = tokio::task::spawn_blocking(move || template::find_entries(&path, &names)).await;
    match lookup {
        Ok(Ok(entries)) => {
            debug!("Data template matched {} field(s)", entries.len());
            HttpResponse::Ok().json(Envelope::with_data(entries))
        }
        Ok(Err(e)) => {
            error!("{}", e);
            HttpResponse::Ok().json(Envelope::<Vec<TemplateEntry>>::failed(e.to_string()))
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
