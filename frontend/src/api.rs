//! Network calls made by the dashboard.
//!
//! Each call performs a single round trip with no retry or timeout and
//! returns a typed result. Bodies are decoded through
//! [`common::requests::decode_envelope`], so a missing `success` field is
//! reported as [`ApiError::Malformed`] and `success: false` as
//! [`ApiError::Rejected`].

use common::error::ApiError;
use common::model::analytics::Profile;
use common::model::field::TemplateEntry;
use common::model::result::ResultRow;
use common::requests::{
    decode_envelope, Ack, BuildRequest, BuildResult, CredentialCheck, DataTemplate,
    DataTemplateRequest, DataTemplateUpdate, ProfileList, FORM_CONNECT_GA, FORM_FIELDS, FORM_FILE,
};
use common::routes;
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Turns a finished request into its body text. Non-2xx answers count as
/// transport failures, like any other request that did not reach the handler.
async fn read_body(response: Result<Response, gloo_net::Error>) -> Result<String, ApiError> {
    let response = response.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Transport(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

fn file_form(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FORM_FILE, file, &file.name())
        .map_err(js_error)?;
    Ok(form)
}

pub async fn check_credentials() -> Result<bool, ApiError> {
    let body = read_body(Request::get(routes::CREDENTIAL_CHECK).send().await).await?;
    decode_envelope::<CredentialCheck>(&body).map(|check| check.result)
}

pub async fn list_profiles() -> Result<Vec<Profile>, ApiError> {
    let body = read_body(Request::get(routes::PROFILES).send().await).await?;
    decode_envelope::<ProfileList>(&body).map(|list| list.data)
}

pub async fn upload_credentials(file: &File) -> Result<(), ApiError> {
    let form = file_form(file)?;
    let request = Request::post(routes::CREDENTIAL_SET)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = read_body(request.send().await).await?;
    decode_envelope::<Ack>(&body).map(|_| ())
}

pub async fn remove_credentials() -> Result<(), ApiError> {
    let body = read_body(Request::get(routes::CREDENTIAL_REMOVE).send().await).await?;
    decode_envelope::<Ack>(&body).map(|_| ())
}

pub async fn fetch_data_template(names: Vec<String>) -> Result<Vec<TemplateEntry>, ApiError> {
    let request = Request::post(routes::DATA_TEMPLATE)
        .json(&DataTemplateRequest { data: names })
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = read_body(request.send().await).await?;
    decode_envelope::<DataTemplate>(&body).map(|template| template.data)
}

pub async fn update_data_template(update: &DataTemplateUpdate) -> Result<(), ApiError> {
    let request = Request::post(routes::DATA_TEMPLATE_UPDATE)
        .json(update)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = read_body(request.send().await).await?;
    decode_envelope::<Ack>(&body).map(|_| ())
}

/// Posts the CSV file with its field types and analytics linkage.
pub async fn build_model(file: &File, request: &BuildRequest) -> Result<Vec<ResultRow>, ApiError> {
    let fields = request
        .fields_json()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_str(FORM_CONNECT_GA, &request.connect_ga)
        .map_err(js_error)?;
    form.append_with_str(FORM_FIELDS, &fields).map_err(js_error)?;
    form.append_with_blob_and_filename(FORM_FILE, file, &file.name())
        .map_err(js_error)?;

    let http_request = Request::post(routes::MODEL_BUILD)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = read_body(http_request.send().await).await?;
    decode_envelope::<BuildResult>(&body).map(|result| result.data)
}
