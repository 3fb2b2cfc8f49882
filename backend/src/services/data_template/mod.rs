//! Suggested field types for the columns of an uploaded CSV.
//!
//! The template is a headerless CSV of `name,label,code` rows accumulated from
//! earlier builds. The dashboard posts the column names it just parsed and
//! receives the matching rows, which it uses to preselect the type dropdowns.
//! Once a build passes validation, the chosen types are posted back and merged
//! into the file.
//!
//! Routes:
//! - `POST /api/v1/data_template/details` with `{"data": [names]}`, answering
//!   `{success: true, data: [[name, label, code], ...]}`.
//! - `POST /api/v1/data_template/update` with `{"data": [[name, label, code], ...]}`,
//!   answering `{success: true}`.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod details;
mod update;
pub mod template;

const API_PATH: &str = "/api/v1/data_template";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/details", post().to(details::process))
        .route("/update", post().to(update::process))
}

#[cfg(test)]
mod tests;
