//! Local storage of the Google Analytics service account file.
//!
//! The dashboard never reads the credential itself; it only needs to know
//! whether one is installed, to replace it and to remove it. Profile listing
//! with these credentials is served by the analytics service.
//!
//! The provided routes are:
//! - `GET /api/v1/ga/check_cred`: answers `{success: true, result: bool}`.
//! - `POST /api/v1/ga/cred_set`: multipart upload with a `file` part that must
//!   end in `.json`. Replaces any stored file.
//! - `GET /api/v1/ga/cred_remove`: deletes the stored file.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod check;
mod remove;
mod set;
pub mod store;

const API_PATH: &str = "/api/v1/ga";

/// Configures and returns the Actix scope for credential routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/check_cred", get().to(check::process))
        .route("/cred_set", post().to(set::process))
        .route("/cred_remove", get().to(remove::process))
}

#[cfg(test)]
mod tests;
