//! Update function for the dashboard component.
//!
//! Elm-style: receives the current `DashboardComponent` state, the `Context`
//! and a `Msg`, mutates the state and returns whether the view should
//! re-render. Network work is spawned with `spawn_local` and reports back
//! through a follow-up message carrying a typed `Result`.
//!
//! Key behaviors
//! - New CSV file: read header -> reset registry -> ask for the data template.
//! - Build: validate the visible fields, save their types to the data
//!   template, then post file + types + GA linkage.
//! - Export: resubmit the cached rows of the last build as a download.
//! - Credentials: check -> list profiles -> connected, plus upload and removal.
//!
//! Overlapping requests are not cancelled: a late data template answer for a
//! previous file still applies to whatever fields share its names.

use common::model::analytics::CredentialState;
use common::model::field::{FieldType, UNSET_CODE, UNSET_LABEL};
use common::model::result::ResultTable;
use common::requests::{BuildRequest, DataTemplateUpdate, FORM_EXPORT_DATA};
use common::routes;
use common::validation::ValidationReport;
use gloo_console::{error, log};
use gloo_file::futures::read_as_bytes;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::helpers::{
    alert, clear_file_input, confirm, report_api_error, scroll_into_view, show_toast,
    submit_download_form,
};
use super::messages::Msg;
use super::state::DashboardComponent;

const REMOVE_PROMPT: &str =
    "Are you sure you want to delete the google analytics credentials currently stored on the system?";

pub fn update(component: &mut DashboardComponent, ctx: &Context<DashboardComponent>, msg: Msg) -> bool {
    match msg {
        Msg::CsvSelected(file) => {
            component.csv_file = Some(file.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = gloo_file::File::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => link.send_message(Msg::HeaderParsed(
                        common::csv_header::parse_header_bytes(&bytes),
                    )),
                    Err(e) => link.send_message(Msg::HeaderReadFailed(e.to_string())),
                }
            });
            true
        }
        Msg::HeaderParsed(names) => {
            log!(format!("CSV header has {} column(s)", names.len()));
            component.load_header(names.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::fetch_data_template(names).await;
                link.send_message(Msg::TemplateLoaded(outcome));
            });
            true
        }
        Msg::HeaderReadFailed(reason) => {
            error!(format!("could not read CSV file: {}", reason));
            alert("The selected file could not be read.");
            false
        }
        Msg::TemplateLoaded(Ok(entries)) => {
            let updated = component.registry.apply_template(&entries);
            log!(format!("data template preselected {} field(s)", updated));
            true
        }
        Msg::TemplateLoaded(Err(err)) => {
            report_api_error(&err, &mut component.data_error);
            true
        }
        Msg::SetFieldType { index, code } => {
            let label = match FieldType::from_code(code) {
                Some(field_type) => field_type.label().to_string(),
                None if code == UNSET_CODE => UNSET_LABEL.to_string(),
                // A code only known to the data template keeps its label.
                None => component
                    .registry
                    .fields()
                    .get(index)
                    .filter(|f| f.type_code == code)
                    .map(|f| f.type_label.clone())
                    .unwrap_or_else(|| UNSET_LABEL.to_string()),
            };
            component.registry.set_type_at(index, code, &label);
            true
        }
        Msg::SetFieldVisible { index, visible } => {
            component.registry.set_visible_at(index, visible);
            true
        }

        Msg::Build => {
            if component.building {
                return false;
            }
            let snapshot = component.registry.snapshot();
            component.validation = ValidationReport::run(&snapshot, &component.session);
            if !component.validation.passed() {
                return true;
            }
            let Some(file) = component.csv_file.clone() else {
                show_toast("Select a CSV file first.");
                return true;
            };

            let request = BuildRequest::new(&snapshot, &component.session);
            let learned = DataTemplateUpdate::from_snapshot(&snapshot);
            component.building = true;
            component.data_error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::update_data_template(&learned).await;
                link.send_message(Msg::TemplateSaved(outcome));
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::build_model(&file, &request).await;
                link.send_message(Msg::BuildFinished(outcome));
            });
            true
        }
        Msg::BuildFinished(Ok(rows)) => {
            component.building = false;
            component.table = ResultTable::render(&rows);
            component.results.replace(rows);
            log!(format!("model returned {} customer(s)", component.table.rows.len()));
            scroll_into_view(&component.results_ref);
            true
        }
        Msg::BuildFinished(Err(err)) => {
            component.building = false;
            report_api_error(&err, &mut component.data_error);
            true
        }
        Msg::TemplateSaved(Ok(())) => {
            log!("data template updated");
            false
        }
        Msg::TemplateSaved(Err(err)) => {
            // Not fatal for the build.
            error!(format!("data template update failed: {}", err));
            false
        }
        Msg::Export => {
            match component.results.export_payload() {
                Some(Ok(payload)) => {
                    if let Err(e) =
                        submit_download_form(routes::EXPORT_TO_EXCEL, FORM_EXPORT_DATA, &payload)
                    {
                        error!("export form submission failed", e);
                        alert("Server Error: the export could not be started.");
                    }
                }
                Some(Err(e)) => error!(format!("could not serialize results: {}", e)),
                None => show_toast("Build the model before exporting."),
            }
            false
        }

        Msg::CheckCredentials => {
            component.transition(CredentialState::begin_check);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::check_credentials().await;
                link.send_message(Msg::CredentialsChecked(outcome));
            });
            true
        }
        Msg::CredentialsChecked(outcome) => {
            if let Err(err) = &outcome {
                report_api_error(err, &mut component.credential_error);
            }
            component.transition(|state, session| state.on_check(session, outcome));

            if component.credential_state == CredentialState::FetchingProfiles {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = api::list_profiles().await;
                    link.send_message(Msg::ProfilesLoaded(outcome));
                });
            }
            true
        }
        Msg::ProfilesLoaded(outcome) => {
            if let Err(err) = &outcome {
                report_api_error(err, &mut component.credential_error);
            }
            component.transition(|state, session| state.on_profiles(session, outcome));
            component.show_credential_upload = false;
            true
        }
        Msg::SelectProfile(id) => {
            component.transition(|state, session| state.select_profile(session, &id));
            true
        }
        Msg::CredentialFileSelected(file) => {
            component.uploading_credentials = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::upload_credentials(&file).await;
                link.send_message(Msg::CredentialsUploaded(outcome));
            });
            true
        }
        Msg::CredentialsUploaded(Ok(())) => {
            component.uploading_credentials = false;
            component.show_credential_upload = false;
            component.credential_error = None;
            ctx.link().send_message(Msg::CheckCredentials);
            true
        }
        Msg::CredentialsUploaded(Err(err)) => {
            component.uploading_credentials = false;
            report_api_error(&err, &mut component.credential_error);
            true
        }
        Msg::RemoveCredentials => {
            if confirm(REMOVE_PROMPT) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = api::remove_credentials().await;
                    link.send_message(Msg::CredentialsRemoved(outcome));
                });
            }
            false
        }
        Msg::CredentialsRemoved(Ok(())) => {
            component.transition(|state, session| state.on_removed(session));
            component.show_credential_upload = false;
            clear_file_input(&component.credential_input_ref);
            show_toast("Google Analytics credentials removed.");
            true
        }
        Msg::CredentialsRemoved(Err(err)) => {
            report_api_error(&err, &mut component.credential_error);
            true
        }
        Msg::ShowCredentialUpload(show) => {
            component.show_credential_upload = show;
            true
        }
    }
}
