//! View rendering for the dashboard page.
//!
//! The page is four cards stacked vertically: the CSV upload with its field
//! types, the Google Analytics linkage, the Build button with validation
//! errors, and the results, which stay empty until the first successful
//! build.

use super::messages::Msg;
use super::state::DashboardComponent;
use crate::components::analytics::AnalyticsPanel;
use crate::components::data_sources::csv::CsvDataSourceComponent;
use crate::components::results::ResultsTable;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard-root">
            <div class="card">
                <h2>{"Customer data"}</h2>
                <CsvDataSourceComponent
                    fields={component.registry.fields().to_vec()}
                    on_file_selected={link.callback(Msg::CsvSelected)}
                    on_type_selected={link.callback(|(index, code)| Msg::SetFieldType { index, code })}
                    on_visibility_changed={link.callback(|(index, visible)| Msg::SetFieldVisible { index, visible })}
                />
            </div>
            <div class="card">
                <h2>{"Google Analytics"}</h2>
                <AnalyticsPanel
                    state={component.credential_state.clone()}
                    session={component.session.clone()}
                    error={component.credential_error.clone()}
                    uploading={component.uploading_credentials}
                    show_upload={component.show_credential_upload}
                    input_ref={component.credential_input_ref.clone()}
                    on_file_selected={link.callback(Msg::CredentialFileSelected)}
                    on_profile_selected={link.callback(Msg::SelectProfile)}
                    on_remove={link.callback(|_: ()| Msg::RemoveCredentials)}
                    on_toggle_upload={link.callback(Msg::ShowCredentialUpload)}
                />
            </div>
            { build_actions(component, link) }
            <div class="card" ref={component.results_ref.clone()}>
                <ResultsTable
                    table={component.table.clone()}
                    on_export={link.callback(|_: ()| Msg::Export)}
                />
            </div>
        </div>
    }
}

/// Build button, busy indicator and the error list under it.
fn build_actions(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let errors = component
        .validation
        .errors
        .iter()
        .chain(component.data_error.iter())
        .map(|err| html! { <li>{ err.clone() }</li> })
        .collect::<Html>();

    html! {
        <div class="card">
            <button
                id="build-button"
                disabled={!component.can_build()}
                onclick={link.callback(|_: MouseEvent| Msg::Build)}
            >
                {"Build"}
            </button>
            {
                if component.building {
                    html! { <span class="muted">{" Building model and scoring customers..."}</span> }
                } else {
                    html! {}
                }
            }
            <ul id="data-error" class="inline-error">{ errors }</ul>
        </div>
    }
}
