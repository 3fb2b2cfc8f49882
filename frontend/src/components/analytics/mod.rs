//! Google Analytics credential panel.
//!
//! Renders one of four stages: the upload input while no credentials are
//! installed, a progress line while checking or listing profiles, and the
//! profile dropdown with a remove link once connected. While connected the
//! user can reopen the upload input to replace the installed file.

use common::model::analytics::{AnalyticsSession, CredentialState, Profile, UNSELECTED_ID};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalyticsPanelProps {
    pub state: CredentialState,
    pub session: AnalyticsSession,
    pub error: Option<String>,
    pub uploading: bool,
    pub show_upload: bool,
    pub input_ref: NodeRef,
    pub on_file_selected: Callback<web_sys::File>,
    /// Emits the raw option value of the profile dropdown.
    pub on_profile_selected: Callback<String>,
    pub on_remove: Callback<()>,
    pub on_toggle_upload: Callback<bool>,
}

pub struct AnalyticsPanel;

impl Component for AnalyticsPanel {
    type Message = ();
    type Properties = AnalyticsPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AnalyticsPanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let body = match &props.state {
            CredentialState::NotConfigured => upload_input(props, "(Optional)"),
            CredentialState::Checking => progress("Checking Google Analytics credentials..."),
            CredentialState::FetchingProfiles => progress("Getting Google Analytics profiles..."),
            CredentialState::Connected { profiles } => html! {
                <>
                    { profile_select(profiles, props) }
                    {
                        if props.show_upload {
                            upload_input(props, "Uploading new credentials file")
                        } else {
                            html! {}
                        }
                    }
                </>
            },
        };

        html! {
            <div class="analytics-panel">
                { body }
                {
                    match &props.error {
                        Some(err) => html! { <p id="analytics-error" class="inline-error">{ err.clone() }</p> },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}

fn progress(text: &str) -> Html {
    html! { <p class="muted">{ text.to_string() }</p> }
}

fn upload_input(props: &AnalyticsPanelProps, caption: &str) -> Html {
    let on_file_selected = props.on_file_selected.clone();
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected.emit(file);
        }
    });
    let cancel = if matches!(props.state, CredentialState::Connected { .. }) {
        let toggle = props.on_toggle_upload.clone();
        html! {
            <button class="link-btn" onclick={Callback::from(move |_| toggle.emit(false))}>
                {"Cancel"}
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <div class="credential-upload">
            <label for="ga-credentials">{"Credentials file "}</label>
            <input
                id="ga-credentials"
                type="file"
                accept=".json"
                ref={props.input_ref.clone()}
                disabled={props.uploading}
                {onchange}
            />
            <span class="muted">{ format!(" {caption}") }</span>
            {
                if props.uploading {
                    html! { <span class="muted">{" Uploading..."}</span> }
                } else {
                    html! {}
                }
            }
            { cancel }
        </div>
    }
}

fn profile_select(profiles: &[Profile], props: &AnalyticsPanelProps) -> Html {
    let selected = props.session.selected_profile.id().to_string();
    let on_profile_selected = props.on_profile_selected.clone();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_profile_selected.emit(select.value());
    });
    let on_remove = {
        let cb = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_replace = {
        let cb = props.on_toggle_upload.clone();
        Callback::from(move |_: MouseEvent| cb.emit(true))
    };

    html! {
        <div class="profile-select">
            <label for="ga-profile">{"Profile "}</label>
            <select id="ga-profile" {onchange}>
                <option value={UNSELECTED_ID} selected={selected == UNSELECTED_ID}>
                    {"Select a profile"}
                </option>
                {
                    for profiles.iter().map(|p| html! {
                        <option value={p.id.clone()} selected={p.id == selected}>
                            { p.name.clone() }
                        </option>
                    })
                }
            </select>
            <button class="link-btn" onclick={on_replace}>{"Replace credentials"}</button>
            <button class="link-btn" onclick={on_remove}>{"Remove credentials"}</button>
        </div>
    }
}
