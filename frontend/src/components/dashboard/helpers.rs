//! DOM utilities for the dashboard page.
//!
//! - **User feedback**: temporary toast notices, blocking alerts for server
//!   failures and the confirmation prompt before deleting credentials.
//! - **Error routing**: sends an [`ApiError`] either to an inline error
//!   region or to an alert, following the response envelope rules.
//! - **Downloads**: the export action needs the browser to receive a file
//!   from a POST, which is done by submitting a throwaway hidden form.

use common::error::ApiError;
use gloo_console::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};
use yew::NodeRef;

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Asks the user to confirm; a missing window or a blocked dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reports a failed round trip. A server-supplied message goes to `inline`;
/// anything else raises an alert and leaves `inline` as it was.
pub fn report_api_error(err: &ApiError, inline: &mut Option<String>) {
    error!(format!("request failed: {:?}", err));
    match err.inline_message() {
        Some(message) => *inline = Some(message.to_string()),
        None => alert(&err.to_string()),
    }
}

/// POSTs `key=data` to `url` through a hidden form so the browser handles the
/// file response as a download.
pub fn submit_download_form(url: &str, key: &str, data: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let form: HtmlFormElement = document.create_element("form")?.dyn_into()?;
    form.set_action(url);
    form.set_method("post");

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("hidden");
    input.set_name(key);
    input.set_value(data);

    form.append_child(&input)?;
    body.append_child(&form)?;
    let submitted = form.submit();
    form.remove();
    submitted
}

pub fn clear_file_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

pub fn scroll_into_view(node_ref: &NodeRef) {
    if let Some(element) = node_ref.cast::<web_sys::Element>() {
        element.scroll_into_view();
    }
}
