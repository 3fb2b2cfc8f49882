//! CSV data source: file picker plus one row per header column with an
//! include checkbox and a data type dropdown.
//!
//! The component holds no state of its own. It renders the fields it is given
//! and reports every user action to the parent through callbacks.

use common::model::field::{Field, FieldType, UNSET_CODE};
use web_sys::HtmlInputElement;
use web_sys::HtmlSelectElement;
use yew::{html, Callback, Component, Context, Event, Html, Properties, TargetCast};

#[derive(Properties, PartialEq)]
pub struct CsvDataSourceProps {
    pub fields: Vec<Field>,
    pub on_file_selected: Callback<web_sys::File>,
    /// `(row index, type code)`
    pub on_type_selected: Callback<(usize, i32)>,
    /// `(row index, visible)`
    pub on_visibility_changed: Callback<(usize, bool)>,
}

pub struct CsvDataSourceComponent;

impl Component for CsvDataSourceComponent {
    type Message = ();
    type Properties = CsvDataSourceProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CsvDataSourceComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_file_selected = props.on_file_selected.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file_selected.emit(file);
            }
        });

        html! {
            <div class="csv-data-source">
                <input id="csv-input" type="file" accept=".csv" {onchange} />
                {
                    if props.fields.is_empty() {
                        html! { <p class="muted">{"Select a CSV file to list its columns."}</p> }
                    } else {
                        html! {
                            <table class="csv-parser">
                                <thead>
                                    <tr><th>{"Use"}</th><th>{"Field"}</th><th>{"Data type"}</th></tr>
                                </thead>
                                <tbody>
                                    { for props.fields.iter().enumerate().map(|(index, field)| field_row(index, field, props)) }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        }
    }
}

fn field_row(index: usize, field: &Field, props: &CsvDataSourceProps) -> Html {
    let on_visibility = {
        let cb = props.on_visibility_changed.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((index, input.checked()));
        })
    };
    let on_type = {
        let cb = props.on_type_selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(code) = select.value().parse::<i32>() {
                cb.emit((index, code));
            }
        })
    };

    html! {
        <tr class={if field.visible { "" } else { "muted" }}>
            <td><input type="checkbox" checked={field.visible} onchange={on_visibility} /></td>
            <td class="data-member">{ field.name.clone() }</td>
            <td>{ type_select(field, on_type) }</td>
        </tr>
    }
}

fn type_select(field: &Field, onchange: Callback<Event>) -> Html {
    let unknown = field.type_code != UNSET_CODE && FieldType::from_code(field.type_code).is_none();

    html! {
        <select {onchange} disabled={!field.visible}>
            <option value={UNSET_CODE.to_string()} selected={field.is_unset()}>{"Select type"}</option>
            {
                for FieldType::ALL.iter().map(|t| html! {
                    <option value={t.code().to_string()} selected={t.code() == field.type_code}>
                        { t.label() }
                    </option>
                })
            }
            {
                if unknown {
                    html! {
                        <option value={field.type_code.to_string()} selected=true>
                            { field.type_label.clone() }
                        </option>
                    }
                } else {
                    html! {}
                }
            }
        </select>
    }
}
