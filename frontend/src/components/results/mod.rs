//! Prioritized customer list produced by the last successful build.

use common::model::result::ResultTable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsTableProps {
    pub table: ResultTable,
    pub on_export: Callback<()>,
}

#[function_component(ResultsTable)]
pub fn results_table(props: &ResultsTableProps) -> Html {
    if props.table.columns.is_empty() {
        return html! {
            <>
                <h2>{"Results"}</h2>
                <p class="muted">{"Build a model to see the prioritized customer list."}</p>
            </>
        };
    }

    let on_export = {
        let cb = props.on_export.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <>
            <h2>{"Results"}</h2>
            <button id="export-button" onclick={on_export}>{"Export to Excel"}</button>
            <table class="results">
                <thead>
                    <tr>{ for props.table.columns.iter().map(|c| html! { <th>{ c.clone() }</th> }) }</tr>
                </thead>
                <tbody>
                    {
                        for props.table.rows.iter().map(|row| html! {
                            <tr>{ for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }</tr>
                        })
                    }
                </tbody>
            </table>
        </>
    }
}
