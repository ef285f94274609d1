//! View rendering for the record table: a toolbar with Add/Save actions and
//! one table row per record, every cell an editable text input. Cells for
//! fields a row does not carry render empty and are created on first edit.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::record::Record;

use super::messages::Msg;
use super::state::{Phase, RecordTable};

pub fn view(component: &RecordTable, ctx: &Context<RecordTable>) -> Html {
    if component.phase == Phase::Loading {
        return html! { <p class="loading">{"Loading..."}</p> };
    }

    let link = ctx.link();
    html! {
        <div class="record-editor">
            <h1>{"Manage JSON Data"}</h1>
            { build_toolbar(component, link) }
            { build_table(component, link) }
        </div>
    }
}

fn build_toolbar(component: &RecordTable, link: &Scope<RecordTable>) -> Html {
    let save_hint = if component.revision.is_none() {
        "Saving is disabled because the document could not be loaded"
    } else if component.saving {
        "A save is already in progress"
    } else {
        "Push the current rows to the repository"
    };

    html! {
        <div class="toolbar">
            <button class="btn add" onclick={link.callback(|_| Msg::AddRow)}>
                {"Add row"}
            </button>
            <button
                class="btn save"
                disabled={!component.can_save()}
                title={save_hint}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if component.saving { "Saving..." } else { "Save changes" } }
            </button>
        </div>
    }
}

fn build_table(component: &RecordTable, link: &Scope<RecordTable>) -> Html {
    html! {
        <table class="record-table">
            <thead>
                <tr>
                    { for component.columns.iter().map(|column| html! { <th>{ column.clone() }</th> }) }
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    for component
                        .store
                        .records()
                        .iter()
                        .enumerate()
                        .map(|(row, record)| build_row(component, link, row, record))
                }
            </tbody>
        </table>
    }
}

fn build_row(
    component: &RecordTable,
    link: &Scope<RecordTable>,
    row: usize,
    record: &Record,
) -> Html {
    html! {
        <tr key={record.key.to_string()}>
            { for component.columns.iter().map(|column| build_cell(link, row, column, record)) }
            <td>
                <button class="btn delete" onclick={link.callback(move |_| Msg::DeleteRow(row))}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

fn build_cell(link: &Scope<RecordTable>, row: usize, column: &str, record: &Record) -> Html {
    let field = column.to_string();
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditCell {
            row,
            field: field.clone(),
            value: input.value(),
        }
    });

    html! {
        <td>
            <input value={record.display(column)} {oninput} />
        </td>
    }
}
