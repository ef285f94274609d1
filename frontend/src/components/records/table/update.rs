//! Update function for the record table, Elm style: receive the state and a
//! `Msg`, mutate, return whether to re-render.
//!
//! Store mutations (add, delete, edit) complete synchronously before the next
//! interaction is processed. Fetch and save are the only suspension points;
//! either updates store and marker fully or not at all.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::record::column_set;
use common::store::RecordStore;

use crate::github::GithubClient;

use super::helpers::{show_alert, show_toast};
use super::messages::Msg;
use super::state::{Phase, RecordTable};

pub fn update(component: &mut RecordTable, ctx: &Context<RecordTable>, msg: Msg) -> bool {
    match msg {
        Msg::DocumentLoaded { rows, revision } => {
            component.store = RecordStore::from_fields(rows);
            component.columns = column_set(component.store.records());
            component.revision = Some(revision);
            component.phase = Phase::Ready;
            true
        }
        Msg::LoadFailed(err) => {
            error!(format!("fetch failed: {err}"));
            component.phase = Phase::ReadyWithError;
            show_alert(&format!("Failed to load data: {err}"));
            true
        }
        Msg::AddRow => {
            component.store.add_record();
            true
        }
        Msg::DeleteRow(position) => {
            component.store.delete_record(position);
            true
        }
        Msg::EditCell { row, field, value } => {
            component.store.update_field(row, &field, value);
            true
        }
        Msg::Save => {
            if !component.can_save() {
                return false;
            }
            let Some(revision) = component.revision.clone() else {
                return false;
            };
            component.saving = true;

            let records = component.store.records().to_vec();
            let client = GithubClient::new(ctx.props().config.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match client.save_document(&records, &revision).await {
                    Ok(new_revision) => link.send_message(Msg::SaveSucceeded(new_revision)),
                    Err(err) => link.send_message(Msg::SaveFailed(err)),
                }
            });
            true
        }
        Msg::SaveSucceeded(revision) => {
            component.saving = false;
            component.revision = Some(revision);
            show_toast("Changes saved.");
            true
        }
        Msg::SaveFailed(err) => {
            // Store and held marker stay as they were; pressing Save again
            // retries with the same state.
            component.saving = false;
            error!(format!("save failed: {err}"));
            show_alert(&format!("Failed to save: {err}"));
            true
        }
    }
}
