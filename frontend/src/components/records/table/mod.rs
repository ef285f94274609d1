//! Editable record table: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! On first render the component spawns the initial fetch; the session then
//! stays in `Ready` (or `ReadyWithError` after a failed fetch) for its whole
//! life, with edits applied synchronously to the store and save running as a
//! transient background operation.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::github::GithubClient;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordTableProps;
pub use state::RecordTable;

impl Component for RecordTable {
    type Message = Msg;
    type Properties = RecordTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RecordTable::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let client = GithubClient::new(ctx.props().config.clone());
            spawn_local(async move {
                match client.fetch_document().await {
                    Ok((rows, revision)) => {
                        link.send_message(Msg::DocumentLoaded { rows, revision });
                    }
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}
