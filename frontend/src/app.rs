use common::config::AppConfig;
use yew::{html, Component, Context, Html};

use crate::components::records::table::RecordTable;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <RecordTable config={build_config()} />
            </div>
        }
    }
}

/// Connection settings baked in at build time. The values are captured here,
/// once, and flow down as a property; nothing else reads the environment.
fn build_config() -> AppConfig {
    AppConfig {
        token: option_env!("GITHUB_TOKEN").unwrap_or_default().to_string(),
        owner: option_env!("GITHUB_OWNER").unwrap_or_default().to_string(),
        repo: option_env!("GITHUB_REPO").unwrap_or_default().to_string(),
        file_path: option_env!("GITHUB_FILE_PATH").unwrap_or_default().to_string(),
    }
}
