//! Properties for the `RecordTable` component.

use common::config::AppConfig;
use yew::prelude::*;

/// Configuration handed down from the app root. The component builds its
/// remote client from this value instead of reading ambient state, so a
/// parent can point it at any repository or at fake settings.
#[derive(Properties, PartialEq, Clone)]
pub struct RecordTableProps {
    pub config: AppConfig,
}
