//! Component state for the editable record table.

use common::model::record::FIXED_FIELDS;
use common::store::RecordStore;

/// Session state. Entered once from `Loading` and never left afterwards;
/// save only toggles `saving` and, on success, the held revision marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Initial fetch in flight.
    Loading,
    /// Fetch succeeded; the store mirrors the remote document.
    Ready,
    /// Fetch failed; the table renders empty and saving stays disabled.
    ReadyWithError,
}

/// State container for the `RecordTable` component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct RecordTable {
    pub phase: Phase,

    /// The rows being edited. Client-side truth regardless of save outcome;
    /// a failed save leaves it untouched so Save can simply be retried.
    pub store: RecordStore,

    /// Column headers derived once from the loaded document: the fixed
    /// schema plus any extra remote fields.
    pub columns: Vec<String>,

    /// Revision marker from the most recent successful fetch or save. `None`
    /// until the first fetch succeeds.
    pub revision: Option<String>,

    /// A save is in flight. The Save action is disabled meanwhile, so saves
    /// are serialized.
    pub saving: bool,

    /// Guard so the first-render fetch runs only once.
    pub loaded: bool,
}

impl RecordTable {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            store: RecordStore::new(),
            columns: FIXED_FIELDS.iter().map(|f| f.to_string()).collect(),
            revision: None,
            saving: false,
            loaded: false,
        }
    }

    /// Save is available only when no save is pending and a revision marker
    /// is held; after a failed fetch there is nothing valid to present to
    /// the conditional write.
    pub fn can_save(&self) -> bool {
        !self.saving && self.revision.is_some()
    }
}
