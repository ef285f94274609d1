use common::error::{RemoteReadError, RemoteWriteError};
use common::model::record::Fields;

pub enum Msg {
    DocumentLoaded { rows: Vec<Fields>, revision: String },
    LoadFailed(RemoteReadError),
    AddRow,
    DeleteRow(usize),
    EditCell { row: usize, field: String, value: String },
    Save,
    SaveSucceeded(String),
    SaveFailed(RemoteWriteError),
}
