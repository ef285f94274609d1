use serde_json::Value;

/// Ordered field-name-to-value map for one row, exactly as it appears in the
/// remote JSON file. Insertion order is preserved so a round trip through the
/// editor does not reshuffle fields.
pub type Fields = serde_json::Map<String, Value>;

/// Field holding the row identifier inside the document itself.
pub const ID_FIELD: &str = "id";

/// The known column set, in display order. New rows are created with exactly
/// these fields; rows loaded from the remote file may carry extras.
pub const FIXED_FIELDS: [&str; 11] = [
    ID_FIELD,
    "Username",
    "adno",
    "Name",
    "Guardian",
    "address",
    "dateofbirth",
    "bloodgroup",
    "phone",
    "Password",
    "Photo",
];

/// One table row: the document fields plus a locally generated key used only
/// to keep the rendered row stable. The key is never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: u64,
    pub fields: Fields,
}

impl Record {
    /// Value of `field` rendered for a text input. Missing fields and JSON
    /// nulls render empty; non-string values keep their JSON notation.
    pub fn display(&self, field: &str) -> String {
        match self.fields.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Column headers for a loaded document: the fixed schema first, then any
/// extra remote fields in the order they are first encountered. Extra fields
/// are shown rather than silently dropped, so heterogeneous rows stay visible.
pub fn column_set(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = FIXED_FIELDS.iter().map(|f| f.to_string()).collect();
    for record in records {
        for name in record.fields.keys() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}
