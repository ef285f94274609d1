//! In-memory row store backing the editable table.
//!
//! Owns the ordered record collection behind a small set of methods instead of
//! cloning arrays around event handlers. All mutations are synchronous and
//! never touch the network; the component re-renders from `records()`.

use serde_json::Value;

use crate::model::record::{Fields, ID_FIELD, FIXED_FIELDS, Record};

/// Ordered collection of records plus the identifier source for new rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
    next_key: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_key: 1,
        }
    }

    /// Adopts a decoded document. The identifier source is seeded above every
    /// numeric `id` already present so fresh rows never collide with loaded
    /// ones within the session.
    pub fn from_fields(fields_list: Vec<Fields>) -> Self {
        let mut next_key = fields_list.len() as u64 + 1;
        for fields in &fields_list {
            if let Some(id) = fields.get(ID_FIELD).and_then(numeric_id) {
                next_key = next_key.max(id + 1);
            }
        }
        let records = fields_list
            .into_iter()
            .enumerate()
            .map(|(i, fields)| Record {
                key: i as u64 + 1,
                fields,
            })
            .collect();
        Self { records, next_key }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a row with every fixed field empty except `id`, which gets a
    /// fresh identifier. Returns the new row's position.
    pub fn add_record(&mut self) -> usize {
        let key = self.next_key;
        self.next_key += 1;

        let mut fields = Fields::new();
        for name in FIXED_FIELDS {
            let value = if name == ID_FIELD {
                Value::from(key)
            } else {
                Value::String(String::new())
            };
            fields.insert(name.to_string(), value);
        }
        self.records.push(Record { key, fields });
        self.records.len() - 1
    }

    /// Removes the row at `position`. Out of range is a no-op; the remaining
    /// rows keep their order.
    pub fn delete_record(&mut self, position: usize) {
        if position < self.records.len() {
            self.records.remove(position);
        }
    }

    /// Sets `field` to `value` on the row at `position`, inserting the field
    /// if the row did not carry it. Rows keep whatever field set they came
    /// with; no uniform schema is enforced.
    pub fn update_field(&mut self, position: usize, field: &str, value: String) {
        if let Some(record) = self.records.get_mut(position) {
            record.fields.insert(field.to_string(), Value::String(value));
        }
    }
}

fn numeric_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
