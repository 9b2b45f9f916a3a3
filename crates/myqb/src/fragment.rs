//! Statement fragments held by [`QueryBuilder`](crate::QueryBuilder).

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Value;

/// Insertion-ordered `column -> value` mapping.
///
/// Used for insert rows, single-update SET values, and the conjunctive
/// equality fragments (WHERE, HAVING, bulk-update filters). Setting an existing
/// column replaces its value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueMap {
    entries: IndexMap<String, Value>,
}

/// One row of an INSERT.
pub type Row = ValueMap;

/// Conjunctive equality predicates (`a = ? AND b = ?`).
pub type Conditions = ValueMap;

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for ValueMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// One entry of a bulk update: which rows (`filter`) get which values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSpec {
    pub filter: Conditions,
    pub values: Row,
}

impl UpdateSpec {
    pub fn new(filter: impl Into<Conditions>, values: impl Into<Row>) -> Self {
        Self {
            filter: filter.into(),
            values: values.into(),
        }
    }
}

/// The data fragment, in the shape the next terminal operation reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Data {
    #[default]
    Empty,
    /// Rows for `insert`; the first row fixes the column list.
    Rows(Vec<Row>),
    /// Column list for `select`; empty or `[""]` selects `*`.
    Columns(Vec<String>),
    /// Specs for `update_bulk`.
    Updates(Vec<UpdateSpec>),
    /// SET values for `update`.
    Values(Row),
}

impl Data {
    /// `true` when the fragment holds nothing in any shape.
    pub fn is_empty(&self) -> bool {
        match self {
            Data::Empty => true,
            Data::Rows(rows) => rows.is_empty(),
            Data::Columns(cols) => cols.is_empty(),
            Data::Updates(specs) => specs.is_empty(),
            Data::Values(row) => row.is_empty(),
        }
    }

    pub(crate) fn rows(&self) -> &[Row] {
        match self {
            Data::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub(crate) fn columns(&self) -> &[String] {
        match self {
            Data::Columns(cols) => cols,
            _ => &[],
        }
    }

    pub(crate) fn updates(&self) -> &[UpdateSpec] {
        match self {
            Data::Updates(specs) => specs,
            _ => &[],
        }
    }

    pub(crate) fn values(&self) -> Option<&Row> {
        match self {
            Data::Values(row) if !row.is_empty() => Some(row),
            _ => None,
        }
    }
}

impl From<Vec<Row>> for Data {
    fn from(rows: Vec<Row>) -> Self {
        Data::Rows(rows)
    }
}

impl From<Vec<UpdateSpec>> for Data {
    fn from(specs: Vec<UpdateSpec>) -> Self {
        Data::Updates(specs)
    }
}

impl From<Vec<String>> for Data {
    fn from(cols: Vec<String>) -> Self {
        Data::Columns(cols)
    }
}

impl From<&[&str]> for Data {
    fn from(cols: &[&str]) -> Self {
        Data::Columns(cols.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Data {
    fn from(cols: [&str; N]) -> Self {
        Data::Columns(cols.iter().map(|c| c.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_map_keeps_first_position() {
        let mut m = ValueMap::from([("id", 1), ("age", 2)]);
        m.set("id", 9);
        assert_eq!(m.columns().collect::<Vec<_>>(), vec!["id", "age"]);
        assert_eq!(m.get("id"), Some(&Value::Int(9)));
    }

    #[test]
    fn data_shape_accessors() {
        let data = Data::from(["name", "age"]);
        assert_eq!(data.columns().len(), 2);
        assert!(data.rows().is_empty());
        assert!(data.updates().is_empty());
        assert!(data.values().is_none());
        assert!(Data::Rows(vec![]).is_empty());
        assert!(Data::Values(Row::new()).values().is_none());
    }
}
