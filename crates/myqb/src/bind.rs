//! Bind table: placeholder name to bound value plus driver hint.

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::Serialize;

use crate::value::{TypeHint, Value};

/// One bound parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bind {
    pub value: Value,
    #[serde(rename = "type")]
    pub hint: TypeHint,
}

impl Bind {
    /// Bind a value, inferring its hint.
    pub fn new(value: Value) -> Self {
        let hint = TypeHint::of(&value);
        Self { value, hint }
    }
}

/// Ordered mapping from placeholder (including the leading `:`) to [`Bind`].
///
/// Iteration order is emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BindTable {
    entries: IndexMap<String, Bind>,
}

impl BindTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value under `name`.
    ///
    /// Names must be unique within a table; use [`unique_name`](Self::unique_name)
    /// when a name is derived from caller-supplied column names.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        debug_assert!(
            !self.entries.contains_key(&name),
            "placeholder {name} bound twice"
        );
        self.entries.entry(name).or_insert_with(|| Bind::new(value));
    }

    /// `:base` if it is not bound yet, otherwise the first free `:base_2`,
    /// `:base_3`, ...
    pub fn unique_name(&self, base: &str) -> String {
        let mut name = format!(":{base}");
        let mut n = 2usize;
        while self.entries.contains_key(&name) {
            name = format!(":{base}_{n}");
            n += 1;
        }
        name
    }

    /// Look up a placeholder.
    pub fn get(&self, name: &str) -> Option<&Bind> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Bind> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a BindTable {
    type Item = (&'a String, &'a Bind);
    type IntoIter = Iter<'a, String, Bind>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for BindTable {
    type Item = (String, Bind);
    type IntoIter = indexmap::map::IntoIter<String, Bind>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
