use crate::value::Value;
use json::parse;
use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::collections::BTreeMap;
use std::collections::btree_map::{IntoIter, Iter, Keys, Values};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[derive(
    Eq, Clone, Debug, Default, Serialize, Deserialize, Ord, PartialOrd, Readable, Writable,
)]
pub struct Dict {
    values: BTreeMap<String, Value>,
}

impl Dict {
    pub fn new(values: BTreeMap<String, Value>) -> Self {
        Dict { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: String, value: Value) {
        self.values.insert(key, value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.values.keys()
    }

    pub fn values(&self) -> Values<'_, String, Value> {
        self.values.values()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn from_json(value: &str) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in parse(value).unwrap().entries() {
            map.insert(key.into(), value.into());
        }
        Dict { values: map }
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Hash for Dict {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl From<BTreeMap<String, Value>> for Dict {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Dict::new(values)
    }
}

impl Display for Dict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.values
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
