use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InterpolateError, Result};

/// Token names (without `%` delimiters) mapped to their replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "BTreeMap<String, String>")]
pub struct Replacements {
    entries: BTreeMap<String, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::try_from(value)
    }
}

impl From<BTreeMap<String, String>> for Replacements {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl From<Replacements> for BTreeMap<String, String> {
    fn from(replacements: Replacements) -> Self {
        replacements.entries
    }
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TryFrom<Value> for Replacements {
    type Error = InterpolateError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(InterpolateError::ExpectedMapping);
        };
        let mut entries = BTreeMap::new();
        for (token, value) in map {
            match value {
                Value::String(text) => {
                    entries.insert(token, text);
                }
                _ => return Err(InterpolateError::ExpectedString { token }),
            }
        }
        Ok(Self { entries })
    }
}
