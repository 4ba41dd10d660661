//! @acp:module "Parameter Set"
//! @acp:summary "Typed parameter values extracted from a prompt"
//! @acp:domain generator
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value for a template parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(u64),
    Decimal(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(n) => write!(f, "{}", n),
            ParamValue::Decimal(d) => write!(f, "{}", d),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        ParamValue::Integer(n)
    }
}

impl From<f64> for ParamValue {
    fn from(d: f64) -> Self {
        ParamValue::Decimal(d)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

/// Named parameters resolved for one generation request.
///
/// Keys are the camelCase names exposed at the API boundary (`maxSupply`,
/// `mintPrice`, ...). Entries iterate and serialize in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Get a text parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
