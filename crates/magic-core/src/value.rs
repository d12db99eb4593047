use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dynamically typed value passed to gallery functions and persisted in
/// records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    /// Reference to a gallery function by name
    Function(String),
}

impl Value {
    /// The list `[0, 1, .., n-1]`
    pub fn range(n: i64) -> Self {
        Value::List(Self::range_items(n))
    }

    /// The items of `range(n)`, for splatting into an argument list
    pub fn range_items(n: i64) -> Vec<Value> {
        (0..n).map(Value::Int).collect()
    }

    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(name.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
        }
    }

    /// Whether this value is, or contains, a NaN or infinite float
    pub fn has_non_finite_float(&self) -> bool {
        match self {
            Value::Float(x) => !x.is_finite(),
            Value::List(items) => items.iter().any(Value::has_non_finite_float),
            Value::Map(map) => map.values().any(Value::has_non_finite_float),
            _ => false,
        }
    }

    /// Developer-facing rendering; strings come out quoted
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s.replace('\'', "\\'")),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                let formatted: Vec<String> = items.iter().map(Value::repr).collect();
                write!(f, "[{}]", formatted.join(", "))
            }
            Value::Map(map) => {
                let formatted: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("'{}': {}", k, v.repr()))
                    .collect();
                write!(f, "{{{}}}", formatted.join(", "))
            }
            Value::Function(name) => write!(f, "<function {name}>"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Map(map)
    }
}
