use std::fmt::Display;

use serde_json::Value;

/// Placeholder for values with no textual representation.
pub const INVALID_VALUE: &str = "[invalid value]";

/// A single table cell value, before stringification.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent value, renders as an empty string.
    Empty,
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Composite or otherwise unrepresentable value.
    Opaque,
}

impl Cell {
    /// Build a text cell from anything with a `Display` impl.
    pub fn display(value: impl Display) -> Self {
        Cell::Text(value.to_string())
    }

    pub fn into_text(self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text,
            Cell::Bool(value) => value.to_string(),
            Cell::Int(value) => value.to_string(),
            Cell::Float(value) => value.to_string(),
            Cell::Opaque => INVALID_VALUE.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value.into())
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(value.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Cell::Empty,
        }
    }
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::String(text) => Cell::Text(text.clone()),
            Value::Bool(value) => Cell::Bool(*value),
            Value::Number(number) => Cell::Text(number.to_string()),
            Value::Array(_) | Value::Object(_) => Cell::Opaque,
        }
    }
}
