// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw channel values and the datum abstraction.
//!
//! Channels materialize into sequences of [`Value`]s. Datasets are slices of anything that
//! implements [`Datum`], which is how field-name channels and the positional accessors
//! ([`crate::first`], [`crate::second`]) read a single datum.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

/// A single materialized channel value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value (the datum lacks the field, or the source produced nothing).
    #[default]
    Missing,
    /// A numeric value. `NaN` is treated as undefined by [`defined`].
    Number(f64),
    /// A string value (categories, labels).
    Text(String),
    /// A boolean value.
    Bool(bool),
}

impl Value {
    /// Returns the numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string payload, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Returns whether a value should be rendered.
///
/// Missing values and `NaN` are undefined; everything else (including `false` and the empty
/// string) is defined.
pub fn defined(value: &Value) -> bool {
    match value {
        Value::Missing => false,
        Value::Number(v) => !v.is_nan(),
        Value::Text(_) | Value::Bool(_) => true,
    }
}

/// Coerces a value to text, keeping missing values missing.
pub fn string(value: &Value) -> Value {
    match value {
        Value::Missing => Value::Missing,
        Value::Number(v) => Value::Text(format!("{v}")),
        Value::Text(s) => Value::Text(s.clone()),
        Value::Bool(b) => Value::Text(b.to_string()),
    }
}

/// Coerces a value to a number, keeping missing values missing.
///
/// Text is parsed after trimming whitespace; empty text is `0` and unparseable text is `NaN`.
pub fn number(value: &Value) -> Value {
    match value {
        Value::Missing => Value::Missing,
        Value::Number(v) => Value::Number(*v),
        Value::Bool(b) => Value::Number(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                Value::Number(0.0)
            } else {
                Value::Number(s.parse().unwrap_or(f64::NAN))
            }
        }
    }
}

/// A single element of a dataset.
pub trait Datum {
    /// Reads a named field. Absent fields are [`Value::Missing`].
    fn field(&self, name: &str) -> Value;

    /// Reads a positional element (tuples, arrays).
    fn nth(&self, _index: usize) -> Value {
        Value::Missing
    }

    /// Returns the datum itself as a value, when it is scalar.
    fn to_value(&self) -> Value {
        Value::Missing
    }
}

impl Datum for Value {
    fn field(&self, _name: &str) -> Value {
        Value::Missing
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl Datum for f64 {
    fn field(&self, _name: &str) -> Value {
        Value::Missing
    }

    fn to_value(&self) -> Value {
        Value::Number(*self)
    }
}

impl Datum for Vec<Value> {
    fn field(&self, name: &str) -> Value {
        name.parse::<usize>()
            .map_or(Value::Missing, |index| self.nth(index))
    }

    fn nth(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }
}

/// A record datum: named fields with values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the record.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Datum for Row {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn defined_rejects_missing_and_nan_only() {
        assert!(!defined(&Value::Missing));
        assert!(!defined(&Value::Number(f64::NAN)));
        assert!(defined(&Value::Number(0.0)));
        assert!(defined(&Value::Bool(false)));
        assert!(defined(&Value::from("")));
    }

    #[test]
    fn coercions_keep_missing_values_missing() {
        assert_eq!(string(&Value::Missing), Value::Missing);
        assert_eq!(number(&Value::Missing), Value::Missing);
        assert_eq!(string(&Value::Number(1.0)), Value::from("1"));
        assert_eq!(number(&Value::from(" 2.5 ")), Value::Number(2.5));
        assert_eq!(number(&Value::from("")), Value::Number(0.0));
        assert_eq!(number(&Value::Bool(true)), Value::Number(1.0));
        assert!(
            number(&Value::from("abc"))
                .as_f64()
                .is_some_and(f64::is_nan)
        );
    }

    #[test]
    fn row_fields_default_to_missing() {
        let row = Row::new().with("y", 1.0).with("name", "a");
        assert_eq!(row.field("y"), Value::Number(1.0));
        assert_eq!(row.field("name"), Value::from("a"));
        assert_eq!(row.field("z"), Value::Missing);
        assert!(row.field("z").is_missing());
        assert_eq!(row.field("name").as_str(), Some("a"));
        assert_eq!(row.field("y").as_str(), None);
    }

    #[test]
    fn tuple_datums_support_positional_and_numeric_field_access() {
        let d: Vec<Value> = vec![Value::from("a"), Value::Number(3.0)];
        assert_eq!(d.nth(1), Value::Number(3.0));
        assert_eq!(d.field("0"), Value::from("a"));
        assert_eq!(d.field("2"), Value::Missing);
        assert_eq!(d.field("x"), Value::Missing);
    }
}
