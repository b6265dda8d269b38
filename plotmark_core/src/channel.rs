// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Channel specifications and their resolved form.
//!
//! A [`ChannelSpec`] is declarative: it names where a channel's values come from. Resolving it
//! against a dataset yields a [`ResolvedChannel`] whose values line up with the mark's index.

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::accessor::Accessor;
use crate::value::{Datum, Value};

/// A factory for a fresh iterator over channel values.
pub type IterFn = Rc<dyn Fn() -> Box<dyn Iterator<Item = Value>>>;

/// Where a channel's values come from.
pub enum ChannelValue<T> {
    /// A field name, read from every datum.
    Field(String),
    /// A per-datum accessor.
    Accessor(Accessor<T>),
    /// Precomputed values, used as-is.
    Array(Rc<[Value]>),
    /// Values produced by an iterator, collected eagerly on resolution.
    Iter(IterFn),
}

impl<T> ChannelValue<T> {
    /// Creates a field-name source.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Creates an accessor source from a closure.
    pub fn accessor(f: impl Fn(&T, usize) -> Value + 'static) -> Self {
        Self::Accessor(Rc::new(f))
    }

    /// Creates a precomputed source from values.
    pub fn constant<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Creates an iterator-backed source.
    ///
    /// `f` is called once per resolution, so a mark can be initialized repeatedly.
    pub fn iter<I>(f: impl Fn() -> I + 'static) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Self::Iter(Rc::new(move || -> Box<dyn Iterator<Item = Value>> {
            Box::new(f().into_iter())
        }))
    }
}

impl<T> Clone for ChannelValue<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(name) => Self::Field(name.clone()),
            Self::Accessor(f) => Self::Accessor(f.clone()),
            Self::Array(values) => Self::Array(values.clone()),
            Self::Iter(f) => Self::Iter(f.clone()),
        }
    }
}

impl<T> fmt::Debug for ChannelValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Accessor(_) => f.write_str("Accessor(..)"),
            Self::Array(values) => f.debug_tuple("Array").field(values).finish(),
            Self::Iter(_) => f.write_str("Iter(..)"),
        }
    }
}

impl<T> From<&str> for ChannelValue<T> {
    fn from(value: &str) -> Self {
        Self::field(value)
    }
}

impl<T> From<String> for ChannelValue<T> {
    fn from(value: String) -> Self {
        Self::Field(value)
    }
}

impl<T> From<Accessor<T>> for ChannelValue<T> {
    fn from(value: Accessor<T>) -> Self {
        Self::Accessor(value)
    }
}

impl<T> From<Vec<Value>> for ChannelValue<T> {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value.into())
    }
}

impl<T> From<Rc<[Value]>> for ChannelValue<T> {
    fn from(value: Rc<[Value]>) -> Self {
        Self::Array(value)
    }
}

/// How a channel's scale treats its values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    /// Discrete categories with a uniform slot width.
    Band,
    /// Any other scale type, by name.
    Other(String),
}

impl ChannelKind {
    /// Returns `true` for [`ChannelKind::Band`].
    pub fn is_band(&self) -> bool {
        matches!(self, Self::Band)
    }
}

/// A declarative channel definition.
#[derive(Clone, Debug)]
pub struct ChannelSpec<T> {
    /// Channel name, unique within a mark when present.
    pub name: Option<String>,
    /// Value source. Required unless `optional` is set.
    pub value: Option<ChannelValue<T>>,
    /// Name of the scale this channel is mapped through.
    pub scale: Option<String>,
    /// Scale type hint.
    pub kind: Option<ChannelKind>,
    /// Human-readable label (defaults to the field name for field sources).
    pub label: Option<String>,
    /// Whether a missing value drops the channel instead of failing.
    pub optional: bool,
}

impl<T> ChannelSpec<T> {
    /// Creates an unnamed channel with the given value source.
    pub fn new(value: impl Into<ChannelValue<T>>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::empty()
        }
    }

    /// Creates a named channel with the given value source.
    pub fn named(name: impl Into<String>, value: impl Into<ChannelValue<T>>) -> Self {
        Self::new(value).with_name(name)
    }

    /// Creates a channel with no value source.
    pub fn empty() -> Self {
        Self {
            name: None,
            value: None,
            scale: None,
            kind: None,
            label: None,
            optional: false,
        }
    }

    /// Sets the channel name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets or clears the value source.
    pub fn with_value(mut self, value: Option<ChannelValue<T>>) -> Self {
        self.value = value;
        self
    }

    /// Sets the scale name.
    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    /// Sets the scale type hint.
    pub fn with_kind(mut self, kind: ChannelKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the channel optional.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// A channel after resolution against a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedChannel {
    /// Name of the scale this channel is mapped through.
    pub scale: Option<String>,
    /// Scale type hint.
    pub kind: Option<ChannelKind>,
    /// Materialized values, or `None` when they depend on data that is not available yet.
    pub value: Option<Rc<[Value]>>,
    /// Human-readable label.
    pub label: Option<String>,
}

impl ResolvedChannel {
    /// Returns the materialized values, if any.
    pub fn values(&self) -> Option<&[Value]> {
        self.value.as_deref()
    }
}

/// A validated channel owned by a [`crate::Mark`].
#[derive(Clone, Debug)]
pub(crate) struct Channel<T> {
    pub(crate) name: Option<String>,
    pub(crate) value: ChannelValue<T>,
    pub(crate) scale: Option<String>,
    pub(crate) kind: Option<ChannelKind>,
    pub(crate) label: Option<String>,
}

impl<T: Datum> Channel<T> {
    /// Materializes this channel over `data`, in data order.
    pub(crate) fn resolve(&self, data: Option<&[T]>) -> ResolvedChannel {
        let mut label = self.label.clone();
        let value = match &self.value {
            ChannelValue::Field(name) => {
                if label.is_none() {
                    label = Some(name.clone());
                }
                data.map(|data| data.iter().map(|d| d.field(name)).collect())
            }
            ChannelValue::Accessor(f) => data.map(|data| materialize(data, f)),
            ChannelValue::Array(values) => Some(values.clone()),
            ChannelValue::Iter(f) => Some(f().collect()),
        };
        ResolvedChannel {
            scale: self.scale.clone(),
            kind: self.kind.clone(),
            value,
            label,
        }
    }
}

fn materialize<T>(data: &[T], f: &Accessor<T>) -> Rc<[Value]> {
    data.iter().enumerate().map(|(i, d)| f(d, i)).collect()
}
