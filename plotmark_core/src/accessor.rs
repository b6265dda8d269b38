// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-datum accessors.
//!
//! An accessor is invoked once per datum, in dataset order, with the datum and its position.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;

use crate::value::{Datum, Value};

/// A shared per-datum accessor: `(datum, position) -> value`.
pub type Accessor<T> = Rc<dyn Fn(&T, usize) -> Value>;

/// Reads the named field of each datum.
pub fn field<T: Datum + 'static>(name: impl Into<String>) -> Accessor<T> {
    let name = name.into();
    Rc::new(move |d: &T, _: usize| d.field(&name))
}

/// Returns each datum's position in the working dataset.
pub fn index_of<T: 'static>() -> Accessor<T> {
    Rc::new(|_: &T, i: usize| Value::Number(i as f64))
}

/// Returns each datum itself.
pub fn identity<T: Datum + 'static>() -> Accessor<T> {
    Rc::new(|d: &T, _: usize| d.to_value())
}

/// Returns `0` for every datum.
pub fn zero<T: 'static>() -> Accessor<T> {
    Rc::new(|_: &T, _: usize| Value::Number(0.0))
}

/// Returns the first element of each datum.
pub fn first<T: Datum + 'static>() -> Accessor<T> {
    Rc::new(|d: &T, _: usize| d.nth(0))
}

/// Returns the second element of each datum.
pub fn second<T: Datum + 'static>() -> Accessor<T> {
    Rc::new(|d: &T, _: usize| d.nth(1))
}
