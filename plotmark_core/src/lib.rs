// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark and channel binding for a declarative plotting grammar.
//!
//! A mark describes its visual encoding as a list of named *channels*, each bound to a field
//! name, a per-datum accessor, or precomputed values:
//! - [`ChannelSpec`] is the declarative input, validated once by [`Mark::new`].
//! - [`Mark::initialize`] resolves every channel against a dataset into a [`Binding`]: an index
//!   plus one [`ResolvedChannel`] per channel, with values aligned to the index.
//!
//! Scales, geometry and rendering live downstream (see `plotmark_marks`).

#![no_std]

extern crate alloc;

mod accessor;
mod channel;
mod error;
mod mark;
mod value;

pub use accessor::{Accessor, field, first, identity, index_of, second, zero};
pub use channel::{ChannelKind, ChannelSpec, ChannelValue, IterFn, ResolvedChannel};
pub use error::MarkError;
pub use mark::{Binding, Mark, Transform};
pub use value::{Datum, Row, Value, defined, number, string};
