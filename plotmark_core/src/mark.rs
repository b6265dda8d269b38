// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: validated channel lists that bind to data.
//!
//! A [`Mark`] validates its channels once, at construction. [`Mark::initialize`] then resolves
//! every channel against a dataset and can be called any number of times (for example when the
//! data changes); it never mutates the mark.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::channel::{Channel, ChannelSpec, ResolvedChannel};
use crate::error::MarkError;
use crate::value::Datum;

/// A data transform applied before channels are resolved.
///
/// Returning `Cow::Borrowed` passes the input through unchanged.
pub type Transform<T> = Rc<dyn for<'a> Fn(&'a [T]) -> Cow<'a, [T]>>;

/// The result of binding a mark's channels to data.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    /// One slot per datum of the working dataset, or `None` when there is no data yet.
    pub index: Option<Vec<usize>>,
    /// Resolved channels in declaration order, paired with their names.
    pub channels: Vec<(Option<String>, ResolvedChannel)>,
}

impl Binding {
    /// Returns the resolved channel with the given name.
    pub fn channel(&self, name: &str) -> Option<&ResolvedChannel> {
        self.channels
            .iter()
            .find(|(n, _)| n.as_deref() == Some(name))
            .map(|(_, c)| c)
    }

    /// Converts the named channels into a map keyed by name. Unnamed channels are dropped.
    pub fn into_named(self) -> HashMap<String, ResolvedChannel> {
        self.channels
            .into_iter()
            .filter_map(|(name, channel)| Some((name?, channel)))
            .collect()
    }
}

/// A set of validated channels plus an optional data transform.
pub struct Mark<T: Clone> {
    data: Option<Rc<[T]>>,
    channels: SmallVec<[Channel<T>; 4]>,
    transform: Option<Transform<T>>,
}

impl<T: Clone> Clone for Mark<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            channels: self.channels.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<T: Clone> fmt::Debug for Mark<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mark")
            .field("data_len", &self.data.as_ref().map(|d| d.len()))
            .field(
                "channels",
                &self.channels.iter().map(|c| &c.name).collect::<Vec<_>>(),
            )
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

impl<T: Clone + Datum> Mark<T> {
    /// Validates `specs` and creates a mark.
    ///
    /// Optional channels without a value are dropped. Required channels without a value and
    /// repeated names are errors. Retained channels keep their declaration order.
    pub fn new(specs: impl IntoIterator<Item = ChannelSpec<T>>) -> Result<Self, MarkError> {
        let mut names: HashSet<String> = HashSet::new();
        let mut channels = SmallVec::new();

        for spec in specs {
            let ChannelSpec {
                name,
                value,
                scale,
                kind,
                label,
                optional,
            } = spec;

            let Some(value) = value else {
                if optional {
                    log::debug!("dropping optional channel {name:?} without a value");
                    continue;
                }
                return Err(MarkError::MissingChannelValue { name });
            };

            if let Some(name) = &name
                && !names.insert(name.clone())
            {
                return Err(MarkError::DuplicateChannel(name.clone()));
            }

            channels.push(Channel {
                name,
                value,
                scale,
                kind,
                label,
            });
        }

        Ok(Self {
            data: None,
            channels,
            transform: None,
        })
    }

    /// Attaches the mark's own dataset, used by [`Mark::bind`].
    pub fn with_data(mut self, data: impl Into<Rc<[T]>>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the data transform (identity by default).
    pub fn with_transform(
        mut self,
        transform: impl for<'a> Fn(&'a [T]) -> Cow<'a, [T]> + 'static,
    ) -> Self {
        self.transform = Some(Rc::new(transform));
        self
    }

    /// Returns the mark's own dataset, if any.
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Returns the number of retained channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns the names of the retained channels, in declaration order.
    pub fn channel_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.channels.iter().map(|c| c.name.as_deref())
    }

    /// Resolves every channel against `data`.
    ///
    /// With `None`, the index is `None` and data-derived channel values are `None`; precomputed
    /// values are still returned. Otherwise the transform is applied and the index is
    /// `0..n` over the transformed data.
    pub fn initialize(&self, data: Option<&[T]>) -> Binding {
        let data: Option<Cow<'_, [T]>> = data.map(|data| match &self.transform {
            Some(transform) => transform(data),
            None => Cow::Borrowed(data),
        });
        let data = data.as_deref();

        let index: Option<Vec<usize>> = data.map(|data| (0..data.len()).collect());
        let channels: Vec<_> = self
            .channels
            .iter()
            .map(|c| (c.name.clone(), c.resolve(data)))
            .collect();

        log::debug!(
            "bound {} channels over {:?} datums",
            channels.len(),
            index.as_ref().map(Vec::len)
        );

        Binding { index, channels }
    }

    /// Resolves every channel against the mark's own dataset.
    pub fn bind(&self) -> Binding {
        self.initialize(self.data())
    }
}
