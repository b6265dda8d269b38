// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

/// Errors returned when constructing a [`crate::Mark`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkError {
    /// A required channel has no value source.
    #[error("missing channel value: {}", channel_label(.name))]
    MissingChannelValue {
        /// The channel's name, if it has one.
        name: Option<String>,
    },
    /// Two channels of the same mark share a name.
    #[error("duplicate channel: {0}")]
    DuplicateChannel(String),
}

fn channel_label(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<unnamed>")
}
