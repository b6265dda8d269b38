// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotmark_core::MarkError;

/// Errors returned when building or rendering a bar mark.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BarError {
    /// The bar's channels failed validation.
    #[error(transparent)]
    Mark(#[from] MarkError),
    /// The `x` and `y` channels resolved to different lengths.
    #[error("X and Y are different length: {x} != {y}")]
    ChannelLengthMismatch {
        /// Length of the `x` values.
        x: usize,
        /// Length of the `y` values.
        y: usize,
    },
    /// The scale on the band axis does not expose a bandwidth.
    #[error("scale for band channel `{0}` has no bandwidth")]
    MissingBandwidth(&'static str),
    /// A positional channel has no values (the bar was initialized without data).
    #[error("channel `{0}` has no values")]
    MissingChannel(&'static str),
}
