// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `pdu_switch` library.
//!
//! Validation failures ([`Error::InvalidOperation`], [`Error::InvalidOutlet`])
//! are always reported before anything is sent to the switch. Transport
//! failures are carried as-is inside [`Error::Protocol`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation code is not one of `ON`, `OFF` or `CCL`.
    #[error("invalid operation: {0:?}")]
    InvalidOperation(String),

    /// The outlet number is outside `[1, 8]`.
    #[error("invalid outlet number: {0}")]
    InvalidOutlet(i64),

    /// The request to the switch failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors raised by a [`Transport`](crate::protocol::Transport).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed, including non-success status codes.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the switch failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
