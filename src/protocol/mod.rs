// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports used to reach the switch's control interface.
//!
//! - [`HttpTransport`]: blocking HTTP client (feature `http`, on by default)
//!
//! Any other [`Transport`] can be plugged into
//! [`PduClient::with_transport`](crate::PduClient::with_transport), for
//! example to record requests in tests.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpTransport;

use crate::error::ProtocolError;

/// A blocking transport able to issue a GET request.
pub trait Transport {
    /// Performs a GET request against `url` and returns the full response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the response cannot be read.
    fn get(&self, url: &str) -> Result<String, ProtocolError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<String, ProtocolError> {
        (**self).get(url)
    }
}
