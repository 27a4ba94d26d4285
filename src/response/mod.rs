// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of the switch's HTML status page.
//!
//! The control page lists each outlet with a switch button, a link of the
//! form `<a href=outlet?N=ON>` or `<a href=outlet?N=OFF>`. The link offers
//! the opposite of the current state: an outlet that is on shows
//! `<a href=outlet?N=OFF>Switch OFF</a>`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static STATUS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a href=outlet\?([1-8])=(ON|OFF)>").expect("status link pattern should compile")
});

/// Extracts per-outlet states from a response body.
///
/// Returns `true` for outlets that are currently on. Each
/// `<a href=outlet?N=ON|OFF>` button offers the opposite action, so a link
/// to `OFF` maps outlet `N` to `true` and a link to `ON` maps it to `false`.
/// When an outlet appears more than once the
/// last fragment wins. Outlets without a fragment are absent from the map.
///
/// # Examples
///
/// ```
/// use pdu_switch::response::parse_outlet_status;
///
/// let body = "<td><a href=outlet?1=OFF>Switch OFF</a></td>\
///             <td><a href=outlet?2=ON>Switch ON</a></td>";
/// let status = parse_outlet_status(body);
/// assert_eq!(status.get(&1), Some(&true));
/// assert_eq!(status.get(&2), Some(&false));
/// assert_eq!(status.get(&3), None);
/// ```
#[must_use]
pub fn parse_outlet_status(body: &str) -> BTreeMap<u8, bool> {
    STATUS_LINK
        .captures_iter(body)
        .filter_map(|caps| {
            let outlet = caps[1].parse::<u8>().ok()?;
            Some((outlet, &caps[2] == "OFF"))
        })
        .collect()
}
