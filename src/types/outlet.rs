// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outlet addressing.

use std::fmt;

use crate::error::Error;

/// Number of switchable outlets on the power switch.
pub const OUTLET_COUNT: u8 = 8;

/// Returns `true` if `n` is a valid outlet number (`1..=OUTLET_COUNT`).
///
/// # Examples
///
/// ```
/// use pdu_switch::types::is_valid_outlet;
///
/// assert!(is_valid_outlet(1));
/// assert!(is_valid_outlet(8));
/// assert!(!is_valid_outlet(0));
/// assert!(!is_valid_outlet(-3));
/// ```
#[must_use]
pub fn is_valid_outlet(n: impl Into<i64>) -> bool {
    (1..=i64::from(OUTLET_COUNT)).contains(&n.into())
}

/// A validated outlet number.
///
/// # Examples
///
/// ```
/// use pdu_switch::types::Outlet;
///
/// let outlet = Outlet::new(3).unwrap();
/// assert_eq!(outlet.value(), 3);
///
/// assert!(Outlet::new(0).is_err());
/// assert!(Outlet::new(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outlet(u8);

impl Outlet {
    /// Creates a new outlet number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOutlet`] if `n` is not in `1..=OUTLET_COUNT`.
    pub fn new(n: u8) -> Result<Self, Error> {
        if !is_valid_outlet(n) {
            return Err(Error::InvalidOutlet(i64::from(n)));
        }
        Ok(Self(n))
    }

    /// Returns the outlet number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Outlet {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outlet part of a control request: one outlet or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutletCode {
    /// A single outlet.
    Single(Outlet),
    /// Every outlet at once.
    All,
}

impl OutletCode {
    /// Wildcard token the switch understands as "all outlets".
    pub const WILDCARD: &'static str = "a";
}

impl From<Outlet> for OutletCode {
    fn from(outlet: Outlet) -> Self {
        Self::Single(outlet)
    }
}

impl fmt::Display for OutletCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(outlet) => write!(f, "{outlet}"),
            Self::All => f.write_str(Self::WILDCARD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_outlet_range() {
        for n in -20_i64..=20 {
            assert_eq!(is_valid_outlet(n), (1..=8).contains(&n), "n = {n}");
        }
        assert!(!is_valid_outlet(i64::MIN));
        assert!(!is_valid_outlet(i64::MAX));
    }

    #[test]
    fn outlet_new_valid() {
        for n in 1..=8 {
            assert_eq!(Outlet::new(n).unwrap().value(), n);
        }
    }

    #[test]
    fn outlet_new_invalid() {
        assert!(matches!(Outlet::new(0), Err(Error::InvalidOutlet(0))));
        assert!(matches!(Outlet::new(9), Err(Error::InvalidOutlet(9))));
        assert!(matches!(Outlet::try_from(255_u8), Err(Error::InvalidOutlet(255))));
    }

    #[test]
    fn outlet_code_display() {
        let code = OutletCode::from(Outlet::new(5).unwrap());
        assert_eq!(code.to_string(), "5");
        assert_eq!(OutletCode::All.to_string(), "a");
    }
}
