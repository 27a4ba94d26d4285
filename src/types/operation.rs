// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation codes and cycling methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Returns `true` if `code` is one of `ON`, `OFF` or `CCL`.
///
/// Matching is case-sensitive, as on the device.
#[must_use]
pub fn is_valid_operation(code: &str) -> bool {
    code.parse::<Operation>().is_ok()
}

/// An operation the switch can apply to an outlet.
///
/// # Examples
///
/// ```
/// use pdu_switch::types::Operation;
///
/// assert_eq!(Operation::On.as_str(), "ON");
/// assert_eq!("CCL".parse::<Operation>().unwrap(), Operation::Cycle);
/// assert!("on".parse::<Operation>().is_err());
/// assert_eq!(Operation::from(false), Operation::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Switch the outlet on.
    On,
    /// Switch the outlet off.
    Off,
    /// Let the device power-cycle the outlet with its own timer.
    Cycle,
}

impl Operation {
    /// Returns the code sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Cycle => "CCL",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            "CCL" => Ok(Self::Cycle),
            _ => Err(Error::InvalidOperation(s.to_string())),
        }
    }
}

impl From<bool> for Operation {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// How a power cycle is carried out.
///
/// Parsing never fails: `"software"` selects [`CycleMethod::Software`] and
/// every other string selects [`CycleMethod::Hardware`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleMethod {
    /// Send `OFF`, wait, then send `ON`.
    #[default]
    Software,
    /// Send a single `CCL` and let the device handle the timing.
    Hardware,
}

impl CycleMethod {
    /// Returns the lowercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Hardware => "hardware",
        }
    }
}

impl From<&str> for CycleMethod {
    fn from(method: &str) -> Self {
        if method == "software" {
            Self::Software
        } else {
            Self::Hardware
        }
    }
}

impl FromStr for CycleMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for CycleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_as_str() {
        assert_eq!(Operation::On.as_str(), "ON");
        assert_eq!(Operation::Off.as_str(), "OFF");
        assert_eq!(Operation::Cycle.as_str(), "CCL");
    }

    #[test]
    fn operation_from_str_roundtrip() {
        for op in [Operation::On, Operation::Off, Operation::Cycle] {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn operation_from_str_invalid() {
        for code in ["", "on", "Off", "ccl", "TOGGLE", " ON", "ON "] {
            let err = code.parse::<Operation>().unwrap_err();
            assert!(matches!(err, Error::InvalidOperation(ref c) if c == code));
        }
    }

    #[test]
    fn valid_operation_set() {
        assert!(is_valid_operation("ON"));
        assert!(is_valid_operation("OFF"));
        assert!(is_valid_operation("CCL"));
        assert!(!is_valid_operation("CYCLE"));
        assert!(!is_valid_operation("on"));
    }

    #[test]
    fn operation_from_bool() {
        assert_eq!(Operation::from(true), Operation::On);
        assert_eq!(Operation::from(false), Operation::Off);
    }

    #[test]
    fn cycle_method_from_str() {
        assert_eq!(CycleMethod::from("software"), CycleMethod::Software);
        assert_eq!(CycleMethod::from("hardware"), CycleMethod::Hardware);
        assert_eq!(CycleMethod::from("Software"), CycleMethod::Hardware);
        assert_eq!(CycleMethod::from(""), CycleMethod::Hardware);
        assert_eq!("anything".parse::<CycleMethod>(), Ok(CycleMethod::Hardware));
    }

    #[test]
    fn cycle_method_default_is_software() {
        assert_eq!(CycleMethod::default(), CycleMethod::Software);
    }
}
