/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::data;

use ::std::collections::HashMap;
use ::std::fmt;
use ::std::str;
use ::failure::Backtrace;

/// Represents a specific atomic number.
///
/// Only elements up to `MAX_ATOMIC_NUMBER` are supported; that is as far as
/// the reference tables in this crate go, and the bound is what allows
/// methods to return `&'static` data.
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Element(u8);

/// Lawrencium, the last element with tabulated reference data.
pub const MAX_ATOMIC_NUMBER: u32 = 103;

#[derive(Debug, Fail)]
#[fail(display = "Unable to parse element symbol: {:?}", text)]
pub struct ElementParseError {
    text: String,
    backtrace: Backtrace,
}

impl ElementParseError {
    fn new(s: &str) -> Self
    { ElementParseError {
        text: s.to_string(),
        backtrace: Backtrace::new(),
    }}
}

impl Element {
    pub fn from_atomic_number(n: u32) -> Option<Self>
    {
        if Self::is_valid_number(n) { Some(Element(n as u8)) }
        else { None }
    }

    fn is_valid_number(n: u32) -> bool
    { 1 <= n && n <= MAX_ATOMIC_NUMBER }

    pub fn from_symbol(s: &str) -> Result<Self, ElementParseError>
    {
        let &n = SYMBOL_TO_NUMBER.get(s).ok_or_else(|| ElementParseError::new(s))?;
        debug_assert!(Self::is_valid_number(n.into()));
        Ok(Element(n))
    }

    pub fn atomic_number(&self) -> u32
    { self.0.into() }

    pub fn symbol(&self) -> &'static str
    { self.record().symbol }

    fn record(&self) -> &'static data::ElementRecord
    { &data::ELEMENTS[self.0 as usize - 1] }

    /// Standard atomic weight, in amu.
    pub fn atomic_mass(&self) -> f64
    { self.record().atomic_mass }

    /// Electronegativity on the Pauling scale.
    ///
    /// `None` for the handful of elements without an accepted value
    /// (helium, neon, argon, lawrencium).
    pub fn electronegativity(&self) -> Option<f64>
    { non_nan(self.record().electronegativity) }

    /// Covalent radius, in angstroms. `None` where untabulated.
    pub fn covalent_radius(&self) -> Option<f64>
    { non_nan(self.record().covalent_radius) }

    /// Melting point, in kelvin. `None` where untabulated.
    pub fn melting_point(&self) -> Option<f64>
    { non_nan(self.record().melting_point) }

    /// IUPAC group, 1 through 18. The f-block is mapped to group 3.
    pub fn group(&self) -> u32 {
        let z = self.atomic_number();
        match z {
            1 => 1,
            2 => 18,
            3..=18 => {
                let offset = (z - 3) % 8;
                if offset < 2 { offset + 1 } else { offset + 11 }
            },
            19..=54 => (z - 19) % 18 + 1,
            _ => {
                let offset = (z - 55) % 32;
                match offset {
                    0 | 1 => offset + 1,
                    2..=16 => 3, // lanthanoids and actinoids
                    _ => offset - 13,
                }
            },
        }
    }

    /// Period of the periodic table, 1 through 7.
    pub fn row(&self) -> u32 {
        match self.atomic_number() {
            1..=2 => 1,
            3..=10 => 2,
            11..=18 => 3,
            19..=36 => 4,
            37..=54 => 5,
            55..=86 => 6,
            _ => 7,
        }
    }

    /// Shannon effective ionic radii, as `(oxidation state, radius in
    /// angstroms)` pairs sorted by oxidation state. Empty where untabulated.
    pub fn ionic_radii(&self) -> &'static [(i32, f64)]
    {
        data::IONIC_RADII.binary_search_by_key(&self.0, |&(z, _)| z)
            .map(|i| data::IONIC_RADII[i].1)
            .unwrap_or(&[])
    }

    /// The ionic radius of this element in the given oxidation state.
    pub fn ionic_radius(&self, oxi_state: i32) -> Option<f64>
    {
        self.ionic_radii().iter()
            .find(|&&(q, _)| q == oxi_state)
            .map(|&(_, r)| r)
    }

    /// Commonly observed oxidation states, sorted ascending.
    /// Empty for elements with no common states (noble gases short of Kr).
    pub fn common_oxidation_states(&self) -> &'static [i32]
    {
        data::OXIDATION_STATES.binary_search_by_key(&self.0, |&(z, _)| z)
            .map(|i| data::OXIDATION_STATES[i].1)
            .unwrap_or(&[])
    }
}

fn non_nan(x: f64) -> Option<f64>
{ if x.is_nan() { None } else { Some(x) } }

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(self.symbol(), f) }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(self.symbol(), f) }
}

impl str::FromStr for Element {
    type Err = ElementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    { Element::from_symbol(s) }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Serialize, Deserialize, ser, de};

    impl Serialize for Element {
        fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.symbol().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Element {
        fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw: &str = <&str>::deserialize(deserializer)?;
            raw.parse().map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(raw), &"an element symbol")
            })
        }
    }
}

lazy_static!{
    static ref SYMBOL_TO_NUMBER: HashMap<&'static str, u8> =
    {
        data::ELEMENTS.iter().enumerate()
            .map(|(i, record)| (record.symbol, (i + 1) as u8))
            .collect()
    };
}
