/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elemental property descriptors for chemical compositions.
//!
//! A facade over the member crates: `matdesc-periodic` holds the periodic
//! table reference data, `matdesc-descriptors` the property lookup API.

pub use matdesc_periodic as periodic;
pub use matdesc_descriptors as descriptors;

pub use crate::periodic::{Composition, Element, Species};
pub use crate::descriptors::{
    cohesive_energy, parse_oxi_formula, FailResult, MagpieSource, MagpieTable,
    PeriodicSource, PropertySource,
};
