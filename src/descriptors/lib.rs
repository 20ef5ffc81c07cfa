/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elemental property lookup for building composition descriptors.
//!
//! Feature-generation pipelines ask, for a formula like `"Fe2O3"`, for one
//! value per atom of some elemental property. Two sources answer through the
//! common [`PropertySource`] contract: [`MagpieSource`], backed by a
//! flat-file property table parsed once into a [`MagpieTable`], and
//! [`PeriodicSource`], which resolves attributes live from the periodic
//! table reference data (including the oxidation-state-dependent ionic
//! radius). Both return values in the same canonical order: ascending
//! electronegativity of the constituent elements.

#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
extern crate itertools;
extern crate matdesc_periodic;
extern crate ordered_float;
extern crate serde_json;

// copied from failure 1.0 prerelease
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e))
    }
}

pub type FailResult<T> = Result<T, ::failure::Error>;

pub use crate::attributes::{Attribute, MissingOxidationStateError, PeriodicSource, UnknownAttributeError};
pub use crate::cohesive::cohesive_energy;
pub use crate::magpie::{MagpieSource, MagpieTable, MagpieValue, UnknownPropertyError};
pub use crate::oxi::parse_oxi_formula;
pub use crate::source::{sorted_elements, PropertySource};

mod attributes;
mod cohesive;
mod magpie;
mod oxi;
mod source;
