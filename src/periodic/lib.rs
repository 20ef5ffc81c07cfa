/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Periodic table reference data.
//!
//! This crate is the chemistry substrate for the descriptor crates: a compact
//! `Element` type backed by static reference tables, oxidation-state-decorated
//! `Species`, and `Composition` with a plain-formula parser.

#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
extern crate itertools;
#[cfg(feature = "serde")] extern crate serde;

mod data;
mod element;
mod composition;

pub use crate::element::{Element, ElementParseError, MAX_ATOMIC_NUMBER};
pub use crate::composition::{Composition, FormulaParseError, Species};
