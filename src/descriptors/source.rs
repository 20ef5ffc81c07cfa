/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::oxi;

use ::std::collections::BTreeMap;
use ::matdesc_periodic::{Composition, Element};
use ::ordered_float::NotNan;

/// Common contract of elemental property sources.
pub trait PropertySource {
    /// Looks up `property` for every atom of a composition.
    ///
    /// Returns one value per atom, ordered by ascending electronegativity of
    /// the constituent elements (see [`sorted_elements`]). An element with a
    /// fractional amount contributes `floor(amount)` values.
    fn get_property(&self, comp: &Composition, property: &str) -> FailResult<Vec<f64>>;

    /// Looks up `property` for every atom of a formula string.
    ///
    /// The formula may carry explicit oxidation states (`"Fe2+3O3-2"`),
    /// which oxidation-state-dependent properties require.
    fn get_property_str(&self, formula: &str, property: &str) -> FailResult<Vec<f64>> {
        let (comp, oxi_states) = oxi::parse_oxi_formula(formula)?;
        self.get_property(&comp.with_oxi_states(&oxi_states), property)
    }
}

/// The elements of a composition in canonical order.
///
/// Ascending electronegativity; ties break by ascending atomic number, and
/// elements with no accepted electronegativity sort after all others.
pub fn sorted_elements(el_amt: &BTreeMap<Element, f64>) -> Vec<Element> {
    let mut elements: Vec<_> = el_amt.keys().copied().collect();
    elements.sort_by_key(|&el| electronegativity_key(el));
    elements
}

fn electronegativity_key(element: Element) -> (NotNan<f64>, u32) {
    let x = element.electronegativity().unwrap_or(::std::f64::INFINITY);
    (NotNan::new(x).unwrap(), element.atomic_number())
}

/// Expands per-element values into the flat per-atom sequence.
///
/// Fractional amounts truncate toward zero, so an element with amount 0.5
/// contributes nothing.
pub(crate) fn expand_per_atom(
    el_amt: &BTreeMap<Element, f64>,
    mut value: impl FnMut(Element) -> FailResult<f64>,
) -> FailResult<Vec<f64>> {
    let mut out = vec![];
    for element in sorted_elements(el_amt) {
        let v = value(element)?;
        out.extend(::std::iter::repeat(v).take(el_amt[&element] as usize));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(symbol: &str) -> Element
    { Element::from_symbol(symbol).unwrap() }

    fn el_amt(formula: &str) -> BTreeMap<Element, f64>
    { formula.parse::<Composition>().unwrap().el_amt() }

    #[test]
    fn ordering_by_electronegativity() {
        // Fe (1.83) before O (3.44), despite O having the smaller Z
        assert_eq!(sorted_elements(&el_amt("Fe2O3")), vec![el("Fe"), el("O")]);
        assert_eq!(sorted_elements(&el_amt("NaCl")), vec![el("Na"), el("Cl")]);
    }

    #[test]
    fn ties_break_by_atomic_number() {
        // Eu, Gd, and Tb all sit at 1.20 on the Pauling scale
        assert_eq!(sorted_elements(&el_amt("TbGdEu")), vec![el("Eu"), el("Gd"), el("Tb")]);
    }

    #[test]
    fn missing_electronegativity_sorts_last() {
        assert_eq!(sorted_elements(&el_amt("HeLiF")), vec![el("Li"), el("F"), el("He")]);
    }

    #[test]
    fn expansion_repeats_per_atom() {
        let values = expand_per_atom(&el_amt("Fe2O3"), |el| {
            Ok(el.atomic_number() as f64)
        }).unwrap();
        assert_eq!(values, vec![26.0, 26.0, 8.0, 8.0, 8.0]);
    }

    #[test]
    fn fractional_amounts_truncate() {
        // fractional occupancies are truncated, not rounded
        let values = expand_per_atom(&el_amt("Fe0.5O1.5"), |el| {
            Ok(el.atomic_number() as f64)
        }).unwrap();
        assert_eq!(values, vec![8.0]);
    }

    #[test]
    fn expansion_propagates_errors() {
        let result = expand_per_atom(&el_amt("Fe2O3"), |_| bail!("nope"));
        assert!(result.is_err());
    }
}
