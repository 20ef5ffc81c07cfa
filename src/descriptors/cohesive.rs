/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::collections::HashMap;
use ::matdesc_periodic::Element;

const COHESIVE_ENERGIES_JSON: &str = include_str!("data/cohesive_energies.json");

lazy_static!{
    static ref COHESIVE_ENERGIES: HashMap<Element, f64> =
    {
        let raw: HashMap<String, f64> = {
            ::serde_json::from_str(COHESIVE_ENERGIES_JSON)
                .expect("malformed bundled cohesive_energies.json")
        };
        raw.into_iter()
            .map(|(symbol, value)| {
                let element = Element::from_symbol(&symbol)
                    .expect("unknown element in bundled cohesive_energies.json");
                (element, value)
            })
            .collect()
    };
}

/// Cohesive energy of the element's standard solid, in eV/atom.
///
/// `None` for elements without a tabulated value.
pub fn cohesive_energy(element: Element) -> Option<f64>
{ COHESIVE_ENERGIES.get(&element).cloned() }

#[cfg(test)]
mod tests {
    use super::*;

    fn el(symbol: &str) -> Element
    { Element::from_symbol(symbol).unwrap() }

    #[test]
    fn tabulated_values() {
        assert_eq!(cohesive_energy(el("Fe")), Some(4.28));
        assert_eq!(cohesive_energy(el("W")), Some(8.90));
    }

    #[test]
    fn untabulated_elements() {
        assert_eq!(cohesive_energy(el("Es")), None);
        assert_eq!(cohesive_energy(el("Lr")), None);
    }
}
