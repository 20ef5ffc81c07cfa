/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::source::{expand_per_atom, PropertySource};

use ::std::f64::NAN;
use ::failure::Backtrace;
use ::matdesc_periodic::{Composition, Element};

/// The attributes [`PeriodicSource`] can resolve.
///
/// A closed set rather than open-ended name lookup, so that a typo fails
/// with the full menu instead of silently resolving to nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Attribute {
    AtomicNumber,
    AtomicMass,
    Electronegativity,
    Group,
    Row,
    CovalentRadius,
    MeltingPoint,
    MaxOxidationState,
    MinOxidationState,
    IonicRadii,
}

const ALL_ATTRIBUTES: &[Attribute] = &[
    Attribute::AtomicNumber,
    Attribute::AtomicMass,
    Attribute::Electronegativity,
    Attribute::Group,
    Attribute::Row,
    Attribute::CovalentRadius,
    Attribute::MeltingPoint,
    Attribute::MaxOxidationState,
    Attribute::MinOxidationState,
    Attribute::IonicRadii,
];

const ATTRIBUTE_NAMES: &[&str] = &[
    "atomic_number",
    "atomic_mass",
    "electronegativity",
    "group",
    "row",
    "covalent_radius",
    "melting_point",
    "max_oxidation_state",
    "min_oxidation_state",
    "ionic_radii",
];

impl Attribute {
    pub fn from_name(name: &str) -> Option<Attribute>
    {
        ATTRIBUTE_NAMES.iter()
            .position(|&known| known == name)
            .map(|i| ALL_ATTRIBUTES[i])
    }

    pub fn name(self) -> &'static str
    {
        let i = ALL_ATTRIBUTES.iter().position(|&attr| attr == self).unwrap();
        ATTRIBUTE_NAMES[i]
    }

    /// Unit of the attribute's values. Informational only.
    pub fn unit(self) -> Option<&'static str>
    {
        match self {
            Attribute::AtomicMass => Some("amu"),
            Attribute::CovalentRadius => Some("ang"),
            Attribute::MeltingPoint => Some("K"),
            Attribute::IonicRadii => Some("ang"),
            _ => None,
        }
    }

    fn value_for(self, element: Element, oxi_state: Option<i32>) -> FailResult<f64>
    {
        // attributes with no tabulated value for an element yield NaN, the
        // same degradation the table source applies
        Ok(match self {
            Attribute::AtomicNumber => f64::from(element.atomic_number()),
            Attribute::AtomicMass => element.atomic_mass(),
            Attribute::Electronegativity => element.electronegativity().unwrap_or(NAN),
            Attribute::Group => f64::from(element.group()),
            Attribute::Row => f64::from(element.row()),
            Attribute::CovalentRadius => element.covalent_radius().unwrap_or(NAN),
            Attribute::MeltingPoint => element.melting_point().unwrap_or(NAN),
            Attribute::MaxOxidationState => {
                element.common_oxidation_states().iter().cloned()
                    .max().map(f64::from).unwrap_or(NAN)
            },
            Attribute::MinOxidationState => {
                element.common_oxidation_states().iter().cloned()
                    .min().map(f64::from).unwrap_or(NAN)
            },
            Attribute::IonicRadii => {
                let q = match oxi_state {
                    Some(q) => q,
                    None => throw!(MissingOxidationStateError::new(element)),
                };
                match element.ionic_radius(q) {
                    Some(radius) => radius,
                    None => bail!("no tabulated ionic radius for {}{:+}", element, q),
                }
            },
        })
    }
}

#[derive(Debug, Fail)]
#[fail(display = "No element attribute {:?}. Choose from: {:?}", attribute, supported)]
pub struct UnknownAttributeError {
    pub attribute: String,
    supported: &'static [&'static str],
    backtrace: Backtrace,
}

impl UnknownAttributeError {
    fn new(attribute: &str) -> Self
    { UnknownAttributeError {
        attribute: attribute.to_string(),
        supported: ATTRIBUTE_NAMES,
        backtrace: Backtrace::new(),
    }}
}

#[derive(Debug, Fail)]
#[fail(display = "No oxidation state given for {}; ionic radii do not have a unique value per element", element)]
pub struct MissingOxidationStateError {
    pub element: Element,
    backtrace: Backtrace,
}

impl MissingOxidationStateError {
    fn new(element: Element) -> Self
    { MissingOxidationStateError {
        element,
        backtrace: Backtrace::new(),
    }}
}

/// Property source that resolves attributes live from the periodic table
/// reference data.
///
/// Unlike [`MagpieSource`][crate::MagpieSource], this source can answer
/// oxidation-state-dependent lookups: `ionic_radii` selects each element's
/// Shannon radius by the state carried on the composition's species (or
/// extracted from an annotated formula string such as `"Fe2+3O3-2"`).
#[derive(Debug, Copy, Clone, Default)]
pub struct PeriodicSource;

impl PeriodicSource {
    pub fn new() -> PeriodicSource
    { PeriodicSource }
}

impl PropertySource for PeriodicSource {
    fn get_property(&self, comp: &Composition, property: &str) -> FailResult<Vec<f64>> {
        let attribute = match Attribute::from_name(property) {
            Some(attribute) => attribute,
            None => {
                warn!("{} attribute missing", property);
                throw!(UnknownAttributeError::new(property));
            },
        };
        let oxi_states = comp.oxi_states();
        expand_per_atom(&comp.el_amt(), |element| {
            attribute.value_for(element, oxi_states.get(&element).cloned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertySource;
    use ::std::collections::BTreeMap;

    fn el(symbol: &str) -> Element
    { Element::from_symbol(symbol).unwrap() }

    #[test]
    fn names_roundtrip() {
        assert_eq!(ALL_ATTRIBUTES.len(), ATTRIBUTE_NAMES.len());
        for &attribute in ALL_ATTRIBUTES {
            assert_eq!(Attribute::from_name(attribute.name()), Some(attribute));
        }
        assert_eq!(Attribute::from_name("spin"), None);
    }

    #[test]
    fn scalar_attributes() {
        let source = PeriodicSource::new();
        let comp: Composition = "NaCl".parse().unwrap();
        assert_eq!(source.get_property(&comp, "atomic_number").unwrap(), vec![11.0, 17.0]);
        assert_eq!(source.get_property(&comp, "row").unwrap(), vec![3.0, 3.0]);
        assert_eq!(source.get_property(&comp, "atomic_mass").unwrap(), vec![22.990, 35.45]);
        assert_eq!(source.get_property(&comp, "max_oxidation_state").unwrap(), vec![1.0, 7.0]);
        assert_eq!(source.get_property(&comp, "min_oxidation_state").unwrap(), vec![1.0, -1.0]);
    }

    #[test]
    fn missing_values_yield_nan() {
        let source = PeriodicSource::new();
        let comp: Composition = "He".parse().unwrap();
        let values = source.get_property(&comp, "electronegativity").unwrap();
        assert_eq!(values.len(), 1);
        assert!(values[0].is_nan());
    }

    #[test]
    fn unknown_attribute() {
        let source = PeriodicSource::new();
        let comp: Composition = "NaCl".parse().unwrap();
        let err = source.get_property(&comp, "favourite_colour").unwrap_err();
        let err = err.downcast::<UnknownAttributeError>().unwrap();
        assert_eq!(err.attribute, "favourite_colour");
        assert!(err.to_string().contains("ionic_radii"));
    }

    #[test]
    fn ionic_radii_needs_oxidation_states() {
        let source = PeriodicSource::new();
        let comp: Composition = "Fe2O3".parse().unwrap();
        let err = source.get_property(&comp, "ionic_radii").unwrap_err();
        assert!(err.downcast_ref::<MissingOxidationStateError>().is_some());
    }

    #[test]
    fn ionic_radii_with_decorated_species() {
        let source = PeriodicSource::new();
        let states: BTreeMap<_, _> = vec![(el("Fe"), 3), (el("O"), -2)].into_iter().collect();
        let comp = "Fe2O3".parse::<Composition>().unwrap().with_oxi_states(&states);
        assert_eq!(
            source.get_property(&comp, "ionic_radii").unwrap(),
            vec![0.645, 0.645, 1.40, 1.40, 1.40],
        );
    }

    #[test]
    fn untabulated_ionic_radius() {
        let source = PeriodicSource::new();
        let states: BTreeMap<_, _> = vec![(el("Fe"), 7)].into_iter().collect();
        let comp = "Fe".parse::<Composition>().unwrap().with_oxi_states(&states);
        assert!(source.get_property(&comp, "ionic_radii").is_err());
    }

    #[test]
    fn units_are_informational() {
        assert_eq!(Attribute::AtomicMass.unit(), Some("amu"));
        assert_eq!(Attribute::IonicRadii.unit(), Some("ang"));
        assert_eq!(Attribute::Group.unit(), None);
    }
}
