/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::source::{expand_per_atom, PropertySource};

use ::std::collections::HashMap;
use ::std::f64::NAN;
use ::std::fs;
use ::std::path::Path;
use ::failure::Backtrace;
use ::itertools::Itertools;
use ::matdesc_periodic::{Composition, Element, MAX_ATOMIC_NUMBER};

/// The one list-valued property; elements may have several known states.
const OXIDATION_STATES_PROPERTY: &str = "OxidationStates";

/// One cell of a [`MagpieTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum MagpieValue {
    Scalar(f64),
    List(Vec<f64>),
}

#[derive(Debug, Fail)]
#[fail(display = "No elemental property {:?} in this table. Choose from: {:?}", property, available)]
pub struct UnknownPropertyError {
    pub property: String,
    pub available: Vec<String>,
    backtrace: Backtrace,
}

impl UnknownPropertyError {
    fn new(property: &str, available: &[String]) -> Self
    { UnknownPropertyError {
        property: property.to_string(),
        available: available.to_vec(),
        backtrace: Backtrace::new(),
    }}
}

/// An in-memory table of per-element property values, in the format of the
/// Magpie element data set.
///
/// Each property is a plain-text file named `<Property>.table` with one line
/// per atomic number, starting at Z = 1. Lines hold a single float, except
/// in the `OxidationStates` file, whose lines hold whitespace-separated
/// floats. Unparseable lines (the data set writes `Missing`) and absent
/// trailing lines degrade to NaN rather than failing the parse, so a
/// partial table remains usable.
///
/// The table is parsed once and never mutated afterwards.
pub struct MagpieTable {
    columns: HashMap<String, Vec<MagpieValue>>,
    available: Vec<String>,
}

impl MagpieTable {
    /// Parses every `*.table` file in a directory. The file stem names the
    /// property.
    pub fn from_dir(dir: impl AsRef<Path>) -> FailResult<MagpieTable>
    {
        let dir = dir.as_ref();
        let mut files = vec![];
        for entry in dir.read_dir()? {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "table") {
                let name = match path.file_stem().and_then(|stem| stem.to_str()) {
                    Some(stem) => stem.to_string(),
                    None => continue,
                };
                files.push((name, fs::read_to_string(&path)?));
            }
        }
        ensure!(!files.is_empty(), "no .table files in {}", dir.display());
        Ok(Self::from_files(files))
    }

    /// The table bundled with this crate, parsed on first use.
    pub fn bundled() -> &'static MagpieTable
    { &*BUNDLED }

    fn from_files<S: AsRef<str>>(files: impl IntoIterator<Item=(String, S)>) -> MagpieTable
    {
        let columns: HashMap<_, _> = {
            files.into_iter()
                .map(|(name, text)| {
                    let column = parse_column(&name, text.as_ref());
                    (name, column)
                })
                .collect()
        };
        let available = columns.keys().cloned().sorted();
        MagpieTable { columns, available }
    }

    /// Property names discovered at construction, sorted.
    pub fn available_properties(&self) -> &[String]
    { &self.available }

    /// A property's values for all elements, indexed by atomic number − 1.
    pub fn column(&self, property: &str) -> Result<&[MagpieValue], UnknownPropertyError>
    {
        self.columns.get(property)
            .map(|column| &column[..])
            .ok_or_else(|| UnknownPropertyError::new(property, &self.available))
    }

    /// A single element's value for a property.
    pub fn get(&self, property: &str, element: Element) -> Result<&MagpieValue, UnknownPropertyError>
    { Ok(&self.column(property)?[element.atomic_number() as usize - 1]) }

    /// The known oxidation states of an element, from the `OxidationStates`
    /// column. Empty when the column is absent or the element's line was
    /// unparseable.
    pub fn oxidation_states(&self, element: Element) -> &[f64]
    {
        match self.columns.get(OXIDATION_STATES_PROPERTY) {
            Some(column) => match &column[element.atomic_number() as usize - 1] {
                MagpieValue::List(states) => states,
                MagpieValue::Scalar(_) => &[],
            },
            None => &[],
        }
    }
}

fn parse_column(property: &str, text: &str) -> Vec<MagpieValue>
{
    let mut lines = text.lines();
    (0..MAX_ATOMIC_NUMBER)
        .map(|_| {
            let line = lines.next().unwrap_or("");
            if property == OXIDATION_STATES_PROPERTY {
                let states: Result<Vec<f64>, _> = {
                    line.split_whitespace().map(str::parse).collect()
                };
                match states {
                    Ok(states) => MagpieValue::List(states),
                    Err(_) => MagpieValue::Scalar(NAN),
                }
            } else {
                match line.trim().parse() {
                    Ok(x) => MagpieValue::Scalar(x),
                    Err(_) => MagpieValue::Scalar(NAN),
                }
            }
        })
        .collect()
}

const BUNDLED_FILES: &[(&str, &str)] = &[
    ("AtomicWeight", include_str!("data/magpie/AtomicWeight.table")),
    ("Column", include_str!("data/magpie/Column.table")),
    ("CovalentRadius", include_str!("data/magpie/CovalentRadius.table")),
    ("Electronegativity", include_str!("data/magpie/Electronegativity.table")),
    ("MeltingT", include_str!("data/magpie/MeltingT.table")),
    ("Number", include_str!("data/magpie/Number.table")),
    ("OxidationStates", include_str!("data/magpie/OxidationStates.table")),
    ("Row", include_str!("data/magpie/Row.table")),
];

lazy_static!{
    static ref BUNDLED: MagpieTable = MagpieTable::from_files(
        BUNDLED_FILES.iter().map(|&(name, text)| (name.to_string(), text))
    );
}

//--------------------------------------------------------------------------------------

/// Property source backed by a [`MagpieTable`].
#[derive(Copy, Clone)]
pub struct MagpieSource<'a> {
    table: &'a MagpieTable,
}

impl<'a> MagpieSource<'a> {
    pub fn new(table: &'a MagpieTable) -> Self
    { MagpieSource { table } }

    pub fn table(&self) -> &'a MagpieTable
    { self.table }
}

impl MagpieSource<'static> {
    /// A source over the bundled table.
    pub fn bundled() -> Self
    { MagpieSource::new(MagpieTable::bundled()) }
}

impl<'a> PropertySource for MagpieSource<'a> {
    fn get_property(&self, comp: &Composition, property: &str) -> FailResult<Vec<f64>> {
        // resolve the column up front so an unknown name fails even for an
        // empty composition
        let column = self.table.column(property)?;
        expand_per_atom(&comp.el_amt(), |element| {
            match column[element.atomic_number() as usize - 1] {
                MagpieValue::Scalar(x) => Ok(x),
                MagpieValue::List(_) => bail!(
                    "property {:?} is not scalar-valued; use MagpieTable::oxidation_states",
                    property,
                ),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(symbol: &str) -> Element
    { Element::from_symbol(symbol).unwrap() }

    #[test]
    fn bundled_properties() {
        let names = MagpieTable::bundled().available_properties();
        assert!(names.contains(&"Electronegativity".to_string()));
        assert!(names.contains(&"OxidationStates".to_string()));
        // sorted for stable error messages
        let mut sorted = names.to_vec();
        sorted.sort();
        assert_eq!(names, &sorted[..]);
    }

    #[test]
    fn bundled_scalars() {
        let table = MagpieTable::bundled();
        assert_eq!(table.get("Electronegativity", el("Fe")).unwrap(), &MagpieValue::Scalar(1.83));
        assert_eq!(table.get("Number", el("H")).unwrap(), &MagpieValue::Scalar(1.0));
        assert_eq!(table.get("Row", el("U")).unwrap(), &MagpieValue::Scalar(7.0));
    }

    #[test]
    fn missing_cells_are_nan() {
        // helium has no accepted electronegativity; the data file says "Missing"
        match *MagpieTable::bundled().get("Electronegativity", el("He")).unwrap() {
            MagpieValue::Scalar(x) => assert!(x.is_nan()),
            ref v => panic!("unexpected value: {:?}", v),
        }
    }

    #[test]
    fn oxidation_state_lists() {
        let table = MagpieTable::bundled();
        assert_eq!(table.oxidation_states(el("Fe")), &[2.0, 3.0]);
        assert!(table.oxidation_states(el("Ne")).is_empty());
        match *table.get("OxidationStates", el("Fe")).unwrap() {
            MagpieValue::List(ref states) => assert_eq!(states, &[2.0, 3.0]),
            ref v => panic!("unexpected value: {:?}", v),
        }
    }

    #[test]
    fn unknown_property() {
        let err = MagpieTable::bundled().column("Squishiness").unwrap_err();
        assert_eq!(err.property, "Squishiness");
        assert!(err.to_string().contains("Electronegativity"));
        assert!(err.to_string().contains("AtomicWeight"));
    }

    #[test]
    fn columns_cover_every_element() {
        let table = MagpieTable::bundled();
        for property in table.available_properties() {
            assert_eq!(table.column(property).unwrap().len(), MAX_ATOMIC_NUMBER as usize);
        }
    }

    #[test]
    fn short_and_malformed_files_degrade_to_nan() {
        let table = MagpieTable::from_files(vec![
            ("Stub".to_string(), "1.5\nwat\n"),
            ("OxidationStates".to_string(), "-1 1\nwat 2\n\n"),
        ]);
        assert_eq!(table.get("Stub", el("H")).unwrap(), &MagpieValue::Scalar(1.5));
        match *table.get("Stub", el("He")).unwrap() {
            MagpieValue::Scalar(x) => assert!(x.is_nan()),
            ref v => panic!("unexpected value: {:?}", v),
        }
        match *table.get("Stub", el("Li")).unwrap() {
            MagpieValue::Scalar(x) => assert!(x.is_nan()),
            ref v => panic!("unexpected value: {:?}", v),
        }
        assert_eq!(table.oxidation_states(el("H")), &[-1.0, 1.0]);
        assert!(table.oxidation_states(el("He")).is_empty()); // malformed line
        assert!(table.oxidation_states(el("Li")).is_empty()); // empty line
    }

    #[test]
    fn get_property_values() {
        let source = MagpieSource::bundled();
        let comp: Composition = "Fe2O3".parse().unwrap();
        assert_eq!(
            source.get_property(&comp, "Electronegativity").unwrap(),
            vec![1.83, 1.83, 3.44, 3.44, 3.44],
        );
    }

    #[test]
    fn get_property_rejects_list_valued() {
        let source = MagpieSource::bundled();
        let comp: Composition = "Fe2O3".parse().unwrap();
        assert!(source.get_property(&comp, "OxidationStates").is_err());
    }
}
