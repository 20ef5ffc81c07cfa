use matdesc_descriptors::{
    cohesive_energy, MagpieSource, MagpieTable, MagpieValue, MissingOxidationStateError,
    PropertySource, PeriodicSource, UnknownPropertyError,
};
use matdesc_periodic::{Composition, Element, MAX_ATOMIC_NUMBER};
use std::fs::File;
use std::io::Write;
use tempdir::TempDir;

#[test]
fn single_element_formulas_return_the_table_value() {
    let table = MagpieTable::bundled();
    let source = MagpieSource::bundled();
    for z in 1..=MAX_ATOMIC_NUMBER {
        let element = Element::from_atomic_number(z).unwrap();
        let values = source.get_property_str(element.symbol(), "AtomicWeight").unwrap();
        assert_eq!(values.len(), 1);
        match *table.get("AtomicWeight", element).unwrap() {
            MagpieValue::Scalar(expected) if expected.is_nan() => assert!(values[0].is_nan()),
            MagpieValue::Scalar(expected) => assert_eq!(values[0], expected),
            ref v => panic!("unexpected value: {:?}", v),
        }
    }
}

#[test]
fn values_are_ordered_by_electronegativity() {
    let source = MagpieSource::bundled();
    // Fe (1.83) sorts before O (3.44): two iron values, then three oxygen
    assert_eq!(
        source.get_property_str("Fe2O3", "Electronegativity").unwrap(),
        vec![1.83, 1.83, 3.44, 3.44, 3.44],
    );
    assert_eq!(
        source.get_property_str("Fe2O3", "Number").unwrap(),
        vec![26.0, 26.0, 8.0, 8.0, 8.0],
    );
}

#[test]
fn both_sources_answer_the_same_contract() {
    let sources: Vec<(&str, Box<dyn PropertySource>)> = vec![
        ("Electronegativity", Box::new(MagpieSource::bundled())),
        ("electronegativity", Box::new(PeriodicSource::new())),
    ];
    let comp: Composition = "Fe2O3".parse().unwrap();
    for (property, source) in sources {
        assert_eq!(
            source.get_property(&comp, property).unwrap(),
            vec![1.83, 1.83, 3.44, 3.44, 3.44],
        );
    }
}

#[test]
fn ionic_radii_from_annotated_formula() {
    let source = PeriodicSource::new();
    assert_eq!(
        source.get_property_str("Fe2+3O3-2", "ionic_radii").unwrap(),
        vec![0.645, 0.645, 1.40, 1.40, 1.40],
    );
}

#[test]
fn ionic_radii_without_states_is_an_error() {
    let err = PeriodicSource::new()
        .get_property_str("Fe2O3", "ionic_radii")
        .unwrap_err();
    let err = err.downcast_ref::<MissingOxidationStateError>().unwrap();
    assert_eq!(err.element, Element::from_symbol("Fe").unwrap());
}

#[test]
fn unknown_property_lists_the_alternatives() {
    let err = MagpieSource::bundled()
        .get_property_str("NaCl", "Bounciness")
        .unwrap_err();
    let err = err.downcast_ref::<UnknownPropertyError>().unwrap();
    for name in &["AtomicWeight", "Electronegativity", "MeltingT", "OxidationStates"] {
        assert!(err.to_string().contains(name), "{} not listed", name);
    }
}

#[test]
fn repeated_lookups_are_identical() {
    let source = MagpieSource::bundled();
    let comp: Composition = "Al2(SO4)3".parse().unwrap();
    let first = source.get_property(&comp, "MeltingT").unwrap();
    for _ in 0..10 {
        assert_eq!(source.get_property(&comp, "MeltingT").unwrap(), first);
    }
}

#[test]
fn fractional_amounts_truncate() {
    // Fractional occupancies contribute floor(amount) atoms, so the iron
    // site vanishes entirely here.
    let source = MagpieSource::bundled();
    assert_eq!(
        source.get_property_str("Fe0.5O1.5", "Number").unwrap(),
        vec![8.0],
    );
}

#[test]
fn tables_load_from_a_directory() {
    let dir = TempDir::new("elementdata").unwrap();

    let mut f = File::create(dir.path().join("Hardness.table")).unwrap();
    writeln!(f, "1.0\nMissing\n3.5").unwrap();
    let mut f = File::create(dir.path().join("notes.txt")).unwrap();
    writeln!(f, "not a property file").unwrap();
    drop(f);

    let table = MagpieTable::from_dir(dir.path()).unwrap();
    assert_eq!(table.available_properties(), &["Hardness".to_string()]);

    let h = Element::from_symbol("H").unwrap();
    let he = Element::from_symbol("He").unwrap();
    let li = Element::from_symbol("Li").unwrap();
    assert_eq!(table.get("Hardness", h).unwrap(), &MagpieValue::Scalar(1.0));
    match *table.get("Hardness", he).unwrap() {
        MagpieValue::Scalar(x) => assert!(x.is_nan()),
        ref v => panic!("unexpected value: {:?}", v),
    }
    assert_eq!(table.get("Hardness", li).unwrap(), &MagpieValue::Scalar(3.5));
}

#[test]
fn empty_directories_are_an_error() {
    let dir = TempDir::new("elementdata").unwrap();
    assert!(MagpieTable::from_dir(dir.path()).is_err());
}

#[test]
fn bundled_cohesive_energies() {
    let fe = Element::from_symbol("Fe").unwrap();
    assert_eq!(cohesive_energy(fe), Some(4.28));
}
