/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Formula strings with embedded oxidation states.

use crate::FailResult;

use ::std::collections::BTreeMap;
use ::matdesc_periodic::{Composition, Element};

/// Parses a formula whose element groups may carry explicit oxidation
/// states, e.g. `"Fe2+3O3-2"`, `"Na+1Cl-1"`, or the spaced `"Fe2 +3 O3 -2"`.
///
/// Returns the plain composition together with the per-element states that
/// were embedded in the string. A formula with no `+`/`-` annotations (such
/// as `"NaCl"`) parses as an ordinary composition with an empty state map.
pub fn parse_oxi_formula(formula: &str) -> FailResult<(Composition, BTreeMap<Element, i32>)>
{
    let tokens = state_tokens(formula);
    if tokens.is_empty() {
        return Ok((formula.parse::<Composition>()?, BTreeMap::new()));
    }

    // Remove each token (first occurrence, in order) to recover the plain
    // formula; the group cut off before a token names the element that the
    // token's state binds to.
    let mut plain = String::new();
    let mut oxi_states = BTreeMap::new();
    let mut rest = formula;
    for token in &tokens {
        let at = match rest.find(token.as_str()) {
            Some(at) => at,
            None => bail!("malformed oxidation states in formula: {:?}", formula),
        };
        let group = &rest[..at];
        rest = &rest[at + token.len()..];

        let element = Element::from_symbol(leading_symbol(group))?;
        oxi_states.insert(element, token.parse::<i32>()?);
        plain.push_str(group);
    }
    plain.push_str(rest);

    Ok((plain.parse::<Composition>()?, oxi_states))
}

/// The oxidation-state tokens of a formula, in order of appearance:
/// for each stretch between alphabetic runs that contains a sign, the sign
/// character together with the trailing digit run (`"+3"`, `"-2"`).
fn state_tokens(formula: &str) -> Vec<String>
{
    let mut tokens = vec![];
    for segment in formula.split(|c: char| c.is_ascii_alphabetic()) {
        let segment = segment.trim();
        if segment.contains('+') || segment.contains('-') {
            let at = segment.rfind(|c| c == '+' || c == '-').unwrap();
            let magnitude = segment[at + 1..].trim();
            tokens.push(format!("{}{}", &segment[at..=at], magnitude));
        }
    }
    tokens
}

fn leading_symbol(group: &str) -> &str
{
    let group = group.trim();
    let end = {
        group.find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or_else(|| group.len())
    };
    &group[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(symbol: &str) -> Element
    { Element::from_symbol(symbol).unwrap() }

    fn states(pairs: &[(&str, i32)]) -> BTreeMap<Element, i32>
    { pairs.iter().map(|&(symbol, q)| (el(symbol), q)).collect() }

    #[test]
    fn no_annotations() {
        let (comp, oxi) = parse_oxi_formula("NaCl").unwrap();
        assert_eq!(comp, "NaCl".parse().unwrap());
        assert!(oxi.is_empty());

        // digits alone are amounts, not annotations
        let (comp, oxi) = parse_oxi_formula("Fe2O3").unwrap();
        assert_eq!(comp, "Fe2O3".parse().unwrap());
        assert!(oxi.is_empty());
    }

    #[test]
    fn annotated_formulas() {
        let (comp, oxi) = parse_oxi_formula("Fe2+3O3-2").unwrap();
        assert_eq!(comp, "Fe2O3".parse().unwrap());
        assert_eq!(oxi, states(&[("Fe", 3), ("O", -2)]));

        let (comp, oxi) = parse_oxi_formula("Na+1Cl-1").unwrap();
        assert_eq!(comp, "NaCl".parse().unwrap());
        assert_eq!(oxi, states(&[("Na", 1), ("Cl", -1)]));
    }

    #[test]
    fn spaced_annotations() {
        let (comp, oxi) = parse_oxi_formula("Fe2 +3 O3 -2").unwrap();
        assert_eq!(comp, "Fe2O3".parse().unwrap());
        assert_eq!(oxi, states(&[("Fe", 3), ("O", -2)]));
    }

    #[test]
    fn multidigit_states() {
        let (comp, oxi) = parse_oxi_formula("U+6O2-2").unwrap();
        assert_eq!(comp, "UO2".parse().unwrap());
        assert_eq!(oxi, states(&[("U", 6), ("O", -2)]));
    }

    #[test]
    fn trailing_unannotated_group_is_kept() {
        let (comp, oxi) = parse_oxi_formula("Fe2+3O3-2H2O").unwrap();
        assert_eq!(comp, "Fe2O3H2O".parse().unwrap());
        assert_eq!(oxi, states(&[("Fe", 3), ("O", -2)]));
    }

    #[test]
    fn malformed_annotations() {
        assert!(parse_oxi_formula("Fe2+O3").is_err()); // sign without digits
        assert!(parse_oxi_formula("+3Fe").is_err()); // no element before the state
        assert!(parse_oxi_formula("Zz2+3").is_err()); // no such element
    }
}
