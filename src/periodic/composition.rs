/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Element;

use ::std::collections::BTreeMap;
use ::std::fmt;
use ::std::str;
use ::failure::Backtrace;
use ::itertools::Itertools;

/// An element, optionally decorated with an oxidation state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Species {
    pub element: Element,
    pub oxi_state: Option<i32>,
}

impl Species {
    pub fn new(element: Element) -> Species
    { Species { element, oxi_state: None } }

    pub fn with_oxi_state(element: Element, oxi_state: i32) -> Species
    { Species { element, oxi_state: Some(oxi_state) } }
}

impl From<Element> for Species {
    fn from(element: Element) -> Species
    { Species::new(element) }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.oxi_state {
            None => write!(f, "{}", self.element),
            Some(q) => write!(f, "{}{:+}", self.element, q),
        }
    }
}

/// An unordered chemical composition; species mapped to amounts.
///
/// Amounts may be fractional (non-stoichiometric formulas). Construction
/// merges duplicate species; a `Composition` holds at most one term per
/// distinct species.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    terms: BTreeMap<Species, f64>,
}

#[derive(Debug, Fail)]
#[fail(display = "Unable to parse formula: {:?}", text)]
pub struct FormulaParseError {
    text: String,
    backtrace: Backtrace,
}

impl FormulaParseError {
    fn new(s: &str) -> Self
    { FormulaParseError {
        text: s.to_string(),
        backtrace: Backtrace::new(),
    }}
}

impl Composition {
    pub fn new() -> Composition
    { Default::default() }

    pub fn from_terms(terms: impl IntoIterator<Item=(Species, f64)>) -> Composition
    {
        let mut out = Composition::new();
        for (species, amount) in terms {
            *out.terms.entry(species).or_insert(0.0) += amount;
        }
        out
    }

    pub fn from_el_amt(el_amt: impl IntoIterator<Item=(Element, f64)>) -> Composition
    {
        Self::from_terms({
            el_amt.into_iter().map(|(element, amount)| (Species::new(element), amount))
        })
    }

    pub fn is_empty(&self) -> bool
    { self.terms.is_empty() }

    /// Total number of atoms per formula unit.
    pub fn num_atoms(&self) -> f64
    { self.terms.values().sum() }

    pub fn terms(&self) -> impl Iterator<Item=(Species, f64)> + '_
    { self.terms.iter().map(|(&species, &amount)| (species, amount)) }

    /// Collapses the composition to amounts per element, merging any species
    /// of the same element.
    pub fn el_amt(&self) -> BTreeMap<Element, f64>
    {
        let mut out = BTreeMap::new();
        for (species, amount) in self.terms() {
            *out.entry(species.element).or_insert(0.0) += amount;
        }
        out
    }

    /// The oxidation states carried by decorated species. Elements whose
    /// species are undecorated do not appear.
    pub fn oxi_states(&self) -> BTreeMap<Element, i32>
    {
        self.terms.keys()
            .filter_map(|species| Some((species.element, species.oxi_state?)))
            .collect()
    }

    /// A copy of this composition with the given oxidation states applied to
    /// the matching elements' species.
    pub fn with_oxi_states(&self, states: &BTreeMap<Element, i32>) -> Composition
    {
        Self::from_terms(self.terms().map(|(mut species, amount)| {
            if let Some(&q) = states.get(&species.element) {
                species.oxi_state = Some(q);
            }
            (species, amount)
        }))
    }
}

impl str::FromStr for Composition {
    type Err = FormulaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let terms = Parser { text: s, pos: 0 }.parse()?;
        Ok(Composition::from_el_amt(terms))
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let formula = {
            self.el_amt().into_iter()
                .map(|(element, amount)| {
                    if amount == 1.0 { format!("{}", element) }
                    else if amount.fract() == 0.0 { format!("{}{}", element, amount as i64) }
                    else { format!("{}{}", element, amount) }
                })
                .join(" ")
        };
        fmt::Display::fmt(&formula, f)
    }
}

//--------------------------------------------------------------------------------------
// plain formula parsing
//
// grammar:  formula := unit+
//           unit    := SYMBOL amount? | '(' formula ')' amount?
//           amount  := DIGITS ('.' DIGITS?)?
// whitespace is permitted between units.

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self) -> FormulaParseError
    { FormulaParseError::new(self.text) }

    fn parse(mut self) -> Result<Vec<(Element, f64)>, FormulaParseError>
    {
        let terms = self.units()?;
        self.skip_whitespace();
        // leftovers mean an unmatched ')' or other garbage
        if self.pos != self.text.len() || terms.is_empty() {
            return Err(self.error());
        }
        Ok(terms)
    }

    fn units(&mut self) -> Result<Vec<(Element, f64)>, FormulaParseError>
    {
        let mut out = vec![];
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(')') => break, // consumed by the enclosing group
                Some('(') => {
                    self.pos += 1;
                    let inner = self.units()?;
                    if inner.is_empty() || self.peek() != Some(')') {
                        return Err(self.error());
                    }
                    self.pos += 1;
                    let multiplier = self.amount()?.unwrap_or(1.0);
                    out.extend(inner.into_iter().map(|(el, amt)| (el, amt * multiplier)));
                },
                Some(c) if c.is_ascii_uppercase() => {
                    let element = self.symbol()?;
                    let amount = self.amount()?.unwrap_or(1.0);
                    out.push((element, amount));
                },
                Some(_) => return Err(self.error()),
            }
        }
        Ok(out)
    }

    fn symbol(&mut self) -> Result<Element, FormulaParseError>
    {
        let start = self.pos;
        self.pos += 1; // the uppercase letter just peeked
        while self.peek().map_or(false, |c| c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        Element::from_symbol(&self.text[start..self.pos]).map_err(|_| self.error())
    }

    fn amount(&mut self) -> Result<Option<f64>, FormulaParseError>
    {
        let start = self.pos;
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if self.pos == start {
            return Ok(None);
        }
        self.text[start..self.pos].parse().map(Some).map_err(|_| self.error())
    }

    fn skip_whitespace(&mut self)
    {
        while self.peek().map_or(false, |c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char>
    { self.text[self.pos..].chars().next() }
}
