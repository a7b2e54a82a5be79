use std::fmt;

use thiserror::Error;

use super::types::Element;

/// Returned by [`Molecule::add`] when an element's running count no longer
/// fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("total count of {element} exceeds {}", u32::MAX)]
pub struct CountOverflow {
    pub element: Element,
}

/// Element composition and net charge of a formula.
///
/// Elements are kept in the order they first appear in the formula. That
/// order is the tie-break order used wherever two elements rank equally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Molecule {
    composition: Vec<(Element, u32)>,
    charge: i32,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` atoms of `element`, merging with an earlier entry for the
    /// same element.
    pub fn add(&mut self, element: Element, count: u32) -> Result<(), CountOverflow> {
        match self.composition.iter_mut().find(|(e, _)| *e == element) {
            Some((_, c)) => *c = c.checked_add(count).ok_or(CountOverflow { element })?,
            None => self.composition.push((element, count)),
        }
        Ok(())
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    pub fn set_charge(&mut self, charge: i32) {
        self.charge = charge;
    }

    #[inline]
    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn composition(&self) -> &[(Element, u32)] {
        &self.composition
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.composition.iter().map(|(e, _)| *e)
    }

    pub fn count(&self, element: Element) -> u32 {
        self.composition
            .iter()
            .find(|(e, _)| *e == element)
            .map_or(0, |(_, c)| *c)
    }

    #[inline]
    pub fn distinct_elements(&self) -> usize {
        self.composition.len()
    }

    pub fn atom_count(&self) -> u64 {
        self.composition.iter().map(|(_, c)| u64::from(*c)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }

    /// Sum of valence electrons over all atoms, minus the net charge.
    ///
    /// Each element appears once with at most `u32::MAX` atoms of at most
    /// eight electrons, so the `i64` sum cannot overflow.
    pub fn total_valence_electrons(&self) -> i64 {
        let neutral: i64 = self
            .composition
            .iter()
            .map(|(e, c)| i64::from(e.valence_electrons()) * i64::from(*c))
            .sum();
        neutral - i64::from(self.charge)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, count) in &self.composition {
            write!(f, "{}", element)?;
            if *count > 1 {
                write!(f, "{}", count)?;
            }
        }
        match self.charge {
            0 => Ok(()),
            1 => f.write_str("+"),
            -1 => f.write_str("-"),
            c if c > 0 => write!(f, "+{}", c),
            c => write!(f, "-{}", c.unsigned_abs()),
        }
    }
}
