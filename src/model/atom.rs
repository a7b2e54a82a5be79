use std::fmt;

use super::types::Element;

/// Identity of one atom instance within a single-center molecule.
///
/// The central atom always carries index `0`; terminal atoms of each element
/// are numbered `1..=n` independently per element, so three oxygens around a
/// sulfur become `O1`, `O2`, `O3` while the sulfur is `S0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId {
    pub element: Element,
    pub index: u16,
}

impl AtomId {
    pub fn new(element: Element, index: u16) -> Self {
        Self { element, index }
    }

    pub fn central(element: Element) -> Self {
        Self { element, index: 0 }
    }

    #[inline]
    pub fn is_central(&self) -> bool {
        self.index == 0
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.element, self.index)
    }
}
