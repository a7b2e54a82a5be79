use std::hash::{Hash, Hasher};

use super::atom::AtomId;
use super::types::{BondOrder, Element};

/// Formal charge of one atom: valence electrons minus non-bonding electrons
/// minus the bonding electron pairs the atom shares (its bond order for a
/// terminal, the sum of all bond orders for the center).
#[inline]
pub fn formal_charge(element: Element, lone_electrons: u8, bond_pairs: u32) -> i32 {
    element.valence_electrons() as i32 - lone_electrons as i32 - bond_pairs as i32
}

/// One candidate Lewis structure around a single central atom.
///
/// Only central–terminal bonds exist. Lone pairs are stored as electron
/// counts (always even). Formal charges are derived on construction, so two
/// structures compare equal exactly when their bonds and lone pairs match.
#[derive(Debug, Clone)]
pub struct Structure {
    central: AtomId,
    bonds: Vec<(AtomId, BondOrder)>,
    lone_pairs: Vec<(AtomId, u8)>,
    formal_charges: Vec<(AtomId, i32)>,
}

impl Structure {
    /// Assembles a structure from parallel slices.
    ///
    /// `lone_electrons[0]` belongs to the central atom and
    /// `lone_electrons[i + 1]` to `terminals[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the slice lengths disagree.
    pub fn from_parts(
        central: AtomId,
        terminals: &[AtomId],
        orders: &[BondOrder],
        lone_electrons: &[u8],
    ) -> Self {
        assert_eq!(terminals.len(), orders.len());
        assert_eq!(terminals.len() + 1, lone_electrons.len());

        let bonds: Vec<(AtomId, BondOrder)> = terminals
            .iter()
            .copied()
            .zip(orders.iter().copied())
            .collect();

        let lone_pairs: Vec<(AtomId, u8)> = std::iter::once(central)
            .chain(terminals.iter().copied())
            .zip(lone_electrons.iter().copied())
            .collect();

        let central_pairs: u32 = orders.iter().map(|o| o.value() as u32).sum();
        let mut formal_charges = Vec::with_capacity(lone_pairs.len());
        formal_charges.push((
            central,
            formal_charge(central.element, lone_electrons[0], central_pairs),
        ));
        for ((atom, order), (_, lp)) in bonds.iter().zip(lone_pairs.iter().skip(1)) {
            formal_charges.push((
                *atom,
                formal_charge(atom.element, *lp, order.value() as u32),
            ));
        }

        Self {
            central,
            bonds,
            lone_pairs,
            formal_charges,
        }
    }

    #[inline]
    pub fn central(&self) -> AtomId {
        self.central
    }

    pub fn bonds(&self) -> &[(AtomId, BondOrder)] {
        &self.bonds
    }

    pub fn lone_pairs(&self) -> &[(AtomId, u8)] {
        &self.lone_pairs
    }

    pub fn formal_charges(&self) -> &[(AtomId, i32)] {
        &self.formal_charges
    }

    pub fn terminals(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.bonds.iter().map(|(a, _)| *a)
    }

    pub fn bond_order(&self, atom: AtomId) -> Option<BondOrder> {
        self.bonds.iter().find(|(a, _)| *a == atom).map(|(_, o)| *o)
    }

    pub fn lone_electrons(&self, atom: AtomId) -> u8 {
        self.lone_pairs
            .iter()
            .find(|(a, _)| *a == atom)
            .map_or(0, |(_, lp)| *lp)
    }

    pub fn formal_charge(&self, atom: AtomId) -> Option<i32> {
        self.formal_charges
            .iter()
            .find(|(a, _)| *a == atom)
            .map(|(_, c)| *c)
    }

    pub fn total_bond_order(&self) -> u32 {
        self.bonds.iter().map(|(_, o)| o.value() as u32).sum()
    }

    /// Bonding plus non-bonding electrons around the central atom.
    pub fn central_electron_count(&self) -> u32 {
        2 * self.total_bond_order() + self.lone_electrons(self.central) as u32
    }

    /// Every electron placed in the structure, bonding and non-bonding.
    pub fn electron_count(&self) -> u32 {
        2 * self.total_bond_order()
            + self
                .lone_pairs
                .iter()
                .map(|(_, lp)| *lp as u32)
                .sum::<u32>()
    }

    pub fn net_formal_charge(&self) -> i32 {
        self.formal_charges.iter().map(|(_, c)| c).sum()
    }

    /// Sum of absolute formal charges; lower is better.
    pub fn primary_score(&self) -> u32 {
        self.formal_charges
            .iter()
            .map(|(_, c)| c.unsigned_abs())
            .sum()
    }

    /// Number of distinct atoms bonded to the center, regardless of order.
    #[inline]
    pub fn bonded_atom_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn central_lone_pairs(&self) -> u8 {
        self.lone_electrons(self.central) / 2
    }
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        self.central == other.central
            && self.bonds == other.bonds
            && self.lone_pairs == other.lone_pairs
    }
}

impl Eq for Structure {}

impl Hash for Structure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.central.hash(state);
        self.bonds.hash(state);
        self.lone_pairs.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon_dioxide(o1: BondOrder, o2: BondOrder, lp: [u8; 3]) -> Structure {
        Structure::from_parts(
            AtomId::central(Element::C),
            &[AtomId::new(Element::O, 1), AtomId::new(Element::O, 2)],
            &[o1, o2],
            &lp,
        )
    }

    #[test]
    fn formal_charge_formula() {
        assert_eq!(formal_charge(Element::N, 0, 4), 1);
        assert_eq!(formal_charge(Element::O, 6, 1), -1);
        assert_eq!(formal_charge(Element::H, 0, 1), 0);
    }

    #[test]
    fn double_bonded_carbon_dioxide_is_neutral() {
        let s = carbon_dioxide(BondOrder::Double, BondOrder::Double, [0, 4, 4]);
        assert!(s.formal_charges().iter().all(|(_, c)| *c == 0));
        assert_eq!(s.primary_score(), 0);
        assert_eq!(s.total_bond_order(), 4);
        assert_eq!(s.central_electron_count(), 8);
        assert_eq!(s.electron_count(), 16);
    }

    #[test]
    fn single_bonded_skeleton_charges() {
        let s = carbon_dioxide(BondOrder::Single, BondOrder::Single, [0, 6, 6]);
        let c0 = AtomId::central(Element::C);
        let o1 = AtomId::new(Element::O, 1);
        assert_eq!(s.formal_charge(c0), Some(2));
        assert_eq!(s.formal_charge(o1), Some(-1));
        assert_eq!(s.net_formal_charge(), 0);
        assert_eq!(s.primary_score(), 4);
    }

    #[test]
    fn terminal_charge_counts_its_bond_order() {
        let s = carbon_dioxide(BondOrder::Triple, BondOrder::Single, [0, 2, 6]);
        let c0 = AtomId::central(Element::C);
        let o1 = AtomId::new(Element::O, 1);
        assert_eq!(s.formal_charge(o1), Some(1));
        assert_eq!(s.formal_charge(c0), Some(0));
        assert_eq!(s.bond_order(o1), Some(BondOrder::Triple));
        assert_eq!(s.net_formal_charge(), 0);
    }

    #[test]
    fn equality_follows_bonds_and_lone_pairs() {
        let a = carbon_dioxide(BondOrder::Double, BondOrder::Single, [0, 4, 6]);
        let b = carbon_dioxide(BondOrder::Double, BondOrder::Single, [0, 4, 6]);
        let c = carbon_dioxide(BondOrder::Single, BondOrder::Double, [0, 6, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn lone_electrons_lookup_and_central_pairs() {
        let s = Structure::from_parts(
            AtomId::central(Element::O),
            &[AtomId::new(Element::H, 1), AtomId::new(Element::H, 2)],
            &[BondOrder::Single, BondOrder::Single],
            &[4, 0, 0],
        );
        assert_eq!(s.central_lone_pairs(), 2);
        assert_eq!(s.lone_electrons(AtomId::new(Element::H, 2)), 0);
        assert_eq!(s.bonded_atom_count(), 2);
        assert_eq!(s.terminals().count(), 2);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        let _ = Structure::from_parts(
            AtomId::central(Element::C),
            &[AtomId::new(Element::O, 1)],
            &[BondOrder::Single],
            &[0],
        );
    }
}
