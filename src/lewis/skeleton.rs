use crate::model::atom::AtomId;
use crate::model::molecule::Molecule;
use crate::model::prediction::NoStructure;
use crate::model::structure::Structure;
use crate::model::types::{BondOrder, Element};

/// Non-bonding electrons placed on each non-hydrogen terminal before the
/// remainder goes to the center.
const TERMINAL_OCTET_LONE_ELECTRONS: i64 = 6;

/// Bond orders and lone electrons of one search state.
///
/// `lone_electrons[0]` is the center; `lone_electrons[i + 1]` and `orders[i]`
/// belong to terminal `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub orders: Vec<BondOrder>,
    pub lone_electrons: Vec<u8>,
}

impl Node {
    /// Copy with terminal `terminal` promoted one bond order, paid for by
    /// one of its lone pairs.
    ///
    /// Returns `None` if the bond is already triple or the terminal has
    /// fewer than two lone electrons.
    pub fn promote(&self, terminal: usize) -> Option<Node> {
        let next = self.orders.get(terminal)?.promoted()?;
        let lone = *self.lone_electrons.get(terminal + 1)?;
        if lone < 2 {
            return None;
        }

        let mut child = self.clone();
        child.orders[terminal] = next;
        child.lone_electrons[terminal + 1] = lone - 2;
        Some(child)
    }
}

/// The single-bonded starting point of the octet search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    central: AtomId,
    terminals: Vec<AtomId>,
    total_electrons: i64,
    initial: Node,
}

impl Skeleton {
    /// Bonds every non-central atom once to the center and distributes the
    /// remaining electrons as lone pairs.
    ///
    /// Non-hydrogen terminals receive up to six lone electrons each, in
    /// terminal order; whatever is left sits on the center.
    ///
    /// # Errors
    ///
    /// - [`NoStructure::Radical`] if the valence electron count is odd.
    /// - [`NoStructure::ElectronDeficient`] if there are fewer than two
    ///   electrons per terminal.
    /// - [`NoStructure::Oversized`] if atom or electron counts do not fit a
    ///   structure.
    pub fn build(molecule: &Molecule, central: Element) -> Result<Skeleton, NoStructure> {
        let total = molecule.total_valence_electrons();
        if total % 2 != 0 {
            return Err(NoStructure::Radical { electrons: total });
        }

        let terminals = terminal_atoms(molecule, central)?;

        let required = i64::try_from(terminals.len())
            .ok()
            .and_then(|n| n.checked_mul(2))
            .ok_or(NoStructure::Oversized)?;
        if required > total {
            return Err(NoStructure::ElectronDeficient {
                required,
                available: total,
            });
        }

        let mut remaining = total - required;
        let mut lone_electrons = Vec::with_capacity(terminals.len() + 1);
        lone_electrons.push(0);
        for atom in &terminals {
            let given = if atom.element == Element::H {
                0
            } else {
                remaining.min(TERMINAL_OCTET_LONE_ELECTRONS)
            };
            remaining -= given;
            // `given` never exceeds six.
            lone_electrons.push(given as u8);
        }
        lone_electrons[0] = u8::try_from(remaining).map_err(|_| NoStructure::Oversized)?;

        let initial = Node {
            orders: vec![BondOrder::Single; terminals.len()],
            lone_electrons,
        };

        Ok(Skeleton {
            central: AtomId::central(central),
            terminals,
            total_electrons: total,
            initial,
        })
    }

    #[inline]
    pub fn central(&self) -> AtomId {
        self.central
    }

    pub fn terminals(&self) -> &[AtomId] {
        &self.terminals
    }

    #[inline]
    pub fn total_electrons(&self) -> i64 {
        self.total_electrons
    }

    pub fn initial(&self) -> &Node {
        &self.initial
    }

    /// Labels a search node with this skeleton's atoms.
    pub fn materialize(&self, node: &Node) -> Structure {
        Structure::from_parts(
            self.central,
            &self.terminals,
            &node.orders,
            &node.lone_electrons,
        )
    }
}

/// Every atom but one copy of the central element, in formula order, each
/// element numbered from 1.
fn terminal_atoms(molecule: &Molecule, central: Element) -> Result<Vec<AtomId>, NoStructure> {
    let mut terminals = Vec::new();
    for &(element, count) in molecule.composition() {
        let count = if element == central {
            count.saturating_sub(1)
        } else {
            count
        };
        let count = u16::try_from(count).map_err(|_| NoStructure::Oversized)?;
        terminals.extend((1..=count).map(|index| AtomId::new(element, index)));
    }
    Ok(terminals)
}
