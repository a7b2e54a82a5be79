use crate::model::structure::Structure;
use indexmap::IndexSet;

/// Ordered set of candidate structures.
///
/// Insertion order is the order the search first reached each structure;
/// inserting a duplicate leaves the set and its order unchanged.
#[derive(Debug, Clone, Default)]
pub struct StructureStore {
    structures: IndexSet<Structure>,
}

impl StructureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `structure`, returning `false` if it was already present.
    pub fn insert(&mut self, structure: Structure) -> bool {
        self.structures.insert(structure)
    }

    pub fn contains(&self, structure: &Structure) -> bool {
        self.structures.contains(structure)
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Structure> {
        self.structures.iter()
    }

    pub fn into_vec(self) -> Vec<Structure> {
        self.structures.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::AtomId;
    use crate::model::types::{BondOrder, Element};

    fn co2(o1: BondOrder, o2: BondOrder, lp: [u8; 3]) -> Structure {
        Structure::from_parts(
            AtomId::central(Element::C),
            &[AtomId::new(Element::O, 1), AtomId::new(Element::O, 2)],
            &[o1, o2],
            &lp,
        )
    }

    #[test]
    fn duplicates_are_ignored_and_order_is_kept() {
        let single = co2(BondOrder::Single, BondOrder::Single, [0, 6, 6]);
        let double = co2(BondOrder::Double, BondOrder::Double, [0, 4, 4]);

        let mut store = StructureStore::new();
        assert!(store.is_empty());
        assert!(store.insert(single.clone()));
        assert!(store.insert(double.clone()));
        assert!(!store.insert(single.clone()));

        assert_eq!(store.len(), 2);
        assert!(store.contains(&double));
        assert_eq!(store.into_vec(), vec![single, double]);
    }

    #[test]
    fn iteration_follows_first_insertion() {
        let a = co2(BondOrder::Double, BondOrder::Single, [0, 4, 6]);
        let b = co2(BondOrder::Single, BondOrder::Double, [0, 6, 4]);

        let mut store = StructureStore::new();
        store.insert(b.clone());
        store.insert(a.clone());
        store.insert(b.clone());

        let order: Vec<_> = store.iter().cloned().collect();
        assert_eq!(order, vec![b, a]);
    }
}
