use super::error::Error;
use crate::model::geometry::{Geometry, VseprEntry};
use crate::model::structure::Structure;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

const DEFAULT_VSEPR_TOML: &str = include_str!("../../resources/vsepr.toml");

static DEFAULT_TABLE: OnceLock<VseprTable> = OnceLock::new();

/// Lookup table from (bonded atoms, central lone pairs) to a VSEPR geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VseprTable {
    #[serde(rename = "geometry", default)]
    entries: Vec<VseprEntry>,
}

impl VseprTable {
    /// The fourteen standard geometries shipped with the crate.
    pub fn embedded() -> &'static VseprTable {
        DEFAULT_TABLE.get_or_init(|| {
            Self::from_toml(DEFAULT_VSEPR_TOML)
                .expect("Failed to parse embedded VSEPR table. This is a library bug.")
        })
    }

    /// Parses a table from TOML text, rejecting repeated (X, E) keys.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        let table: VseprTable = toml::from_str(toml)?;

        let mut seen = HashSet::with_capacity(table.entries.len());
        for entry in &table.entries {
            if !seen.insert(entry.key()) {
                return Err(Error::duplicate_vsepr_entry(entry.bonded, entry.lone_pairs));
            }
        }

        Ok(table)
    }

    pub fn lookup(&self, bonded: u8, lone_pairs: u8) -> Option<&VseprEntry> {
        self.entries
            .iter()
            .find(|e| e.bonded == bonded && e.lone_pairs == lone_pairs)
    }

    pub fn entries(&self) -> &[VseprEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the table parsed from `custom_toml`, or a copy of the embedded one.
pub fn load_table(custom_toml: Option<&str>) -> Result<VseprTable, Error> {
    match custom_toml {
        Some(toml) => VseprTable::from_toml(toml),
        None => Ok(VseprTable::embedded().clone()),
    }
}

/// Geometry of the central atom of `structure`.
///
/// X counts bonded terminals regardless of bond order; E is the number of
/// lone pairs left on the center.
pub fn predict_geometry(structure: &Structure, table: &VseprTable) -> Geometry {
    let bonded = structure.bonded_atom_count();
    let lone_pairs = structure.central_lone_pairs();

    let entry = u8::try_from(bonded)
        .ok()
        .and_then(|x| table.lookup(x, lone_pairs));
    match entry {
        Some(entry) => Geometry::Known(entry.clone()),
        None => Geometry::Unknown { bonded, lone_pairs },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::AtomId;
    use crate::model::types::{BondOrder, Element};

    fn entry(bonded: u8, lone_pairs: u8) -> &'static VseprEntry {
        VseprTable::embedded().lookup(bonded, lone_pairs).unwrap()
    }

    #[test]
    fn embedded_table_has_fourteen_unique_entries() {
        let table = VseprTable::embedded();
        assert_eq!(table.len(), 14);
        let keys: HashSet<_> = table.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys.len(), 14);
    }

    #[test]
    fn standard_geometries() {
        let linear = entry(2, 0);
        assert_eq!(linear.notation, "AX2");
        assert_eq!(linear.shape, "Linear");
        assert_eq!(linear.angle, "180");
        assert_eq!(linear.hybridization, "sp");

        assert_eq!(entry(2, 2).shape, "Bent");
        assert_eq!(entry(2, 2).angle, "<109.5");
        assert_eq!(entry(4, 2).shape, "Square Planar");
        assert_eq!(entry(3, 2).shape, "T-shaped");
        assert_eq!(entry(6, 0).hybridization, "sp3d2");
    }

    #[test]
    fn trigonal_bipyramid_is_sp3d() {
        let tbp = entry(5, 0);
        assert_eq!(tbp.shape, "Trigonal Bipyramidal");
        assert_eq!(tbp.angle, "120 & 90");
        assert_eq!(tbp.hybridization, "sp3d");
    }

    #[test]
    fn missing_key_returns_none() {
        assert!(VseprTable::embedded().lookup(0, 4).is_none());
        assert!(VseprTable::embedded().lookup(7, 0).is_none());
    }

    #[test]
    fn custom_table_from_toml() {
        let toml = r#"
            [[geometry]]
            bonded = 2
            lone_pairs = 0
            notation = "AX2"
            shape = "Linear"
            angle = "180"
            hybridization = "sp"
        "#;
        let table = VseprTable::from_toml(toml).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lookup(4, 0).is_none());
    }

    #[test]
    fn empty_toml_yields_empty_table() {
        let table = VseprTable::from_toml("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let row = r#"
            [[geometry]]
            bonded = 4
            lone_pairs = 0
            notation = "AX4"
            shape = "Tetrahedral"
            angle = "109.5"
            hybridization = "sp3"
        "#;
        let toml = format!("{row}\n{row}");
        let err = VseprTable::from_toml(&toml).unwrap_err();
        assert!(matches!(err, Error::VseprTable(_)));
        assert!(err.to_string().contains("X=4, E=0"));
    }

    #[test]
    fn load_table_falls_back_to_embedded() {
        assert_eq!(&load_table(None).unwrap(), VseprTable::embedded());
        assert!(load_table(Some("")).unwrap().is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = VseprTable::from_toml("[[geometry]]\nbonded = \"two\"").unwrap_err();
        assert!(matches!(err, Error::VseprTableParse(_)));
    }

    #[test]
    fn geometry_counts_atoms_not_bond_order() {
        let s = Structure::from_parts(
            AtomId::central(Element::C),
            &[AtomId::new(Element::O, 1), AtomId::new(Element::O, 2)],
            &[BondOrder::Double, BondOrder::Double],
            &[0, 4, 4],
        );
        let geometry = predict_geometry(&s, VseprTable::embedded());
        assert_eq!(geometry.bonded(), 2);
        assert_eq!(geometry.lone_pairs(), 0);
        assert_eq!(geometry.entry().unwrap().shape, "Linear");
    }

    #[test]
    fn unknown_geometry_is_reported() {
        let s = Structure::from_parts(
            AtomId::central(Element::O),
            &[AtomId::new(Element::H, 1), AtomId::new(Element::H, 2)],
            &[BondOrder::Single, BondOrder::Single],
            &[4, 0, 0],
        );
        let empty = VseprTable::from_toml("").unwrap();
        assert_eq!(
            predict_geometry(&s, &empty),
            Geometry::Unknown {
                bonded: 2,
                lone_pairs: 2
            }
        );
    }

    #[test]
    fn unknown_geometry_keeps_counts_past_u8() {
        let terminals: Vec<AtomId> = (1..=300).map(|i| AtomId::new(Element::H, i)).collect();
        let s = Structure::from_parts(
            AtomId::central(Element::C),
            &terminals,
            &[BondOrder::Single; 300],
            &[0u8; 301],
        );
        assert_eq!(
            predict_geometry(&s, VseprTable::embedded()),
            Geometry::Unknown {
                bonded: 300,
                lone_pairs: 0
            }
        );
    }
}
