use serde::Deserialize;

/// One row of the VSEPR table, keyed by bonded-atom count (X) and central
/// lone-pair count (E).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VseprEntry {
    /// Number of atoms bonded to the center (X).
    pub bonded: u8,
    /// Number of lone pairs on the center (E).
    pub lone_pairs: u8,
    /// AXE notation, e.g. `AX2E2`.
    pub notation: String,
    /// Molecular shape name.
    pub shape: String,
    /// Ideal bond angle(s) as display text, e.g. `<109.5` or `120 & 90`.
    pub angle: String,
    /// Hybridization of the central atom.
    pub hybridization: String,
}

impl VseprEntry {
    #[inline]
    pub fn key(&self) -> (u8, u8) {
        (self.bonded, self.lone_pairs)
    }
}

/// Geometry predicted for the central atom of the best structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    /// The (X, E) pair has a table entry.
    Known(VseprEntry),
    /// The table has no entry for this (X, E) pair.
    Unknown { bonded: usize, lone_pairs: u8 },
}

impl Geometry {
    pub fn bonded(&self) -> usize {
        match self {
            Geometry::Known(entry) => usize::from(entry.bonded),
            Geometry::Unknown { bonded, .. } => *bonded,
        }
    }

    pub fn lone_pairs(&self) -> u8 {
        match self {
            Geometry::Known(entry) => entry.lone_pairs,
            Geometry::Unknown { lone_pairs, .. } => *lone_pairs,
        }
    }

    pub fn entry(&self) -> Option<&VseprEntry> {
        match self {
            Geometry::Known(entry) => Some(entry),
            Geometry::Unknown { .. } => None,
        }
    }
}
