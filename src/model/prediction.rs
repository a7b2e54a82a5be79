use super::atom::AtomId;
use super::geometry::Geometry;
use super::molecule::Molecule;
use super::structure::Structure;

/// Counters describing one run of the octet search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Search nodes evaluated, including pruned ones.
    pub nodes_visited: usize,
    /// Distinct candidate structures recorded.
    pub candidates: usize,
    /// `true` if the node ceiling stopped the search early.
    pub truncated: bool,
}

/// Why no Lewis structure could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoStructure {
    /// Odd total valence electron count; radicals are not modeled.
    Radical { electrons: i64 },
    /// Too few electrons to single-bond every terminal atom.
    ElectronDeficient { required: i64, available: i64 },
    /// The search finished without recording any candidate.
    EmptySearch,
    /// Atom or electron counts exceed what a single structure can hold.
    Oversized,
}

/// The optimal structure, its resonance partners, and the derived geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LewisResult {
    pub central: AtomId,
    pub best: Structure,
    /// Structures tied with `best`, in the order the search found them.
    pub resonance: Vec<Structure>,
    /// Sum of absolute formal charges shared by `best` and `resonance`.
    pub primary_score: u32,
    pub geometry: Geometry,
    pub stats: SearchStats,
}

impl LewisResult {
    #[inline]
    pub fn has_resonance(&self) -> bool {
        !self.resonance.is_empty()
    }

    /// `best` followed by every resonance form.
    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        std::iter::once(&self.best).chain(self.resonance.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Resolved(Box<LewisResult>),
    NoStructure(NoStructure),
}

/// Everything the pipeline learned about one formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub molecule: Molecule,
    pub total_valence_electrons: i64,
    pub outcome: Outcome,
}

impl Prediction {
    pub fn result(&self) -> Option<&LewisResult> {
        match &self.outcome {
            Outcome::Resolved(result) => Some(result),
            Outcome::NoStructure(_) => None,
        }
    }

    pub fn no_structure(&self) -> Option<NoStructure> {
        match &self.outcome {
            Outcome::Resolved(_) => None,
            Outcome::NoStructure(reason) => Some(*reason),
        }
    }
}
