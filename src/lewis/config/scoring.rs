//! Tie-break rules used when ranking candidate structures.

/// Rule that separates structures sharing the minimal formal-charge score.
///
/// Both rules first keep only the structures with the smallest sum of
/// absolute formal charges; they differ in how the survivors are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Discrete placement rule.
    ///
    /// For each structure, take the lowest electronegativity among atoms
    /// carrying a negative formal charge (infinity if none do). Structures
    /// with the highest such value win; all of them are resonance forms.
    #[default]
    ChargePlacement,

    /// Continuous electronegativity-weighted penalty.
    ///
    /// Each positive charge costs `charge × EN`, each negative charge costs
    /// `|charge| × (4.0 − EN)`. The lowest total wins; structures within
    /// [`PENALTY_TOLERANCE`] of it are resonance forms.
    ElectronegativityPenalty,
}

/// Upper reference electronegativity used by the continuous penalty.
pub const PENALTY_REFERENCE_EN: f64 = 4.0;

/// Two penalties closer than this are treated as equal.
pub const PENALTY_TOLERANCE: f64 = 1e-9;
