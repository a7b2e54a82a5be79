use super::config::{PENALTY_REFERENCE_EN, PENALTY_TOLERANCE, TieBreak};
use crate::model::structure::Structure;

/// The best candidate and the structures tied with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub best: Structure,
    pub resonance: Vec<Structure>,
    pub primary_score: u32,
}

impl Ranking {
    /// `best` followed by every resonance form, in candidate order.
    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        std::iter::once(&self.best).chain(self.resonance.iter())
    }
}

/// Ranks candidates by total absolute formal charge, then by `tie_break`.
///
/// Survivors keep their input order: the first becomes `best`, the rest are
/// its resonance forms. Returns `None` for an empty slice.
pub fn rank(candidates: &[Structure], tie_break: TieBreak) -> Option<Ranking> {
    let primary_score = candidates.iter().map(Structure::primary_score).min()?;
    let minimal: Vec<&Structure> = candidates
        .iter()
        .filter(|s| s.primary_score() == primary_score)
        .collect();

    let tied = minimal.len();

    let winners: Vec<&Structure> = if tied == 1 {
        minimal
    } else {
        match tie_break {
            TieBreak::ChargePlacement => best_by_placement(&minimal),
            TieBreak::ElectronegativityPenalty => best_by_penalty(&minimal),
        }
    };

    log::debug!(
        "ranking: {} candidates, {} at score {}, {} after tie-break",
        candidates.len(),
        tied,
        primary_score,
        winners.len()
    );

    let mut winners = winners.into_iter().cloned();
    let best = winners.next()?;
    Some(Ranking {
        best,
        resonance: winners.collect(),
        primary_score,
    })
}

/// Lowest electronegativity among negatively charged atoms, or infinity
/// when no atom is negative.
pub fn negative_charge_placement(structure: &Structure) -> f64 {
    structure
        .formal_charges()
        .iter()
        .filter(|(_, c)| *c < 0)
        .map(|(atom, _)| atom.element.electronegativity())
        .fold(f64::INFINITY, f64::min)
}

/// Electronegativity-weighted charge penalty; lower is better.
pub fn charge_penalty(structure: &Structure) -> f64 {
    structure
        .formal_charges()
        .iter()
        .map(|(atom, c)| {
            let en = atom.element.electronegativity();
            match c.signum() {
                1 => *c as f64 * en,
                -1 => c.unsigned_abs() as f64 * (PENALTY_REFERENCE_EN - en),
                _ => 0.0,
            }
        })
        .sum()
}

fn best_by_placement<'a>(structures: &[&'a Structure]) -> Vec<&'a Structure> {
    let keys: Vec<f64> = structures
        .iter()
        .map(|s| negative_charge_placement(s))
        .collect();
    let top = keys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    structures
        .iter()
        .zip(&keys)
        .filter(|(_, k)| **k == top)
        .map(|(s, _)| *s)
        .collect()
}

fn best_by_penalty<'a>(structures: &[&'a Structure]) -> Vec<&'a Structure> {
    let penalties: Vec<f64> = structures.iter().map(|s| charge_penalty(s)).collect();
    let lowest = penalties.iter().copied().fold(f64::INFINITY, f64::min);

    structures
        .iter()
        .zip(&penalties)
        .filter(|(_, p)| (**p - lowest).abs() <= PENALTY_TOLERANCE)
        .map(|(s, _)| *s)
        .collect()
}
