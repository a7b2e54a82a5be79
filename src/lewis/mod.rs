mod central;
mod config;
mod error;
mod rank;
mod search;
mod skeleton;
mod store;
mod vsepr;

pub use central::select_central_atom;
pub use config::{
    LewisConfig, PENALTY_REFERENCE_EN, PENALTY_TOLERANCE, SearchLimits, SearchPolicy, TieBreak,
};
pub use error::Error;
pub use rank::{Ranking, charge_penalty, negative_charge_placement, rank};
pub use search::search;
pub use skeleton::{Node, Skeleton};
pub use store::StructureStore;
pub use vsepr::{VseprTable, load_table, predict_geometry};

use crate::model::molecule::Molecule;
use crate::model::prediction::{LewisResult, NoStructure, Outcome, Prediction};

/// Parses `formula` and predicts its Lewis structure and geometry.
pub fn predict(formula: &str, config: &LewisConfig) -> Result<Prediction, Error> {
    let molecule = crate::io::parse_formula(formula)?;
    predict_molecule(&molecule, config)
}

/// Predicts the Lewis structure and geometry of an already parsed molecule.
///
/// Only an invalid VSEPR table fails here. Formulas without a Lewis
/// structure produce [`Outcome::NoStructure`].
pub fn predict_molecule(molecule: &Molecule, config: &LewisConfig) -> Result<Prediction, Error> {
    let table = load_table(config.vsepr.as_deref())?;

    let outcome = match resolve(molecule, config, &table) {
        Ok(result) => Outcome::Resolved(Box::new(result)),
        Err(reason) => {
            log::debug!("{}: no structure ({:?})", molecule, reason);
            Outcome::NoStructure(reason)
        }
    };

    Ok(Prediction {
        molecule: molecule.clone(),
        total_valence_electrons: molecule.total_valence_electrons(),
        outcome,
    })
}

fn resolve(
    molecule: &Molecule,
    config: &LewisConfig,
    table: &VseprTable,
) -> Result<LewisResult, NoStructure> {
    let central = select_central_atom(molecule).ok_or(NoStructure::EmptySearch)?;
    log::debug!("{}: central atom {}", molecule, central);

    let skeleton = Skeleton::build(molecule, central)?;
    log::debug!(
        "{}: skeleton with {} terminals, {} electrons",
        molecule,
        skeleton.terminals().len(),
        skeleton.total_electrons()
    );

    let (store, stats) = search(&skeleton, config.search, config.limits);
    let ranking = rank(&store.into_vec(), config.tie_break).ok_or(NoStructure::EmptySearch)?;
    let geometry = predict_geometry(&ranking.best, table);

    Ok(LewisResult {
        central: skeleton.central(),
        best: ranking.best,
        resonance: ranking.resonance,
        primary_score: ranking.primary_score,
        geometry,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::AtomId;
    use crate::model::types::{BondOrder, Element};

    fn resolved(formula: &str) -> LewisResult {
        let prediction = predict(formula, &LewisConfig::default()).unwrap();
        prediction.result().cloned().unwrap()
    }

    #[test]
    fn carbon_dioxide_is_linear() {
        let result = resolved("CO2");
        assert_eq!(result.central, AtomId::central(Element::C));
        assert_eq!(result.primary_score, 0);
        assert!(!result.has_resonance());
        assert_eq!(
            result.best.bond_order(AtomId::new(Element::O, 1)),
            Some(BondOrder::Double)
        );
        let entry = result.geometry.entry().unwrap();
        assert_eq!(entry.shape, "Linear");
        assert_eq!(entry.hybridization, "sp");
    }

    #[test]
    fn ozone_has_one_resonance_partner() {
        let result = resolved("O3");
        assert_eq!(result.resonance.len(), 1);
        assert_eq!(
            result.best.formal_charge(AtomId::central(Element::O)),
            Some(1)
        );
        assert_eq!(result.geometry.entry().unwrap().notation, "AX2E");
    }

    #[test]
    fn odd_electron_formula_is_not_an_error() {
        let prediction = predict("NO2", &LewisConfig::default()).unwrap();
        assert_eq!(prediction.total_valence_electrons, 17);
        assert_eq!(
            prediction.no_structure(),
            Some(NoStructure::Radical { electrons: 17 })
        );
    }

    #[test]
    fn oversized_counts_are_outcomes() {
        for formula in ["O2000000000", "H-2147483647", "XeF2-300"] {
            let prediction = predict(formula, &LewisConfig::default()).unwrap();
            assert_eq!(
                prediction.no_structure(),
                Some(NoStructure::Oversized),
                "{formula}"
            );
        }

        let prediction = predict("O2000000000", &LewisConfig::default()).unwrap();
        assert_eq!(prediction.total_valence_electrons, 12_000_000_000);
    }

    #[test]
    fn accumulated_count_overflow_is_a_formula_error() {
        let err = predict("H4294967295H", &LewisConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Formula(crate::io::Error::InvalidCount { .. })
        ));
    }

    #[test]
    fn empty_molecule_yields_empty_search() {
        let prediction = predict_molecule(&Molecule::new(), &LewisConfig::default()).unwrap();
        assert_eq!(prediction.no_structure(), Some(NoStructure::EmptySearch));
    }

    #[test]
    fn bad_formula_is_an_error() {
        let err = predict("Fe2O3", &LewisConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Formula(_)));
    }

    #[test]
    fn custom_table_without_entry_reports_unknown_geometry() {
        let config = LewisConfig {
            vsepr: Some(String::new()),
            ..Default::default()
        };
        let prediction = predict("H2O", &config).unwrap();
        let result = prediction.result().unwrap();
        assert_eq!(result.geometry.bonded(), 2);
        assert_eq!(result.geometry.lone_pairs(), 2);
        assert!(result.geometry.entry().is_none());
    }

    #[test]
    fn invalid_custom_table_is_an_error() {
        let config = LewisConfig {
            vsepr: Some("geometry = 3".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            predict("CO2", &config),
            Err(Error::VseprTableParse(_))
        ));
    }
}
