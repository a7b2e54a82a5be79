use std::io::Write;

use crate::io::error::Error;
use crate::model::atom::AtomId;
use crate::model::geometry::{Geometry, VseprEntry};
use crate::model::prediction::{NoStructure, Outcome, Prediction};
use crate::model::structure::Structure;

const RULE_WIDTH: usize = 25;

pub fn write_structure<W: Write>(
    writer: &mut W,
    structure: &Structure,
    title: &str,
) -> Result<(), Error> {
    writeln!(writer, "--- {} ---", title)?;

    writeln!(writer)?;
    writeln!(writer, "[Structure]")?;
    let central = structure.central();
    for (atom, order) in structure.bonds() {
        writeln!(writer, "  {} {} {}", central, order.symbol(), atom)?;
    }

    writeln!(writer)?;
    writeln!(writer, "[Lone Pairs]")?;
    for (atom, electrons) in structure.lone_pairs() {
        if *electrons > 0 {
            writeln!(
                writer,
                "  {}: {}e ({} pairs)",
                atom,
                electrons,
                electrons / 2
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "[Formal Charges]")?;
    let mut any_charge = false;
    for (atom, charge) in structure.formal_charges() {
        if *charge != 0 {
            any_charge = true;
            writeln!(writer, "  {}: {:+}", atom, charge)?;
        }
    }
    if !any_charge {
        writeln!(writer, "  All charges are zero.")?;
    }

    Ok(())
}

pub fn write_geometry<W: Write>(
    writer: &mut W,
    central: AtomId,
    geometry: &Geometry,
) -> Result<(), Error> {
    writeln!(writer, "--VSEPR Prediction--")?;
    writeln!(writer, "Central atom: {}", central.element)?;
    writeln!(writer, "Bonded atoms (X): {}", geometry.bonded())?;
    writeln!(writer, "Lone pairs (E): {}", geometry.lone_pairs())?;

    match geometry {
        Geometry::Known(entry) => {
            writeln!(writer, "Notation: {}", entry.notation)?;
            writeln!(writer, "Shape: {}", entry.shape)?;
            writeln!(writer, "Bond angle(s): {}", entry.angle)?;
            writeln!(writer, "Hybridization: {}", entry.hybridization)?;
        }
        Geometry::Unknown { bonded, lone_pairs } => {
            writeln!(writer, "No VSEPR entry for X={}, E={}", bonded, lone_pairs)?;
        }
    }

    Ok(())
}

/// Writes the full report for one formula: the optimal structure, its
/// geometry, then every resonance form.
pub fn write_prediction<W: Write>(writer: &mut W, prediction: &Prediction) -> Result<(), Error> {
    let result = match &prediction.outcome {
        Outcome::Resolved(result) => result,
        Outcome::NoStructure(reason) => {
            writeln!(writer, "Could not find a valid structure.")?;
            writeln!(writer, "Reason: {}", describe_no_structure(reason))?;
            return Ok(());
        }
    };

    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    write_structure(writer, &result.best, "Most Optimal Structure")?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(writer)?;
    write_geometry(writer, result.central, &result.geometry)?;

    if result.has_resonance() {
        writeln!(writer)?;
        writeln!(writer, "This molecule exhibits resonance.")?;
        for (i, structure) in result.resonance.iter().enumerate() {
            writeln!(writer)?;
            writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
            write_structure(writer, structure, &format!("Resonance Form {}", i + 2))?;
            writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        }
    }

    Ok(())
}

pub fn write_vsepr_table<W: Write>(writer: &mut W, entries: &[VseprEntry]) -> Result<(), Error> {
    writeln!(
        writer,
        "{:>2} {:>2}  {:<7} {:<22} {:<12} {}",
        "X", "E", "AXE", "Shape", "Angle", "Hybridization"
    )?;
    for entry in entries {
        writeln!(
            writer,
            "{:>2} {:>2}  {:<7} {:<22} {:<12} {}",
            entry.bonded,
            entry.lone_pairs,
            entry.notation,
            entry.shape,
            entry.angle,
            entry.hybridization
        )?;
    }
    Ok(())
}

pub fn describe_no_structure(reason: &NoStructure) -> String {
    match reason {
        NoStructure::Radical { electrons } => format!(
            "{} valence electrons is odd; radical species are not supported",
            electrons
        ),
        NoStructure::ElectronDeficient {
            required,
            available,
        } => format!(
            "{} electrons are needed to single-bond every terminal atom but only {} are available",
            required, available
        ),
        NoStructure::EmptySearch => "the search produced no candidate structures".to_string(),
        NoStructure::Oversized => {
            "the formula is too large for a single-center structure".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::molecule::Molecule;
    use crate::model::prediction::{LewisResult, SearchStats};
    use crate::model::types::{BondOrder, Element};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), Error>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn ozone(first_double: bool) -> Structure {
        let (orders, lp) = if first_double {
            ([BondOrder::Double, BondOrder::Single], [2, 4, 6])
        } else {
            ([BondOrder::Single, BondOrder::Double], [2, 6, 4])
        };
        Structure::from_parts(
            AtomId::central(Element::O),
            &[AtomId::new(Element::O, 1), AtomId::new(Element::O, 2)],
            &orders,
            &lp,
        )
    }

    fn bent_entry() -> VseprEntry {
        VseprEntry {
            bonded: 2,
            lone_pairs: 1,
            notation: "AX2E".to_string(),
            shape: "Bent".to_string(),
            angle: "<120".to_string(),
            hybridization: "sp2".to_string(),
        }
    }

    #[test]
    fn structure_block_lists_bonds_pairs_and_charges() {
        let text = render(|w| write_structure(w, &ozone(true), "Ozone"));
        assert!(text.starts_with("--- Ozone ---\n"));
        assert!(text.contains("  O0 = O1\n"));
        assert!(text.contains("  O0 - O2\n"));
        assert!(text.contains("  O0: 2e (1 pairs)\n"));
        assert!(text.contains("  O2: 6e (3 pairs)\n"));
        assert!(text.contains("  O0: +1\n"));
        assert!(text.contains("  O2: -1\n"));
        assert!(!text.contains("O1: 0"));
        assert!(!text.contains("All charges are zero."));
    }

    #[test]
    fn neutral_structure_reports_zero_charges() {
        let s = Structure::from_parts(
            AtomId::central(Element::C),
            &[AtomId::new(Element::O, 1), AtomId::new(Element::O, 2)],
            &[BondOrder::Double, BondOrder::Double],
            &[0, 4, 4],
        );
        let text = render(|w| write_structure(w, &s, "CO2"));
        assert!(text.contains("All charges are zero."));
        assert!(!text.contains("C0: "));
    }

    #[test]
    fn triple_bond_symbol() {
        let s = Structure::from_parts(
            AtomId::central(Element::C),
            &[AtomId::new(Element::O, 1)],
            &[BondOrder::Triple],
            &[2, 2],
        );
        let text = render(|w| write_structure(w, &s, "CO"));
        assert!(text.contains("  C0 ≡ O1\n"));
    }

    #[test]
    fn geometry_block_for_known_and_unknown_entries() {
        let central = AtomId::central(Element::O);
        let text = render(|w| write_geometry(w, central, &Geometry::Known(bent_entry())));
        assert!(text.contains("Central atom: O\n"));
        assert!(text.contains("Notation: AX2E\n"));
        assert!(text.contains("Hybridization: sp2\n"));

        let unknown = Geometry::Unknown {
            bonded: 7,
            lone_pairs: 0,
        };
        let text = render(|w| write_geometry(w, central, &unknown));
        assert!(text.contains("No VSEPR entry for X=7, E=0"));
    }

    #[test]
    fn prediction_report_numbers_resonance_forms_from_two() {
        let mut molecule = Molecule::new();
        molecule.add(Element::O, 3).unwrap();
        let prediction = Prediction {
            molecule,
            total_valence_electrons: 18,
            outcome: Outcome::Resolved(Box::new(LewisResult {
                central: AtomId::central(Element::O),
                best: ozone(true),
                resonance: vec![ozone(false)],
                primary_score: 2,
                geometry: Geometry::Known(bent_entry()),
                stats: SearchStats::default(),
            })),
        };
        let text = render(|w| write_prediction(w, &prediction));
        assert!(text.contains("--- Most Optimal Structure ---"));
        assert!(text.contains("This molecule exhibits resonance."));
        assert!(text.contains("--- Resonance Form 2 ---"));
        assert!(!text.contains("Resonance Form 3"));
    }

    #[test]
    fn prediction_report_without_structure_gives_reason() {
        let mut molecule = Molecule::new();
        molecule.add(Element::N, 1).unwrap();
        molecule.add(Element::O, 2).unwrap();
        let prediction = Prediction {
            molecule,
            total_valence_electrons: 17,
            outcome: Outcome::NoStructure(NoStructure::Radical { electrons: 17 }),
        };
        let text = render(|w| write_prediction(w, &prediction));
        assert!(text.starts_with("Could not find a valid structure.\n"));
        assert!(text.contains("17 valence electrons is odd"));
    }

    #[test]
    fn vsepr_table_has_header_and_rows() {
        let text = render(|w| write_vsepr_table(w, &[bent_entry()]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Hybridization"));
        assert!(lines[1].contains("AX2E"));
    }
}
