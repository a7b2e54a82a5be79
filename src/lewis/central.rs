use crate::model::molecule::Molecule;
use crate::model::types::Element;

/// Picks the central element of a single-center molecule.
///
/// Rules, first match wins:
///
/// 1. A formula with one distinct element uses that element.
/// 2. Hydrogen is never central; if only hydrogen is present the least
///    electronegative element overall is used.
/// 3. If exactly one non-hydrogen element occurs once, it is central.
/// 4. Otherwise the least electronegative non-hydrogen element is central.
///
/// Ties in rules 2 and 4 go to the element appearing first in the formula.
/// Returns `None` only for an empty molecule.
pub fn select_central_atom(molecule: &Molecule) -> Option<Element> {
    let composition = molecule.composition();

    if let [(only, _)] = composition {
        return Some(*only);
    }

    let candidates: Vec<(Element, u32)> = composition
        .iter()
        .copied()
        .filter(|(e, _)| *e != Element::H)
        .collect();

    if candidates.is_empty() {
        return least_electronegative(composition.iter().map(|(e, _)| *e));
    }

    let mut singles = candidates.iter().filter(|(_, c)| *c == 1);
    if let (Some((single, _)), None) = (singles.next(), singles.next()) {
        return Some(*single);
    }

    least_electronegative(candidates.iter().map(|(e, _)| *e))
}

fn least_electronegative(elements: impl Iterator<Item = Element>) -> Option<Element> {
    // `min_by` keeps the first of equal minima, which preserves formula order.
    elements.min_by(|a, b| a.electronegativity().total_cmp(&b.electronegativity()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_formula;

    fn central(formula: &str) -> Element {
        select_central_atom(&parse_formula(formula).unwrap()).unwrap()
    }

    #[test]
    fn single_element_is_central() {
        assert_eq!(central("O3"), Element::O);
        assert_eq!(central("H2"), Element::H);
    }

    #[test]
    fn hydrogen_is_never_central_when_alternatives_exist() {
        assert_eq!(central("H2O"), Element::O);
        assert_eq!(central("NH4+"), Element::N);
        assert_eq!(central("BeH2"), Element::Be);
    }

    #[test]
    fn unique_singleton_wins_over_electronegativity() {
        assert_eq!(central("CO2"), Element::C);
        assert_eq!(central("SO4-2"), Element::S);
        // F is more electronegative than Cl, but Cl is the singleton.
        assert_eq!(central("ClF3"), Element::Cl);
    }

    #[test]
    fn least_electronegative_when_no_unique_singleton() {
        // Both C and O occur once.
        assert_eq!(central("CO"), Element::C);
        assert_eq!(central("OC"), Element::C);
        // Neither occurs once.
        assert_eq!(central("S2O4"), Element::S);
    }

    #[test]
    fn equal_electronegativity_ties_go_to_formula_order() {
        // C and Se share 2.55.
        assert_eq!(central("C2Se2"), Element::C);
        assert_eq!(central("Se2C2"), Element::Se);
    }

    #[test]
    fn empty_molecule_has_no_center() {
        assert_eq!(select_central_atom(&Molecule::new()), None);
    }

    #[test]
    fn selection_is_deterministic() {
        let m = parse_formula("PCl5").unwrap();
        let first = select_central_atom(&m);
        for _ in 0..10 {
            assert_eq!(select_central_atom(&m), first);
        }
    }
}
