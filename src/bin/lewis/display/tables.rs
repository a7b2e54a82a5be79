use std::io::{self, Write};

use lewis_vsepr::{Outcome, Prediction};

use super::geometry_label;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_prediction_summary(prediction: &Prediction) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let molecule = &prediction.molecule;
    let rows = vec![
        ("Formula", molecule.to_string()),
        ("Net Charge", format!("{:+}", molecule.charge())),
        ("Total Atoms", molecule.atom_count().to_string()),
        (
            "Valence e⁻",
            prediction.total_valence_electrons.to_string(),
        ),
    ];
    print_kv_table(&mut out, "Molecule Summary", &rows);

    let Outcome::Resolved(result) = &prediction.outcome else {
        let _ = writeln!(out);
        return;
    };

    let geometry = geometry_label(&result.geometry);
    let mut rows = vec![
        ("Central Atom", result.central.to_string()),
        ("Nodes Visited", result.stats.nodes_visited.to_string()),
        ("Candidates", result.stats.candidates.to_string()),
        ("Charge Score", result.primary_score.to_string()),
        ("Resonance Forms", (result.resonance.len() + 1).to_string()),
        ("Geometry", geometry),
    ];
    if result.stats.truncated {
        rows.push(("Truncated", "yes".to_string()));
    }
    print_kv_table(&mut out, "Search Summary", &rows);
    let _ = writeln!(out);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
