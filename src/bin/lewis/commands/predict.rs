use std::io::Write;

use anyhow::{Context, Result, bail};

use lewis_vsepr::io::{parse_formula, write_prediction};
use lewis_vsepr::{LewisConfig, Outcome, Prediction, SearchLimits, predict_molecule};

use crate::cli::{PredictArgs, SearchOptions};
use crate::display::{Context as DisplayContext, Progress, Stage, print_prediction_summary};
use crate::io::{create_output, read_formula_line, read_table_file};

pub fn run_predict(args: PredictArgs, ctx: DisplayContext) -> Result<()> {
    let formula = match args.formula {
        Some(f) => f,
        None => read_formula_line()?,
    };
    if formula.trim().is_empty() {
        bail!("No formula given.\n\nUsage: lewis predict <FORMULA> or pipe a formula via stdin.");
    }

    let vsepr = read_table_file(args.table.vsepr.as_deref())?;
    let config = build_config(&args.search, vsepr);

    let mut progress = Progress::new(ctx.interactive);

    progress.begin(Stage::Parse);
    let molecule = parse_formula(&formula)
        .with_context(|| format!("Failed to parse formula '{}'", formula.trim()))?;
    progress.complete(
        Stage::Parse,
        [
            format!("Composition {}", molecule),
            format!("{} valence electrons", molecule.total_valence_electrons()),
        ],
    );

    progress.begin(Stage::Search);
    let prediction = predict_molecule(&molecule, &config).context("Prediction failed")?;
    progress.complete(Stage::Search, search_details(&args.search, &prediction));

    if ctx.interactive {
        print_prediction_summary(&prediction);
    }

    progress.begin(Stage::Report);
    let mut writer = create_output(args.output.output.as_deref())?;
    write_prediction(&mut writer, &prediction).context("Failed to write report")?;
    writer.flush().context("Failed to flush report")?;

    let target = args
        .output
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    progress.complete(Stage::Report, [format!("Report → {}", target)]);

    progress.finish(&prediction);

    Ok(())
}

fn build_config(search: &SearchOptions, vsepr: Option<String>) -> LewisConfig {
    LewisConfig {
        vsepr,
        search: search.policy.into(),
        tie_break: search.tie_break.into(),
        limits: SearchLimits {
            max_nodes: search.max_nodes,
        },
    }
}

fn search_details(search: &SearchOptions, prediction: &Prediction) -> Vec<String> {
    use crate::cli::{SearchPolicy, TieBreak};

    let policy = match search.policy {
        SearchPolicy::Strict => "strict",
        SearchPolicy::Exhaustive => "exhaustive",
    };
    let rule = match search.tie_break {
        TieBreak::Placement => "charge placement",
        TieBreak::Penalty => "EN penalty",
    };

    match &prediction.outcome {
        Outcome::Resolved(result) => {
            let mut details = vec![
                format!("Central atom {}", result.central),
                format!(
                    "Visit {} nodes ({} search)",
                    result.stats.nodes_visited, policy
                ),
                format!(
                    "Rank {} candidates ({} tie-break)",
                    result.stats.candidates, rule
                ),
            ];
            if result.stats.truncated {
                details.push(format!(
                    "Stopped at --max-nodes {}; results may be incomplete",
                    search.max_nodes
                ));
            }
            details
        }
        Outcome::NoStructure(reason) => vec![format!(
            "No structure: {}",
            lewis_vsepr::io::describe_no_structure(reason)
        )],
    }
}
