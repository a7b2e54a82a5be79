use std::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use lewis_vsepr::{Outcome, Prediction};

use super::geometry_label;

/// Pipeline stages reported while `lewis predict` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Search,
    Report,
}

impl Stage {
    const COUNT: usize = 3;

    fn number(self) -> usize {
        match self {
            Stage::Parse => 1,
            Stage::Search => 2,
            Stage::Report => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Stage::Parse => "Parsing formula",
            Stage::Search => "Searching Lewis structures",
            Stage::Report => "Writing report",
        }
    }
}

pub struct StageSpinner {
    bar: Option<ProgressBar>,
    started: Instant,
    stage_started: Instant,
}

impl StageSpinner {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            started: now,
            stage_started: now,
        }
    }

    fn begin(&mut self, stage: Stage) {
        self.clear();
        self.stage_started = Instant::now();

        let bar = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("  {spinner:.cyan} [{prefix}] {msg}...")
        {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        bar.set_prefix(format!("{}/{}", stage.number(), Stage::COUNT));
        bar.set_message(stage.label());
        bar.enable_steady_tick(Duration::from_millis(80));

        self.bar = Some(bar);
    }

    fn complete<I>(&mut self, stage: Stage, details: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>9}",
            stage.label(),
            format_elapsed(self.stage_started.elapsed())
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", detail);
        }
    }

    fn finish(mut self, prediction: &Prediction) {
        self.clear();

        let (resolved, summary) = verdict(prediction);
        let mark = if resolved {
            "\x1b[32m✓\x1b[0m"
        } else {
            "\x1b[33m!\x1b[0m"
        };

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
        );
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  {} {:<44} {:>9}",
            mark,
            summary,
            format_elapsed(self.started.elapsed())
        );
        let _ = writeln!(stderr);
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Milliseconds for sub-second stages, seconds otherwise.
fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if ms < 1000.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

/// Whether a structure was found, and a one-line summary of the result.
fn verdict(prediction: &Prediction) -> (bool, String) {
    match &prediction.outcome {
        Outcome::Resolved(result) => (
            true,
            format!(
                "{}: {}",
                prediction.molecule,
                geometry_label(&result.geometry)
            ),
        ),
        Outcome::NoStructure(_) => (
            false,
            format!("{}: no Lewis structure", prediction.molecule),
        ),
    }
}

pub enum Progress {
    Interactive(StageSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool) -> Self {
        if interactive {
            Self::Interactive(StageSpinner::new())
        } else {
            Self::Silent
        }
    }

    pub fn begin(&mut self, stage: Stage) {
        if let Self::Interactive(s) = self {
            s.begin(stage);
        }
    }

    pub fn complete<I>(&mut self, stage: Stage, details: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if let Self::Interactive(s) = self {
            s.complete(stage, details);
        }
    }

    pub fn finish(self, prediction: &Prediction) {
        if let Self::Interactive(s) = self {
            s.finish(prediction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lewis_vsepr::{LewisConfig, predict};

    #[test]
    fn stages_are_numbered_in_pipeline_order() {
        let numbers: Vec<usize> = [Stage::Parse, Stage::Search, Stage::Report]
            .iter()
            .map(|s| s.number())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(Stage::Report.number(), Stage::COUNT);
    }

    #[test]
    fn elapsed_switches_to_seconds_past_one_second() {
        assert_eq!(format_elapsed(Duration::from_micros(2_500)), "2.5ms");
        assert_eq!(format_elapsed(Duration::from_millis(1_250)), "1.25s");
    }

    #[test]
    fn verdict_names_shape_or_missing_structure() {
        let co2 = predict("CO2", &LewisConfig::default()).unwrap();
        assert_eq!(verdict(&co2), (true, "CO2: AX2 Linear".to_string()));

        let no2 = predict("NO2", &LewisConfig::default()).unwrap();
        assert_eq!(
            verdict(&no2),
            (false, "NO2: no Lewis structure".to_string())
        );
    }
}
