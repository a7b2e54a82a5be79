use std::io::{self, Write};

use anyhow::Error;

use lewis_vsepr::{Element, LewisError};

use crate::util::text::wrap;

/// Inner width of the error panel, between the two border columns.
const PANEL_WIDTH: usize = 62;

pub fn print_error(err: &Error) {
    let _ = render_error(&mut io::stderr().lock(), err);
}

/// Draws `err`, its cause chain, and any hints as a bordered panel.
fn render_error(out: &mut impl Write, err: &Error) -> io::Result<()> {
    let mut panel = Panel { out };

    writeln!(panel.out)?;
    panel.border('╔', '═', '╗')?;
    panel.text(2, "✗ Error")?;
    panel.border('╟', '─', '╢')?;
    panel.wrapped(2, "", &err.to_string())?;

    let mut source = err.source();
    while let Some(cause) = source {
        panel.border('╟', '─', '╢')?;
        panel.text(2, "Caused by:")?;
        panel.wrapped(4, "", &cause.to_string())?;
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        panel.border('╟', '─', '╢')?;
        panel.text(2, "Hints:")?;
        for hint in hints {
            panel.wrapped(4, "• ", &hint)?;
        }
    }

    panel.border('╚', '═', '╝')?;
    writeln!(panel.out)
}

struct Panel<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Panel<'_, W> {
    fn border(&mut self, left: char, fill: char, right: char) -> io::Result<()> {
        let fill: String = std::iter::repeat_n(fill, PANEL_WIDTH).collect();
        writeln!(self.out, "   {}{}{}", left, fill, right)
    }

    fn text(&mut self, indent: usize, line: &str) -> io::Result<()> {
        let width = PANEL_WIDTH - indent - 1;
        writeln!(self.out, "   ║{}{:<width$} ║", " ".repeat(indent), line)
    }

    /// Wraps `body` to the panel, starting the first line with `bullet` and
    /// aligning the rest under it.
    fn wrapped(&mut self, indent: usize, bullet: &str, body: &str) -> io::Result<()> {
        let hang = bullet.chars().count();
        let width = PANEL_WIDTH - indent - hang - 1;
        for (i, line) in wrap(body, width).iter().enumerate() {
            let lead = if i == 0 {
                bullet.to_string()
            } else {
                " ".repeat(hang)
            };
            self.text(indent, &format!("{}{}", lead, line))?;
        }
        Ok(())
    }
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_formula_hints(err);
        collector.collect_lewis_hints(err);
        collector.collect_std_io_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_formula_hints(&mut self, err: &Error) {
        use lewis_vsepr::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();
        self.add_formula_hints(io_err);
    }

    fn add_formula_hints(&mut self, io_err: &lewis_vsepr::io::Error) {
        use lewis_vsepr::io::Error as IoError;

        match io_err {
            IoError::Io { source } => {
                self.add_std_io_hints(source);
            }

            IoError::EmptyFormula => {
                self.add("Pass a formula such as CO2, NH4+ or SO4-2");
            }

            IoError::NoElements(_) => {
                self.add("The formula contains a charge but no element symbols");
                self.add("Element symbols start with an uppercase letter (Cl, not cl)");
            }

            IoError::UnsupportedElement { symbol, .. } => {
                self.add(format!("'{}' is not in the supported element table", symbol));
                self.add(format!("Supported elements: {}", supported_elements()));
                if symbol.len() == 2 && symbol.chars().all(|c| c.is_ascii_uppercase()) {
                    self.add("Two-letter symbols use a lowercase second letter (Cl, Br)");
                }
            }

            IoError::UnexpectedCharacter { ch, position } => {
                self.add(format!(
                    "Character '{}' at position {} is not part of a formula",
                    ch, position
                ));
                self.add("Parentheses, hydrates and isotopes are not supported");
            }

            IoError::InvalidCount { .. } => {
                self.add("Atom counts must be positive integers (H2O, not H0O)");
            }

            IoError::InvalidCharge(_) => {
                self.add("Write charges as a trailing sign with optional magnitude");
                self.add("Accepted forms: NH4+, NO3-, SO4-2, SO4^2-, \"SO4 2-\"");
            }
        }
    }

    fn collect_lewis_hints(&mut self, err: &Error) {
        let Some(lewis_err) = err.downcast_ref::<LewisError>() else {
            return;
        };

        self.mark_typed();

        match lewis_err {
            LewisError::Formula(io_err) => {
                self.add_formula_hints(io_err);
            }

            LewisError::VseprTableParse(_) => {
                self.add("VSEPR table file has invalid TOML syntax or fields");
                self.add("Each [[geometry]] row needs bonded, lone_pairs, notation, shape, angle and hybridization");
                self.add("Run `lewis table` to print the built-in table as a reference");
            }

            LewisError::VseprTable(msg) => {
                self.add(format!("VSEPR table is inconsistent: {}", msg));
                self.add("Every (bonded, lone_pairs) pair may appear only once");
            }
        }
    }

    fn collect_std_io_hints(&mut self, err: &Error) {
        let Some(source) = err.downcast_ref::<std::io::Error>() else {
            return;
        };

        self.mark_typed();
        self.add_std_io_hints(source);
    }

    fn add_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("VSEPR tables must be plain TOML files");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("stdin") || msg.contains("no formula") {
            self.add("Pass the formula as an argument: lewis predict CO2");
            self.add("Or pipe it to stdin: echo CO2 | lewis predict");
        }
    }
}

fn supported_elements() -> String {
    Element::ALL
        .iter()
        .map(|e| e.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn render(err: &Error) -> String {
        let mut out = Vec::new();
        render_error(&mut out, err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn panel_rows_share_one_width() {
        let err = lewis_vsepr::predict("Fe2O3", &lewis_vsepr::LewisConfig::default())
            .context("Prediction failed")
            .unwrap_err();
        let text = render(&err);

        let widths: Vec<usize> = text
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.iter().all(|w| *w == PANEL_WIDTH + 5), "{text}");
    }

    #[test]
    fn formula_errors_show_cause_and_hints() {
        let err = lewis_vsepr::predict("Fe2O3", &lewis_vsepr::LewisConfig::default())
            .context("Prediction failed")
            .unwrap_err();
        let text = render(&err);

        assert!(text.contains("║  Prediction failed"));
        assert!(text.contains("Caused by:"));
        assert!(text.contains("element 'Fe' is not supported"));
        assert!(text.contains("• 'Fe' is not in the supported element table"));
    }
}
