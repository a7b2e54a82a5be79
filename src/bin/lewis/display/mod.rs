mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::{Progress, Stage};
pub use tables::print_prediction_summary;

use lewis_vsepr::Geometry;

/// AXE notation and shape, or the counts that have no table entry.
fn geometry_label(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Known(entry) => format!("{} {}", entry.notation, entry.shape),
        Geometry::Unknown {
            bonded,
            lone_pairs,
        } => format!("unknown (X={}, E={})", bonded, lone_pairs),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}
