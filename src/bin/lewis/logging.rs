use anyhow::Result;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Crates whose records the `-v` count controls.
const CRATES: &[&str] = &["lewis_vsepr", "lewis"];

/// Installs an stderr logger. `RUST_LOG`, when set, overrides the `-v` count.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = filter_for(level_for(verbosity));

    Builder::from_env(Env::default().default_filter_or(filter))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()?;

    Ok(())
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn filter_for(level: LevelFilter) -> String {
    let level = level.as_str().to_ascii_lowercase();
    CRATES
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}
