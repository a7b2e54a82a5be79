mod predict;
mod table;

use predict::run_predict;
use table::run_table;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Predict(args) => run_predict(args, ctx),
        Command::Table(args) => run_table(args, ctx),
    }
}
