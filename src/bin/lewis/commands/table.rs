use std::io::Write;

use anyhow::{Context, Result};

use lewis_vsepr::io::write_vsepr_table;
use lewis_vsepr::load_table;

use crate::cli::TableArgs;
use crate::display::Context as DisplayContext;
use crate::io::{create_output, read_table_file};

pub fn run_table(args: TableArgs, _ctx: DisplayContext) -> Result<()> {
    let custom = read_table_file(args.table.vsepr.as_deref())?;
    let table = load_table(custom.as_deref()).context("Failed to load VSEPR table")?;

    let mut writer = create_output(args.output.output.as_deref())?;
    write_vsepr_table(&mut writer, table.entries()).context("Failed to write VSEPR table")?;
    writer.flush().context("Failed to flush VSEPR table")?;

    Ok(())
}
