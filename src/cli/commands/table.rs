use crate::input::{parse_table, read_table_file};
use clap::Args;
use std::path::PathBuf;
use voltaic_core::{active_config, install_config, TableStyle};
use voltaic_utils::{print_parse_error, table, table_print};

#[derive(Args)]
pub struct TableArgs {
    /// Whitespace-separated columns, one row per line
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Treat the first row as column headers
    #[arg(long)]
    pub header: bool,

    /// Table style (plain, rounded, markdown); overrides the configuration
    #[arg(long)]
    pub style: Option<TableStyle>,
}

pub fn run(args: TableArgs, diagnostics_to_stdout: bool) -> anyhow::Result<()> {
    if let Some(style) = args.style {
        let mut config = active_config();
        config.printing.table_style = style;
        install_config(config);
    }

    let text = read_table_file(&args.input)?;
    let mut rows = match parse_table(&text) {
        Ok(rows) => rows,
        Err(ragged) => {
            print_parse_error(ragged.nline, &ragged.line, diagnostics_to_stdout);
            return Err(ragged.into_error().into());
        }
    };

    if args.header && !rows.is_empty() {
        let header_row = rows.remove(0);
        let headers: Vec<&str> = header_row.iter().map(String::as_str).collect();
        println!("{}", table(&rows, Some(headers.as_slice())));
    } else {
        table_print(&rows);
    }
    Ok(())
}
