//! Tabular output for sweeps and waveforms

use super::diagnostics::{emit, Stream};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL, ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, Table, TableComponent};
use std::fmt::Display;
use std::io::Write;
use voltaic_core::{active_config, Locale, TableStyle};

/// How a table is drawn, resolved from configuration and locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub style: TableStyle,
    /// Box-drawing characters are only used when the locale is UTF-8
    pub utf8: bool,
    pub styling: bool,
}

impl TableOptions {
    /// Options from the active configuration and the `LANG` locale
    pub fn detect() -> Self {
        let config = active_config();
        Self {
            style: config.printing.table_style,
            utf8: Locale::detect().is_utf8(),
            styling: config.output.color,
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            style: TableStyle::Plain,
            utf8: false,
            styling: false,
        }
    }
}

/// Create a table drawn in `options.style`
pub fn create_table(options: &TableOptions) -> Table {
    let mut table = Table::new();
    match options.style {
        TableStyle::Plain => {
            table
                .load_preset(NOTHING)
                .set_style(TableComponent::HeaderLines, '-');
        }
        TableStyle::Rounded if options.utf8 => {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        }
        TableStyle::Rounded => {
            table.load_preset(ASCII_FULL);
        }
        TableStyle::Markdown => {
            table.load_preset(ASCII_MARKDOWN);
        }
    }
    if !options.styling {
        table.force_no_tty();
    }
    table
}

// A header-less plain table is framed by dashed rules above and below the rows.
// Column gaps become explicit blanks so the rules break between columns.
fn frame_headerless(table: &mut Table) {
    table
        .set_style(TableComponent::VerticalLines, ' ')
        .set_style(TableComponent::TopBorder, '-')
        .set_style(TableComponent::TopBorderIntersections, ' ')
        .set_style(TableComponent::BottomBorder, '-')
        .set_style(TableComponent::BottomBorderIntersections, ' ');
}

/// Create a header cell with center alignment
pub fn header_cell(text: &str, bold: bool) -> Cell {
    let cell = Cell::new(text).set_alignment(CellAlignment::Center);
    if bold {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

// Numbers line up on the right, labels on the left
fn data_cell(text: String) -> Cell {
    let alignment = if text.trim().parse::<f64>().is_ok() {
        CellAlignment::Right
    } else {
        CellAlignment::Left
    };
    Cell::new(text).set_alignment(alignment)
}

/// Render `data` row by row with explicit drawing options
pub fn render_table<R, C>(data: &[R], headers: Option<&[&str]>, options: &TableOptions) -> String
where
    R: AsRef<[C]>,
    C: Display,
{
    let mut table = create_table(options);
    match headers {
        Some(headers) => {
            let bold = options.styling && options.style == TableStyle::Rounded;
            table.set_header(headers.iter().map(|h| header_cell(h, bold)));
        }
        None if options.style == TableStyle::Plain => frame_headerless(&mut table),
        None => {}
    }
    for row in data {
        table.add_row(row.as_ref().iter().map(|c| data_cell(c.to_string())));
    }
    tracing::debug!(
        rows = data.len(),
        style = ?options.style,
        "Rendered table"
    );
    table.to_string()
}

/// Format a two-dimensional sequence as a text table
pub fn table<R, C>(data: &[R], headers: Option<&[&str]>) -> String
where
    R: AsRef<[C]>,
    C: Display,
{
    render_table(data, headers, &TableOptions::detect())
}

/// Print `data` as a table without headers
pub fn table_print<R, C>(data: &[R])
where
    R: AsRef<[C]>,
    C: Display,
{
    let rendered = table(data, None);
    emit(Stream::Stdout, |w, _| writeln!(w, "{}", rendered));
}
