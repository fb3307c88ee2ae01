use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ReconcileResult;

pub fn print_summary(result: &ReconcileResult) {
    println!("Input: {} ({})", result.input.display(), result.encoding);
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Data rows read"), Cell::new(summary.input_rows)]);
    table.add_row(vec![Cell::new("Blank rows skipped"), dim_cell(summary.blank_rows)]);
    table.add_row(vec![
        Cell::new("Rows rejected"),
        count_cell(summary.error_rows, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates merged"),
        count_cell(summary.merged_duplicates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_records).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "Delimiter: {} | Columns: {}{}",
        summary.delimiter,
        result.columns,
        if result.template_applied {
            " (template)"
        } else {
            ""
        }
    );
    print_path("Records file", result.records_path.as_ref());
    print_path("Error report", result.errors_path.as_ref());
}

fn print_path(label: &str, path: Option<&PathBuf>) {
    if let Some(path) = path {
        println!("{label}: {}", path.display());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
