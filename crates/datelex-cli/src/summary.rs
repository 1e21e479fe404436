use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use datelex_model::NormalizerConfig;

use crate::types::NormalizeResult;

/// Print the per-run outcome table. Goes to stderr: stdout carries the
/// normalized terms themselves.
pub fn print_summary(result: &NormalizeResult) {
    eprintln!("Source: {}", result.source);
    eprintln!("Output pattern: {}", result.config.output_pattern);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Tokens")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let stats = result.stats;
    table.add_row(vec![Cell::new("Normalized"), Cell::new(stats.normalized)]);
    table.add_row(vec![
        Cell::new("Implausible (rewritten to now)"),
        count_cell(stats.implausible, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Defaulted"),
        count_cell(stats.defaulted, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Passed through"),
        Cell::new(stats.passed_through),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.tokens).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

/// Print the active pattern configuration as a table.
pub fn print_patterns(config: &NormalizerConfig) {
    println!("Output pattern: {} ({})", config.output_pattern, config.output_locale);
    match &config.default_value {
        Some(value) => println!("Default value: {value:?}"),
        None => println!("Default value: none (unmatched terms pass through)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Priority"),
        header_cell("Input pattern"),
        header_cell("Locale"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, pattern) in config.input_patterns.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&pattern.pattern),
            Cell::new(pattern.locale),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
