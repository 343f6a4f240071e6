//! Terminal rendering of check and repair results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_model::{Report, Severity};
use dq_report::entry_fields;

use crate::commands::{CheckResult, RepairResult};

pub fn print_check(result: &CheckResult) {
    print_overview(&result.report);
    print_issues(&result.report);
    println!();
    println!("{}", result.summary);
}

pub fn print_repair(result: &RepairResult) {
    println!(
        "Rows: {} -> {} | Output: {}",
        result.rows_before,
        result.rows_after,
        result.output_path.display()
    );
    if result.changelog.is_empty() {
        println!("No repairs were necessary.");
    } else {
        let mut table = Table::new();
        apply_style(&mut table);
        table.set_header(vec![header_cell("Operation"), header_cell("Details")]);
        for entry in &result.changelog {
            let details = entry_fields(entry)
                .into_iter()
                .skip(1)
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("  ");
            table.add_row(vec![Cell::new(entry.op_name()), Cell::new(details)]);
        }
        println!("{table}");
    }
    println!();
    println!("{}", result.summary);
}

fn print_overview(report: &Report) {
    let profile = &report.profile;
    println!(
        "Rows: {} | Columns: {} | Duplicate rows: {} | Missing cells: {}",
        profile.rows,
        profile.cols,
        profile.duplicate_rows,
        profile.total_missing_cells()
    );
}

fn print_issues(report: &Report) {
    if report.issues.is_empty() {
        println!("No issues detected by basic checks.");
        return;
    }
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Column"),
        header_cell("Message"),
        header_cell("Suggestion"),
    ]);
    if let Some(level) = table.column_mut(0) {
        level.set_cell_alignment(CellAlignment::Center);
    }
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.column.as_deref().unwrap_or("-")),
            Cell::new(&issue.message),
            Cell::new(&issue.suggestion),
        ]);
    }
    println!("{table}");
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.to_string());
    match severity {
        Severity::Error => cell.fg(Color::Red),
        Severity::Warning => cell.fg(Color::Yellow),
        Severity::Info => cell.fg(Color::Cyan),
    }
}
