use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osr_model::Flag;
use osr_resolve::ResolutionSource;

use osr_cli::types::{CleanOutcome, CompileOutcome, SplitOutput};

use crate::commands::LookupsReport;

pub fn print_clean_summary(outcomes: &[CleanOutcome]) {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Account"),
        header_cell("Territory"),
    ];
    header.extend(Flag::ALL.iter().map(|flag| header_cell(flag.label())));
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 1..table.column_count() {
        align_column(&mut table, column, CellAlignment::Right);
    }

    let mut totals = vec![0usize; 3 + Flag::ALL.len()];
    for outcome in outcomes {
        let summary = &outcome.summary;
        let mut counts = vec![
            summary.rows,
            summary.source_count(ResolutionSource::AccountList),
            summary.source_count(ResolutionSource::Territory),
        ];
        counts.extend(Flag::ALL.iter().map(|flag| summary.flag_count(*flag)));
        for (total, count) in totals.iter_mut().zip(&counts) {
            *total += count;
        }

        let mut row = vec![Cell::new(file_label(&outcome.output))];
        row.push(Cell::new(counts[0]));
        row.push(count_cell(counts[1], Color::Green));
        row.push(count_cell(counts[2], Color::Green));
        row.extend(
            Flag::ALL
                .iter()
                .zip(&counts[3..])
                .map(|(flag, count)| count_cell(*count, flag_color(*flag))),
        );
        table.add_row(row);
    }

    if outcomes.len() > 1 {
        let mut row = vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(
            totals
                .iter()
                .map(|total| Cell::new(total).add_attribute(Attribute::Bold)),
        );
        table.add_row(row);
    }
    println!("{table}");

    for outcome in outcomes {
        if !outcome.plan.unmapped_columns.is_empty() {
            println!(
                "{}: dropped columns: {}",
                file_label(&outcome.input),
                outcome.plan.unmapped_columns.join(", ")
            );
        }
    }
}

pub fn print_split_summary(outputs: &[SplitOutput]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("OSR"), header_cell("Rows"), header_cell("File")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for output in outputs {
        let rep = if output.representative.is_empty() {
            dim_cell(osr_output::UNASSIGNED)
        } else {
            Cell::new(&output.representative).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            rep,
            Cell::new(output.rows),
            Cell::new(file_label(&output.path)),
        ]);
    }
    println!("{table}");
}

pub fn print_compile_summary(outcome: &CompileOutcome) {
    println!(
        "Compiled {} files ({} rows) into {}",
        outcome.tables,
        outcome.rows,
        outcome.output.display()
    );
}

pub fn print_lookups(report: &LookupsReport) {
    println!("Lookup directory: {}", report.dir.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Lookup"), header_cell("Entries"), header_cell("File")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in &report.statuses {
        table.add_row(vec![
            Cell::new(&status.name),
            Cell::new(status.entries),
            Cell::new(file_label(&status.path)),
        ]);
    }
    println!("{table}");

    if report.skipped_territory_keys > 0 {
        println!(
            "Skipped {} territory rows whose zip code is not a number",
            report.skipped_territory_keys
        );
    }
    if report.conflicts.is_empty() {
        return;
    }
    let mut conflicts = Table::new();
    conflicts.set_header(vec![
        header_cell("Lookup"),
        header_cell("Key"),
        header_cell("Used"),
        header_cell("Ignored"),
    ]);
    apply_table_style(&mut conflicts);
    for conflict in &report.conflicts {
        conflicts.add_row(vec![
            Cell::new(&conflict.table),
            Cell::new(&conflict.key),
            Cell::new(&conflict.kept).fg(Color::Green),
            Cell::new(&conflict.ignored).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Key conflicts:");
    println!("{conflicts}");
}

fn flag_color(flag: Flag) -> Color {
    match flag {
        Flag::OutOfTerritory => Color::Red,
        Flag::CustomerNotFound => Color::Yellow,
        Flag::Individual => Color::Blue,
        Flag::ProperNameNotAssociated => Color::Magenta,
        Flag::ProperNameNotFound => Color::DarkYellow,
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
