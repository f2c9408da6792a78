use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use typescale_cli::types::{ExportOutput, ExportResult, FluidReport, ScaleReport};
use typescale_core::{FluidExpression, convert_unit, format_number};
use typescale_model::{DisplayUnit, FluidMethod, RATIO_PRESETS, ScaleStep};

pub fn print_scale(report: &ScaleReport) {
    println!("Base size: {}px", format_number(report.params.base_size));
    println!("Ratio: {}", ratio_label(report));
    if report.shift != 0 {
        println!("Heading shift: {:+}", report.shift);
    }
    println!("{}", scale_table(report));
}

pub fn print_fluid(fluid: &FluidReport) {
    println!(
        "Viewport: {}px ({}% between {}px and {}px)",
        format_number(fluid.viewport),
        format_number((fluid.progress * 1000.0).round() / 10.0),
        fluid.range.min_viewport,
        fluid.range.max_viewport
    );
    print_scale(&fluid.report);
}

pub fn print_css(method: FluidMethod, expressions: &[FluidExpression]) {
    println!("Method: {}", method.label());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for expression in expressions {
        table.add_row(vec![
            step_cell(expression.step.css_variable(), expression.step),
            Cell::new(format!("{}px", format_number(expression.min_size))),
            Cell::new(format!("{}px", format_number(expression.max_size))),
            Cell::new(&expression.css),
        ]);
    }
    println!("{table}");
}

pub fn print_ratios(current: f64) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Preset"),
        header_cell("Ratio"),
        header_cell("Character"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for preset in &RATIO_PRESETS {
        let name = if preset.value == current {
            Cell::new(format!("{} *", preset.name)).add_attribute(Attribute::Bold)
        } else {
            Cell::new(preset.name)
        };
        table.add_row(vec![
            name,
            dim_cell(preset.slug),
            Cell::new(format_number(preset.value)),
            Cell::new(preset.description),
        ]);
    }
    println!("{table}");
}

pub fn print_export(result: &ExportResult) {
    match &result.output {
        ExportOutput::Written(path) => {
            let kind = if result.fluid { "fluid" } else { "static" };
            println!("Wrote {kind} {} export: {}", result.format, path.display());
        }
        ExportOutput::Contents(contents) => println!("{contents}"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn scale_table(report: &ScaleReport) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Step"),
        header_cell("Variable"),
        header_cell("Size"),
    ];
    if report.unit != DisplayUnit::Px {
        header.push(header_cell(report.unit.as_str()));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for step in ScaleStep::ALL {
        let size = report.scale.get(step);
        let mut row = vec![
            step_cell(step.as_str(), step),
            dim_cell(step.css_variable()),
            Cell::new(convert_unit(size, DisplayUnit::Px)),
        ];
        if report.unit != DisplayUnit::Px {
            row.push(Cell::new(convert_unit(size, report.unit)));
        }
        table.add_row(row);
    }
    table
}

fn ratio_label(report: &ScaleReport) -> String {
    match report.preset {
        Some(preset) => preset.label(),
        None => format!("{} (custom)", format_number(report.params.ratio)),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn step_cell(label: &str, step: ScaleStep) -> Cell {
    if step.is_heading() {
        Cell::new(label).add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
