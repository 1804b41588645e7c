use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use iftsta_model::{Consignment, Document};
use iftsta_cli::report::{DecodeRun, FileOutcome};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn print_summary(run: &DecodeRun) {
    for outcome in &run.files {
        print_file(outcome);
        println!();
    }
    println!(
        "Decoded {} file(s), {} consignment(s)",
        run.files.iter().filter(|o| o.document.is_some()).count(),
        run.consignment_count()
    );
    let failed: Vec<&FileOutcome> = run.files.iter().filter(|o| o.error.is_some()).collect();
    if !failed.is_empty() {
        eprintln!("Errors:");
        for outcome in failed {
            if let Some(error) = &outcome.error {
                eprintln!("- {error}");
            }
        }
    }
}

fn print_file(outcome: &FileOutcome) {
    println!("File: {}", outcome.path.display());
    let Some(document) = &outcome.document else {
        return;
    };
    print_interchange(document);
    if document.is_empty() {
        println!("No consignments");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Consignment"),
        header_cell("Global ID"),
        header_cell("Status"),
        header_cell("Status changed"),
        header_cell("Free text"),
    ]);
    apply_table_style(&mut table);
    for consignment in &document.consignments {
        table.add_row(consignment_row(consignment));
    }
    println!("{table}");
}

fn print_interchange(document: &Document) {
    let interchange = &document.interchange;
    let created = interchange
        .created_at
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string());
    println!("Created: {}", created.as_deref().unwrap_or("-"));
    if let Some(sender) = &interchange.sender {
        println!("Sender: {sender}");
    }
    if let Some(recipient) = &interchange.recipient {
        println!("Recipient: {recipient}");
    }
}

fn consignment_row(consignment: &Consignment) -> Vec<Cell> {
    vec![
        Cell::new(&consignment.number).add_attribute(Attribute::Bold),
        optional_cell(consignment.global_identifier.as_deref()),
        optional_cell(consignment.status.as_deref()),
        optional_cell(
            consignment
                .status_changed_at
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
                .as_deref(),
        ),
        optional_cell(consignment.additional_info.as_deref()),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
