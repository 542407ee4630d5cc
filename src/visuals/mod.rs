mod formatters;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::commands::stats::PrintStats;
use crate::lang::LanguageRegistry;
use formatters::{format_count, format_duration};

pub fn print_summary(stats: &PrintStats) {
    println!(
        "✓ Printed {} ({}) in {}{}",
        format_count(stats.files_printed, "file"),
        format_count(stats.pages_printed, "page"),
        format_duration(stats.total_duration),
        if stats.files_skipped > 0 {
            format!(", {} skipped", stats.files_skipped)
        } else {
            String::new()
        }
    );
}

pub fn print_detailed(stats: &PrintStats) {
    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Print Summary")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec!["Run Time", &format_duration(stats.total_duration)]);
    summary_table.add_row(vec!["Files Printed", &format!("{}", stats.files_printed)]);
    summary_table.add_row(vec!["Files Skipped", &format!("{}", stats.files_skipped)]);
    summary_table.add_row(vec!["Pages Printed", &format!("{}", stats.pages_printed)]);

    println!("{summary_table}\n");

    let mut detail_table = Table::new();
    detail_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Lines").add_attribute(Attribute::Bold),
            Cell::new("Pages").add_attribute(Attribute::Bold),
        ]);

    for file in &stats.file_stats {
        detail_table.add_row(vec![
            Cell::new(file.path.display()),
            Cell::new(file.lines),
            Cell::new(file.pages),
        ]);
    }

    println!("{detail_table}");
}

pub fn print_languages(registry: &LanguageRegistry) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Code").add_attribute(Attribute::Bold),
            Cell::new("Language").add_attribute(Attribute::Bold),
            Cell::new("Suffixes").add_attribute(Attribute::Bold),
        ]);

    for (code, entry) in registry.iter() {
        table.add_row(vec![code, entry.name, &entry.suffixes.join(" ")]);
    }

    println!("{table}");
}
