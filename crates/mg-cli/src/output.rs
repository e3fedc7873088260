//! Rendering a generated mouse.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mg_character::Mouse;

use crate::error::CliError;

/// How the sheet is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain five-line character sheet
    Text,
    /// Flat JSON object
    Json,
    /// Two-column table
    Table,
}

/// Print `mouse` to stdout in the requested format.
pub fn print(mouse: &Mouse, format: Format) -> Result<(), CliError> {
    match format {
        Format::Text => println!("{mouse}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(mouse)?),
        Format::Table => {
            println!("{}", "Mouse".bold().underline());
            println!("{}", sheet_table(mouse));
        }
    }
    Ok(())
}

fn sheet_table(mouse: &Mouse) -> Table {
    let s = &mouse.stats;
    let t = &mouse.traits;
    let rows = [
        ("STR", s.strength.to_string()),
        ("DEX", s.dexterity.to_string()),
        ("WIL", s.willpower.to_string()),
        ("HP", s.hp.to_string()),
        ("Pips", s.pips.to_string()),
        ("Tries", mouse.tries.to_string()),
        ("Sign", t.sign.clone()),
        ("Disposition", t.disposition.clone()),
        ("Color", t.color.clone()),
        ("Pattern", t.pattern.clone()),
        ("Detail", t.detail.clone()),
        ("Background", t.background.clone()),
        ("Items", mouse.items().join(", ")),
    ];

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    table
}
