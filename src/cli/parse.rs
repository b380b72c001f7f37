use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{badge, resolve_today};
use crate::error::{CatatError, Result};
use crate::fmt::rupiah;
use crate::lexicon::Lexicon;
use crate::models::ParseResult;
use crate::parser::TextParser;
use crate::settings::load_settings;

pub fn run(text: &str, date: Option<&str>, json: bool) -> Result<()> {
    let today = resolve_today(date)?;
    let parser = TextParser::new(Lexicon::from_settings(&load_settings()));
    let result = parser.parse_on(text, today);

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| CatatError::Other(e.to_string()))?;
        println!("{out}");
    } else {
        render(&result);
    }

    if result.success {
        Ok(())
    } else {
        Err(CatatError::Other(
            "could not recover a usable transaction from the text".to_string(),
        ))
    }
}

fn render(result: &ParseResult) {
    let data = &result.data;
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value", "Confidence"]);
    table.add_row(vec![
        Cell::new("Type"),
        Cell::new(data.transaction_type.map(|t| t.label()).unwrap_or("-")),
        Cell::new(badge(result.confidence.transaction_type)),
    ]);
    table.add_row(vec![
        Cell::new("Amount"),
        Cell::new(data.amount.map(rupiah).unwrap_or_else(|| "-".to_string())),
        Cell::new(badge(result.confidence.amount)),
    ]);
    table.add_row(vec![
        Cell::new("Category"),
        Cell::new(data.category.as_deref().unwrap_or("-")),
        Cell::new(badge(result.confidence.category)),
    ]);
    table.add_row(vec![
        Cell::new("Date"),
        Cell::new(
            data.date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        Cell::new(badge(result.confidence.date)),
    ]);
    table.add_row(vec![
        Cell::new("Description"),
        Cell::new(data.description.as_deref().unwrap_or("-")),
        Cell::new(""),
    ]);
    println!("{table}");

    for warning in &result.warnings {
        println!("{} {warning}", "!".yellow().bold());
    }
    for error in &result.errors {
        println!("{} {error}", "x".red().bold());
    }
    if result.success {
        println!("{}", "Draft ready; review low-confidence fields.".green());
    }
}
