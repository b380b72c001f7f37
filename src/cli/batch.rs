use std::io::Read;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{badge, resolve_today};
use crate::error::{CatatError, Result};
use crate::fmt::rupiah;
use crate::lexicon::Lexicon;
use crate::models::ParseResult;
use crate::parser::TextParser;
use crate::settings::load_settings;

pub fn run(file: &str, csv_out: Option<&str>, json: bool, date: Option<&str>) -> Result<()> {
    let today = resolve_today(date)?;
    let content = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };

    let parser = TextParser::new(Lexicon::from_settings(&load_settings()));
    let results: Vec<(String, ParseResult)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| (line.to_string(), parser.parse_on(line, today)))
        .collect();

    if json {
        let payload: Vec<&ParseResult> = results.iter().map(|(_, r)| r).collect();
        let out = serde_json::to_string_pretty(&payload)
            .map_err(|e| CatatError::Other(e.to_string()))?;
        println!("{out}");
    } else {
        render_summary(&results);
    }

    if let Some(path) = csv_out {
        write_csv(path, &results)?;
        let exported = results.iter().filter(|(_, r)| r.success).count();
        println!("Exported {exported} draft(s) to {path}");
    }
    Ok(())
}

fn render_summary(results: &[(String, ParseResult)]) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Amount", "Category", "Date", "Description", "Confidence"]);
    for (i, (_, result)) in results.iter().enumerate() {
        let data = &result.data;
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(data.transaction_type.map(|t| t.label()).unwrap_or("-")),
            Cell::new(data.amount.map(rupiah).unwrap_or_else(|| "-".to_string())),
            Cell::new(data.category.as_deref().unwrap_or("-")),
            Cell::new(
                data.date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(data.description.as_deref().unwrap_or("-")),
            Cell::new(badge(result.confidence.amount)),
        ]);
    }
    println!("{table}");

    let parsed = results.iter().filter(|(_, r)| r.success).count();
    let failed = results.len() - parsed;
    if failed > 0 {
        println!(
            "Parsed {} line(s), {} need manual entry:",
            parsed.to_string().green(),
            failed.to_string().red()
        );
        for (i, (line, result)) in results.iter().enumerate() {
            if !result.success {
                println!("  line {}: {}", i + 1, line);
            }
        }
    } else {
        println!("Parsed {} line(s)", parsed.to_string().green());
    }
}

/// One CSV row per successfully parsed line, ready for import into the
/// bookkeeping layer.
fn write_csv(path: &str, results: &[(String, ParseResult)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "type", "amount", "category", "description"])?;
    for (_, result) in results.iter().filter(|(_, r)| r.success) {
        let data = &result.data;
        writer.write_record([
            data.date.map(|d| d.to_string()).unwrap_or_default(),
            data.transaction_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            data.amount.map(|a| a.to_string()).unwrap_or_default(),
            data.category.clone().unwrap_or_default(),
            data.description.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
