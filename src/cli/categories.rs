use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let lexicon = Lexicon::from_settings(&load_settings());

    let mut table = Table::new();
    table.set_header(vec!["Type", "Category", "Keywords"]);
    for (name, keywords) in &lexicon.income_categories {
        table.add_row(vec![
            Cell::new("income"),
            Cell::new(name),
            Cell::new(keywords.join(", ")),
        ]);
    }
    for (name, keywords) in &lexicon.expense_categories {
        table.add_row(vec![
            Cell::new("expense"),
            Cell::new(name),
            Cell::new(keywords.join(", ")),
        ]);
    }
    println!("{table}");
    println!(
        "Defaults: income {}, expense {}",
        lexicon.default_income_category, lexicon.default_expense_category
    );
    Ok(())
}
