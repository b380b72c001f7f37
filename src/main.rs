use clap::Parser;

use catat::cli::{self, Cli, Commands};

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Parse { text, date, json } => cli::parse::run(&text, date.as_deref(), json)?,
        Commands::Batch {
            file,
            csv,
            json,
            date,
        } => cli::batch::run(&file, csv.as_deref(), json, date.as_deref())?,
        Commands::Categories => cli::categories::run()?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
