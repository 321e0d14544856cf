use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use hintpatch::HintTable;
use hintpatch::cli::{Cli, Command};
use hintpatch::config::Config;
use hintpatch::{dataset, patcher};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("hintpatch starting");

    match cli.command {
        Command::Patch { dataset: path } => {
            let path = path.unwrap_or(config.dataset_path);
            let table = HintTable::builtin();
            let mut questions = dataset::load(&path)?;
            let outcome = patcher::patch_all(&mut questions, &table);
            dataset::save(&path, &questions)?;

            for answer in &outcome.replaced {
                println!("{} Replaced hints for: {}", "✓".green(), answer.cyan());
            }
            println!("\nReplaced generic hints for {} questions.", outcome.count());
        }
        Command::Check { dataset: path } => {
            let path = path.unwrap_or(config.dataset_path);
            let table = HintTable::builtin();
            let questions = dataset::load(&path)?;
            let report = patcher::scan(&questions, &table);

            for answer in &report.covered {
                println!("{} Would replace: {}", "→".yellow(), answer.cyan());
            }
            for answer in &report.uncovered {
                println!("{} No builtin hints for: {}", "!".red(), answer);
            }
            println!(
                "\n{} of {} pending records covered by the builtin table.",
                report.covered.len(),
                report.pending
            );
        }
        Command::Stats { dataset: path } => {
            let path = path.unwrap_or(config.dataset_path);
            let table = HintTable::builtin();
            let questions = dataset::load(&path)?;
            let report = patcher::scan(&questions, &table);

            println!("Dataset: {}", path.display().to_string().cyan());
            println!("  Questions: {}", report.total);
            println!("  Pending (generic lead hint): {}", report.pending);
            println!("  Covered by builtin table: {}", report.covered.len());
            println!("  Uncovered: {}", report.uncovered.len());
            println!("  Builtin table rows: {}", table.len());
        }
    }

    Ok(())
}
