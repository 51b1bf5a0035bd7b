use astgen::debug::enable_debug;
use astgen::error::ErrorFormatter;
use astgen::{CodeGenerator, NodeTable, OutputLayout};
use colored::*;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut table_path = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--no-color" => colored::control::set_override(false),
            "--debug" => enable_debug(),
            other if table_path.is_none() && !other.starts_with("--") => table_path = Some(other),
            _ => {
                eprintln!("Usage: {} [--debug] [--no-color] [table.json]", args[0]);
                process::exit(1);
            }
        }
    }

    let table = match table_path {
        Some(path) => NodeTable::from_path(Path::new(path)),
        None => NodeTable::builtin(),
    };
    let table = match table {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(&err).format());
            process::exit(1);
        }
    };

    let layout = match OutputLayout::from_config(&table.config) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(&err).format());
            process::exit(1);
        }
    };

    let mut generator = CodeGenerator::with_config(table.config.clone());
    let report = generator.generate_all(&table.categories, &layout);

    for path in &report.written {
        println!("{} {}", "Generated".green().bold(), path.display());
    }

    if report.is_success() {
        return;
    }

    for err in report.errors.errors() {
        eprintln!("{}", ErrorFormatter::new(err).format());
    }
    if report.errors.errors().iter().any(|e| e.is_validation_error()) {
        eprintln!(
            "{} rejected categories were not written; previous files are unchanged",
            "note:".cyan().bold()
        );
    }
    eprintln!(
        "{} {} of {} categories failed",
        "error:".red().bold(),
        report.errors.error_count(),
        table.categories.len()
    );
    process::exit(1);
}
