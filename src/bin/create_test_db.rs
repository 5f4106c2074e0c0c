use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::macros::date;

use finance_tracker::{
    models::{Amount, NewCategory, TransactionRequest},
    stores::{CategoryStore, sqlite::create_app_state},
};

/// A utility for creating a test database for the REST API server of finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if let Err(message) = check_output_path(output_path) {
        eprintln!("{message}");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let state = create_app_state(Connection::open(output_path)?)?;

    println!("Creating test categories...");
    let salary = state.category_store.create(NewCategory {
        name: "Salary".to_owned(),
        kind: "income".to_owned(),
    })?;
    let groceries = state.category_store.create(NewCategory {
        name: "Groceries".to_owned(),
        kind: "expense".to_owned(),
    })?;

    println!("Creating test transactions...");
    let transactions = [
        ("Paycheck", 250_000, date!(2024 - 01 - 01), "income", salary.id),
        ("Supermarket", 8_765, date!(2024 - 01 - 03), "expense", groceries.id),
        ("Farmers market", 2_450, date!(2024 - 01 - 06), "expense", groceries.id),
    ];

    for (title, amount, date, kind, category_id) in transactions {
        state.transaction_service.create(TransactionRequest {
            title: title.to_owned(),
            amount: Amount::from_minor_units(amount),
            date,
            kind: kind.to_owned(),
            category_id,
        })?;
    }

    println!("Success!");

    Ok(())
}

/// Check that `output_path` has a file extension and does not point to an existing file.
fn check_output_path(output_path: &Path) -> Result<(), String> {
    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            return Err(
                "Output path must include a file extension (e.g., 'my_database.db').".to_owned(),
            );
        }
    }

    if output_path.is_file() {
        return Err(format!("File already exists at {output_path:#?}!"));
    }

    Ok(())
}
