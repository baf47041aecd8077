//! celldb shell - a line-oriented front end for the query core.

use anyhow::{Context, Result};
use celldb::access::{Cell, CellType, ColumnDescriptor};
use celldb::database::Database;
use celldb::executor::select;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// celldb shell - query an embedded in-memory tabular store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Saved database file to open instead of the demo fixture
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut database = match &args.database {
        Some(path) => Database::load(path)
            .with_context(|| format!("failed to open database {}", path.display()))?,
        None => demo_database()?,
    };

    println!(
        "celldb shell - database '{}'. Type select statements below, or 'quit' to exit.",
        database.name()
    );

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let command = line.trim().to_lowercase();
                if command.is_empty() {
                    continue;
                }
                editor.add_history_entry(&command)?;

                if command == "quit" {
                    break;
                }

                if let Some(path) = command.strip_prefix("save ") {
                    match database.save(path.trim()) {
                        Ok(()) => println!("> Saved."),
                        Err(err) => println!("> {}", err),
                    }
                    continue;
                }

                if let Some(path) = command.strip_prefix("open ") {
                    match Database::load(path.trim()) {
                        Ok(loaded) => {
                            println!("> Opened database '{}'.", loaded.name());
                            database = loaded;
                        }
                        Err(err) => println!("> {}", err),
                    }
                    continue;
                }

                if command.starts_with("select") {
                    match select(&database, &command) {
                        Ok(view) => println!("{}", view),
                        Err(err) => println!("> {}", err),
                    }
                } else {
                    println!("> Unknown command.");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                log::error!("readline error: {}", err);
                break;
            }
        }
    }

    println!("> Bye!");
    Ok(())
}

/// The demonstration fixture used for interactive testing: two small tables
/// pre-populated with two rows each.
fn demo_database() -> Result<Database> {
    let mut db = Database::new("demo_db");

    let person = db.create_table(
        "person",
        vec![
            ColumnDescriptor::new("id", CellType::Int32),
            ColumnDescriptor::new("first_name", CellType::Utf8String),
            ColumnDescriptor::new("last_name", CellType::Utf8String),
        ],
    )?;
    person.append_row(vec![
        Cell::Int32(1),
        Cell::Utf8String("Rodion".to_string()),
        Cell::Utf8String("Efremov".to_string()),
    ])?;
    person.append_row(vec![
        Cell::Int32(2),
        Cell::Utf8String("Violetta".to_string()),
        Cell::Utf8String("Ervasti".to_string()),
    ])?;

    let msg = db.create_table(
        "msg",
        vec![
            ColumnDescriptor::new("id", CellType::Int32),
            ColumnDescriptor::new("person_id", CellType::Int64),
            ColumnDescriptor::new("msg", CellType::Utf8String),
        ],
    )?;
    msg.append_row(vec![
        Cell::Int32(10),
        Cell::Int64(1),
        Cell::Utf8String("Hello!".to_string()),
    ])?;
    msg.append_row(vec![
        Cell::Int32(11),
        Cell::Int64(2),
        Cell::Utf8String("Bye!".to_string()),
    ])?;

    Ok(db)
}
