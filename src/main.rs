use clap::Parser;
use colored::*;
use rekord::api::{CmdMessage, MessageLevel, RekordApi};
use rekord::config::RekordConfig;
use rekord::error::{RekordError, Result};
use rekord::forward::SpoolForwarder;
use rekord::model::{FieldMap, Record};
use rekord::store::fs::FsBackend;
use rekord::store::RecordStore;
use rekord::vault::FileVault;
use serde_json::Value;
use std::io::{self, Write};

mod args;
use args::{Cli, Commands, FileCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = init_api()?;

    match cli.command {
        Some(Commands::Create { fields }) => handle_create(&api, &fields),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Get { key }) => handle_get(&api, &key),
        Some(Commands::Update { key, fields }) => handle_update(&api, &key, &fields),
        Some(Commands::Delete { key }) => handle_delete(&api, &key),
        Some(Commands::Purge { yes }) => handle_purge(&api, yes),
        Some(Commands::Count) => handle_count(&api),
        Some(Commands::File(file_cmd)) => handle_file(&api, file_cmd),
        Some(Commands::Menu) => run_menu(&api),
    }
}

fn init_api() -> Result<RekordApi<FsBackend>> {
    let config = RekordConfig::from_env();
    let store_dir = config.store_dir();

    let record_backend = FsBackend::open(&store_dir)?.with_store_file("records.json");
    let file_backend = FsBackend::open(&store_dir)?.with_store_file("files.json");

    let store = RecordStore::with_backend(record_backend).with_key_field(&config.key_field);
    let vault = FileVault::open(file_backend, config.vault_dir())?;

    let mut api = RekordApi::new(store, vault);
    if let Some(spool) = config.spool {
        api = api.with_forwarder(Box::new(SpoolForwarder::new(spool)));
    }
    Ok(api)
}

// --- Record handlers ---

fn handle_create(api: &RekordApi<FsBackend>, fields: &[String]) -> Result<()> {
    let fields = parse_fields(fields)?;
    let result = api.create_record(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &RekordApi<FsBackend>) -> Result<()> {
    let result = api.list_records()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(api: &RekordApi<FsBackend>, key: &str) -> Result<()> {
    let result = api.get_record(key)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(api: &RekordApi<FsBackend>, key: &str, fields: &[String]) -> Result<()> {
    let fields = parse_fields(fields)?;
    let result = api.update_record(key, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &RekordApi<FsBackend>, key: &str) -> Result<()> {
    let result = api.delete_record(key)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_purge(api: &RekordApi<FsBackend>, skip_confirm: bool) -> Result<()> {
    if !skip_confirm && !confirm("This permanently removes ALL records.")? {
        println!("Operation cancelled.");
        return Ok(());
    }
    let result = api.purge_records()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_count(api: &RekordApi<FsBackend>) -> Result<()> {
    let result = api.record_stats()?;
    print_messages(&result.messages);
    Ok(())
}

// --- File handlers ---

fn handle_file(api: &RekordApi<FsBackend>, cmd: FileCommands) -> Result<()> {
    let result = match cmd {
        FileCommands::Add {
            path,
            name,
            description,
        } => api.add_file(&path, name.as_deref(), description.as_deref())?,
        FileCommands::List => {
            let result = api.list_files()?;
            print_records(&result.listed_records);
            result
        }
        FileCommands::Get { id } => {
            let result = api.get_file(&id)?;
            print_records(&result.listed_records);
            result
        }
        FileCommands::Download { id, dest } => api.download_file(&id, dest)?,
        FileCommands::Update { id, fields } => {
            let fields = parse_fields(&fields)?;
            api.update_file(&id, fields)?
        }
        FileCommands::Delete { id } => api.remove_file(&id)?,
        FileCommands::Purge { yes } => {
            if !yes && !confirm("This permanently removes ALL stored files.")? {
                println!("Operation cancelled.");
                return Ok(());
            }
            api.purge_files()?
        }
        FileCommands::Count => api.file_stats()?,
    };
    print_messages(&result.messages);
    Ok(())
}

// --- Interactive menu ---

fn run_menu(api: &RekordApi<FsBackend>) -> Result<()> {
    println!("\n=== rekord ===");
    loop {
        println!("\n----- MENU -----");
        println!("1.  Create a new record");
        println!("2.  Show all records");
        println!("3.  Find record by key");
        println!("4.  Update record");
        println!("5.  Delete record by key");
        println!("6.  Delete ALL records (irreversible)");
        println!("7.  Show record count");
        println!("0.  Exit");
        println!("----------------");

        let choice = prompt("-> Enter your choice: ")?;
        let outcome = match choice.as_str() {
            "1" => {
                let line = prompt("Enter fields (field=value, space separated): ")?;
                let pairs: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                handle_create(api, &pairs)
            }
            "2" => handle_list(api),
            "3" => {
                let key = prompt("Enter key to search: ")?;
                handle_get(api, &key)
            }
            "4" => {
                let key = prompt("Enter key of record to update: ")?;
                let line = prompt("Enter fields to change (field=value): ")?;
                let pairs: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                handle_update(api, &key, &pairs)
            }
            "5" => {
                let key = prompt("Enter key to delete: ")?;
                handle_delete(api, &key)
            }
            "6" => handle_purge(api, false),
            "7" => handle_count(api),
            "0" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                println!("{}", "Invalid choice. Try again.".red());
                Ok(())
            }
        };

        // Per-operation failures are reported and the menu continues.
        if let Err(e) = outcome {
            println!("{}", format!("Error: {}", e).red());
        }
    }
}

// --- Input helpers ---

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush().map_err(RekordError::Io)?;
    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(RekordError::Io)?;
    Ok(input.trim().to_string())
}

fn confirm(warning: &str) -> Result<bool> {
    let answer = prompt(&format!("{} Type 'yes' to continue: ", warning))?;
    Ok(answer.eq_ignore_ascii_case("yes"))
}

/// Parse `field=value` pairs. Values that read as integers, floats, or
/// booleans become typed JSON scalars; everything else stays a string.
fn parse_fields(pairs: &[String]) -> Result<FieldMap> {
    let mut fields = FieldMap::new();
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| RekordError::Api(format!("Invalid field {:?}, expected field=value", pair)))?;
        if name.is_empty() {
            return Err(RekordError::Api(format!(
                "Invalid field {:?}, empty field name",
                pair
            )));
        }
        fields.insert(name.to_string(), parse_scalar(raw));
    }
    Ok(fields)
}

fn parse_scalar(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::from(f);
    }
    match raw {
        "true" => Value::from(true),
        "false" => Value::from(false),
        _ => Value::from(raw),
    }
}

// --- Output ---

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        let fields = record
            .fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, render_value(value)))
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "{}  {}  {}",
            record.id.yellow(),
            fields,
            format!(
                "(created {}, updated {})",
                record.created_at.format("%Y-%m-%d %H:%M:%S"),
                record.updated_at.format("%Y-%m-%d %H:%M:%S")
            )
            .dimmed()
        );
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
