use clap::Parser;
use diarist::application::{ConfigService, RequestHandler};
use diarist::cli::input::{confirm, read_content};
use diarist::cli::{format_entry, format_entry_list, format_search_results, Cli, Commands};
use diarist::error::{DiaristError, Result};
use diarist::infrastructure::{Config, JsonFileStorage};
use diarist::logging;
use std::io;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let config_path = Config::default_path();
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            logging::init("warn");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    };
    logging::init(config.log_level());

    match run(cli, &config, &config_path) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, config: &Config, config_path: &Path) -> Result<()> {
    let entries_path = config.entries_path(cli.file.as_deref());

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            stdin,
        }) => with_handler(&entries_path, |handler| {
            let content = read_content(content, stdin, "")?;
            let entry = handler.submit_new(&title, &content)?;
            println!("Added entry {}: {}", entry.entry_number, entry.title);
            Ok(())
        }),
        Some(Commands::List) => with_handler(&entries_path, |handler| {
            print!("{}", with_newline(format_entry_list(handler.list_all())));
            Ok(())
        }),
        Some(Commands::Show { number }) => with_handler(&entries_path, |handler| {
            let entry = handler.view(number - 1)?;
            print!("{}", format_entry(entry));
            Ok(())
        }),
        Some(Commands::Edit {
            number,
            title,
            content,
            stdin,
        }) => with_handler(&entries_path, |handler| {
            let position = number - 1;
            let current = handler.view(position)?;
            let title = title.unwrap_or_else(|| current.title.clone());
            let content = read_content(content, stdin, &current.content)?;

            handler.submit_edit(position, &title, &content)?;
            println!("Updated entry {}", number);
            Ok(())
        }),
        Some(Commands::Delete { number, yes }) => with_handler(&entries_path, |handler| {
            let position = number - 1;
            let title = handler.view(position)?.title.clone();

            if !yes {
                let prompt = format!("Delete entry {} ({})?", number, title);
                if !confirm(&prompt, &mut io::stdin().lock(), &mut io::stdout())? {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            handler.submit_delete(position)?;
            println!("Deleted entry {}", number);
            Ok(())
        }),
        Some(Commands::Search { keyword }) => {
            // Rejected before the journal is opened.
            if keyword.trim().is_empty() {
                return Err(DiaristError::Usage(
                    "Please enter a keyword to search".to_string(),
                ));
            }
            with_handler(&entries_path, |handler| {
                let results = handler.find(&keyword);
                print!("{}", with_newline(format_search_results(&results)));
                Ok(())
            })
        }
        Some(Commands::Config { key, value, list }) => {
            run_config(ConfigService::new(config_path.to_path_buf()), key, value, list)
        }
        None => {
            println!("diarist - Personal journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Open the journal, run `action`, then report any storage warnings
fn with_handler<F>(entries_path: &Path, action: F) -> Result<()>
where
    F: FnOnce(&mut RequestHandler<JsonFileStorage>) -> Result<()>,
{
    let mut handler = RequestHandler::open(JsonFileStorage::new(entries_path));
    let result = action(&mut handler);

    for warning in handler.take_warnings() {
        eprintln!("Warning: {}", warning.display_with_suggestions());
    }

    result
}

fn run_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        let config = service.list()?;
        println!("entries_file = {}", config.entries_path(None).display());
        println!("log_level = {}", config.log_level());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
        Ok(())
    } else {
        println!("Usage: diarist config [--list | <key> [<value>]]");
        println!("Valid keys: entries_file, log_level");
        Ok(())
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
