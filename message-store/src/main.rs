use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use message_store::{MessageStore, SavedMessage, STORE_ENV};

/// Browse and delete messages saved by the cipher tools.
#[derive(Parser, Debug)]
#[command(name = "saved_messages", version, about)]
struct Cli {
    /// Path to the store file (defaults to the user data directory)
    #[arg(long, global = true, env = STORE_ENV, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List saved messages, newest first
    List,
    /// Show one message in full and check it against its key
    Show { id: String },
    /// Delete a message
    Delete { id: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let store = MessageStore::locate(cli.store);

    match cli.command {
        Command::List => {
            let messages: Vec<SavedMessage> = store.list_newest_first()?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            } else if messages.is_empty() {
                println!("No saved messages yet. Encrypt or decrypt a message with --save to see it here.");
            } else {
                for message in &messages {
                    println!(
                        "{}  {:<30}  {:<8}  {}",
                        message.id,
                        message.name,
                        message.method,
                        format_time(message)
                    );
                }
            }
        }
        Command::Show { id } => {
            let message: SavedMessage = store.get(&id)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&message)?);
            } else {
                println!("Name:      {}", message.name);
                println!("Saved:     {}", format_time(&message));
                println!("Method:    {}", message.method);
                println!("Key:       {}", message.key);
                match message.verify() {
                    Ok(true) => println!("Verified:  yes"),
                    Ok(false) => println!("Verified:  no (texts do not match the key)"),
                    Err(e) => println!("Verified:  unknown ({})", e),
                }
                println!("\nOriginal text:\n{}", message.original_text);
                println!("\nEncrypted text:\n{}", message.encrypted_text);
            }
        }
        Command::Delete { id } => {
            if store.delete(&id)? {
                println!("The saved message has been removed.");
            } else {
                eprintln!("No saved message with id {}", id);
            }
        }
    }

    Ok(())
}

fn format_time(message: &SavedMessage) -> String {
    message
        .saved_at()
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| message.timestamp.to_string())
}

/// Logs go to stderr; `RUST_LOG` picks the level, `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let level: Level = if verbose {
        Level::DEBUG
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::WARN)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", e);
    }
}
