use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use classic_ciphers::{caesar, Direction};
use message_store::{default_name, MessageKey, MessageStore, Method, NewMessage, STORE_ENV};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    #[arg(short, long, allow_negative_numbers = true, help = "Shift for the cipher (any integer, taken modulo 26)")]
    key: i64,

    #[arg(short, long, help = "Path to the output file (prints to stdout if omitted)")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "", help = "Save the result to the message store")]
    save: Option<String>,

    #[arg(long, env = STORE_ENV, value_name = "FILE", help = "Path to the message store")]
    store: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let content: String = std::fs::read_to_string(&cli.file)?;
    info!(file = %cli.file.display(), shift = cli.key, mode = ?cli.mode, "running caesar cipher");

    let result: String = caesar(&content, cli.key, cli.mode.clone().into());

    match &cli.output {
        Some(path) => std::fs::write(path, &result)?,
        None => println!("{}", result),
    }

    if let Some(name) = cli.save {
        if content.is_empty() || result.is_empty() {
            return Err("Cannot save: the input file is empty".into());
        }

        let name: String = if name.trim().is_empty() {
            default_name("Caesar")
        } else {
            name.trim().to_string()
        };

        let store = MessageStore::locate(cli.store);
        let saved = store.save(NewMessage {
            name,
            original_text: content,
            encrypted_text: result,
            method: Method::Caesar,
            key: MessageKey::Shift(cli.key),
        })?;
        eprintln!("Your message \"{}\" has been saved (id {}).", saved.name, saved.id);
    }

    Ok(())
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_shift() {
        let cli = Cli::try_parse_from(["caesar", "-f", "in.txt", "-k", "-3", "-m", "decrypt"]).unwrap();
        assert_eq!(cli.key, -3);
        assert!(matches!(cli.mode, OperationMode::Decrypt));
        assert!(cli.save.is_none());
    }

    #[test]
    fn test_save_without_name() {
        let cli = Cli::try_parse_from(["caesar", "-f", "in.txt", "-k", "3", "--save"]).unwrap();
        assert_eq!(cli.save.as_deref(), Some(""));
    }

    #[test]
    fn test_mode_maps_to_direction() {
        assert_eq!(Direction::from(OperationMode::Encrypt), Direction::Encrypt);
        assert_eq!(Direction::from(OperationMode::Decrypt), Direction::Decrypt);
    }
}
