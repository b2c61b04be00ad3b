//! Atbash / ROT13 tool.
//!
//! Both ciphers are their own inverse, so there is no mode switch: running
//! the tool twice on a file gives the file back.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use classic_ciphers::{Atbash, Rot13, TextCipher};
use message_store::{default_name, MessageKey, MessageStore, Method, NewMessage, STORE_ENV};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(about = "Apply the Atbash or ROT13 substitution to a text file")]
struct Cli {
    #[arg(short, long, value_enum, help = "Substitution to apply")]
    cipher: Substitution,

    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    #[arg(short, long, help = "Path to the output file (prints to stdout if omitted)")]
    output: Option<PathBuf>,

    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "", help = "Save the result to the message store")]
    save: Option<String>,

    #[arg(long, env = STORE_ENV, value_name = "FILE", help = "Path to the message store")]
    store: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Substitution {
    Atbash,
    Rot13,
}

impl Substitution {
    fn cipher(self) -> Box<dyn TextCipher> {
        match self {
            Substitution::Atbash => Box::new(Atbash),
            Substitution::Rot13 => Box::new(Rot13),
        }
    }

    /// Prefix for generated message names
    fn label(self) -> &'static str {
        match self {
            Substitution::Atbash => "Atbash",
            Substitution::Rot13 => "ROT13",
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let content: String = std::fs::read_to_string(&cli.file)?;
    let cipher = cli.cipher.cipher();
    info!(cipher = cipher.name(), file = %cli.file.display(), "applying substitution");

    let result: String = cipher.encrypt(&content);

    match &cli.output {
        Some(path) => std::fs::write(path, &result)?,
        None => println!("{}", result),
    }

    if let Some(name) = cli.save {
        if content.is_empty() || result.is_empty() {
            return Err("Cannot save: please enter text to encrypt first.".into());
        }

        let name: String = match name.trim() {
            "" => default_name(cli.cipher.label()),
            trimmed => trimmed.to_string(),
        };

        // Filed under the caesar method, with the cipher name as key
        let saved = MessageStore::locate(cli.store).save(NewMessage {
            name,
            original_text: content,
            encrypted_text: result,
            method: Method::Caesar,
            key: MessageKey::Keyword(cipher.name().to_string()),
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
    fn test_substitution_ciphers() {
        assert_eq!(Substitution::Atbash.cipher().encrypt("Hello"), "Svool");
        assert_eq!(Substitution::Rot13.cipher().encrypt("Hello, World!"), "Uryyb, Jbeyq!");
        assert_eq!(Substitution::Rot13.cipher().name(), "rot13");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["substitution", "-c", "rot13", "-f", "in.txt"]).unwrap();
        assert_eq!(cli.cipher, Substitution::Rot13);
        assert!(cli.output.is_none());
    }
}
