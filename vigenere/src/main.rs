use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use classic_ciphers::{estimate_strength, vigenere_with, Direction, KeyAdvance, StrengthAssessment};
use message_store::{default_name, MessageKey, MessageStore, Method, NewMessage, STORE_ENV};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: PathBuf,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Which characters move the key forward
    #[arg(long, value_enum, default_value_t = KeyAdvanceArg::Letters, help = "Key advancement (letters/every-char)")]
    key_advance: KeyAdvanceArg,

    /// Save input and result under this name (a default name if empty)
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    save: Option<String>,

    /// Path to the message store
    #[arg(long, env = STORE_ENV, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Key advancement policy as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyAdvanceArg {
    /// Only letters consume a key position
    Letters,
    /// Every character consumes a key position
    EveryChar,
}

impl From<KeyAdvanceArg> for KeyAdvance {
    fn from(arg: KeyAdvanceArg) -> Self {
        match arg {
            KeyAdvanceArg::Letters => KeyAdvance::Letters,
            KeyAdvanceArg::EveryChar => KeyAdvance::EveryChar,
        }
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.key.chars().all(|c| !c.is_ascii_alphabetic()) {
        return Err("Please enter a keyword containing at least one letter.".into());
    }

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)?;

    // Show how guessable the keyword is
    let strength: StrengthAssessment = estimate_strength(&cli.key);
    println!(
        "Keyword strength: {}/100 ({}), estimated crack time: {}",
        strength.score,
        strength.tier(),
        strength.estimated_crack_time
    );
    for suggestion in &strength.suggestions {
        println!("  - {}", suggestion);
    }

    // Process based on selected mode
    let advance: KeyAdvance = cli.key_advance.into();
    debug!(?advance, "key advancement policy");
    let result: String = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cli.key);
            vigenere_with(&content, &cli.key, Direction::Encrypt, advance)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cli.key);
            vigenere_with(&content, &cli.key, Direction::Decrypt, advance)
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, &result)?;

    println!("Operation completed successfully! Output saved to: {}", cli.output.display());

    if let Some(name) = cli.save {
        if content.is_empty() || result.is_empty() {
            warn!("refusing to save an empty message");
            return Err("Cannot save: please enter text and a keyword first.".into());
        }

        let name: String = match name.trim() {
            "" => default_name("Vigenere"),
            trimmed => trimmed.to_string(),
        };

        let saved = MessageStore::locate(cli.store).save(NewMessage {
            name,
            original_text: content,
            encrypted_text: result,
            method: Method::Vigenere,
            key: MessageKey::Keyword(cli.key),
        })?;
        println!("Your message \"{}\" has been saved (id {}).", saved.name, saved.id);
    }

    Ok(())
}

/// Installs a stderr logger; `--verbose` forces debug, otherwise `RUST_LOG` or warn.
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
