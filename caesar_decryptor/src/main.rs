use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use classic_ciphers::{auto_decrypt_caesar, brute_force, AutoDecryption, Candidate};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Below this many letters frequency matching is unreliable
const MIN_RELIABLE_LETTERS: usize = 50;

/// Command-line arguments for the Caesar frequency decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: PathBuf,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<PathBuf>,

    /// List the decryption under every shift instead of picking one
    #[arg(short, long)]
    brute_force: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (prints every candidate's score)
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the Caesar frequency decryptor.
fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)?;

    let letters: usize = content.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if letters < MIN_RELIABLE_LETTERS {
        warn!(letters, "text may be too short for reliable analysis");
    }

    let output: String = if cli.brute_force {
        let candidates: Vec<Candidate> = brute_force(&content);
        if cli.json {
            serde_json::to_string_pretty(&candidates)?
        } else {
            render_candidates(&candidates)
        }
    } else {
        // Determine the most likely shift based on frequency analysis
        let result: AutoDecryption = auto_decrypt_caesar(&content);
        if cli.json {
            serde_json::to_string_pretty(&result)?
        } else {
            println!("Detected cipher key: {}", result.shift);
            result.plain_text
        }
    };

    // Write the result to the output file, or the terminal
    match &cli.output {
        Some(path) => std::fs::write(path, output)?,
        None => println!("{}", output),
    }

    Ok(())
}

/// One `Shift N: preview` entry per shift, separated by blank lines.
fn render_candidates(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|candidate| candidate.to_string())
        .collect::<Vec<String>>()
        .join("\n\n")
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
    fn test_render_candidates() {
        let rendered = render_candidates(&brute_force("Khoor"));
        let entries: Vec<&str> = rendered.split("\n\n").collect();
        assert_eq!(entries.len(), 26);
        assert_eq!(entries[0], "Shift 0: Khoor");
        assert_eq!(entries[3], "Shift 3: Hello");
    }

    #[test]
    fn test_json_result_shape() {
        let result = auto_decrypt_caesar("");
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
        assert_eq!(json["shift"], 0);
        assert_eq!(json["plain_text"], "");
    }
}
