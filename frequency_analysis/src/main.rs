use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use classic_ciphers::{frequency_profile, LetterProfile};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Width of the bar for the most frequent letter
const BAR_WIDTH: f64 = 40.0;

/// Command-line arguments for the frequency analysis program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing the text to analyse
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Print the table as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let content: String = std::fs::read_to_string(&cli.file)?;
    let profile: Vec<LetterProfile> = frequency_profile(&content);
    debug!(letters = profile.iter().map(|row| row.count).sum::<usize>(), "counted letters");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", render_table(&profile));
    }

    Ok(())
}

/// Renders the profile as a table with a bar per letter.
///
/// In a Caesar ciphertext the bars keep the English shape, only shifted
/// along the alphabet.
fn render_table(profile: &[LetterProfile]) -> String {
    let total: usize = profile.iter().map(|row| row.count).sum();
    let peak: f64 = profile
        .iter()
        .map(|row| row.observed_percent.max(row.english_percent))
        .fold(0.0, f64::max);

    let mut table: String = format!("Total letters: {}\n", total);
    table.push_str("letter  count  observed  english\n");

    for row in profile {
        let bar_len: usize = if peak > 0.0 {
            (row.observed_percent / peak * BAR_WIDTH).round() as usize
        } else {
            0
        };
        table.push_str(&format!(
            "{:>6}  {:>5}  {:>7.2}%  {:>6.2}%  {}\n",
            row.letter,
            row.count,
            row.observed_percent,
            row.english_percent,
            "#".repeat(bar_len)
        ));
    }

    table
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
    fn test_table_has_all_letters() {
        let table = render_table(&frequency_profile("Hello"));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 26);
        assert_eq!(lines[0], "Total letters: 5");
        assert!(lines[2].trim_start().starts_with('a'));
        assert!(lines[27].trim_start().starts_with('z'));
    }

    #[test]
    fn test_table_without_letters() {
        let table = render_table(&frequency_profile("1234"));
        assert!(table.starts_with("Total letters: 0\n"));
        // reference column is still filled in
        assert!(table.contains("12.02%"));
    }
}
