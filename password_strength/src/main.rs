use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use classic_ciphers::{estimate_strength, StrengthAssessment};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Estimates how hard a keyword or password is to brute-force.
///
/// This is a rough heuristic based on length and character classes only.
#[derive(Parser, Debug)]
#[command(about)]
struct Cli {
    /// Password to assess
    #[arg(conflicts_with = "file", required_unless_present = "file")]
    password: Option<String>,

    /// Read the password from a file instead (trailing newline removed)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let password: String = match (cli.password, &cli.file) {
        (Some(password), _) => password,
        (None, Some(path)) => read_password(path)?,
        (None, None) => return Err("No password given".into()),
    };

    let assessment: StrengthAssessment = estimate_strength(&password);
    debug!(score = assessment.score, "assessed password");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render(&assessment));
    }

    Ok(())
}

fn read_password(path: &Path) -> Result<String, Box<dyn Error>> {
    let content: String = std::fs::read_to_string(path)?;
    Ok(content.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn render(assessment: &StrengthAssessment) -> String {
    let mut out: String = format!(
        "Score: {}/100 ({})\nEstimated time to crack: {}\n",
        assessment.score,
        assessment.tier(),
        assessment.estimated_crack_time
    );

    if !assessment.suggestions.is_empty() {
        out.push_str("Suggestions:\n");
        for suggestion in &assessment.suggestions {
            out.push_str(&format!("  - {}\n", suggestion));
        }
    }

    out
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
    fn test_render_strong_password() {
        let text = render(&estimate_strength("Tr0ub4dor&3"));
        assert_eq!(text, "Score: 100/100 (Strong)\nEstimated time to crack: centuries\n");
    }

    #[test]
    fn test_render_lists_suggestions() {
        let text = render(&estimate_strength("abc"));
        assert!(text.starts_with("Score: 27/100 (Weak)\n"));
        assert!(text.contains("  - Make your password longer (at least 8 characters).\n"));
        assert!(text.contains("  - Add special characters.\n"));
    }

    #[test]
    fn test_password_or_file_required() {
        assert!(Cli::try_parse_from(["password_strength"]).is_err());
        assert!(Cli::try_parse_from(["password_strength", "secret", "-f", "pw.txt"]).is_err());
        assert!(Cli::try_parse_from(["password_strength", "secret"]).is_ok());
    }
}
