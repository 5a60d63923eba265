//! CLI tool that generates the MyWelly presentation deck.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_pptx::PptxReader;
use deck_slides::{DeckBuilder, OUTPUT_PATH};
use std::path::Path;

/// Generate the MyWelly slide deck in the current directory.
#[derive(Parser, Debug)]
#[command(name = "build-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    println!("Creating MyWelly PowerPoint Presentation...");

    let builder = DeckBuilder::new();
    let deck = builder.build();

    let output_path = Path::new(OUTPUT_PATH);
    deck.presentation
        .save(output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let written = verify_output(output_path, builder.slide_count())?;

    for line in summary_lines(output_path, written, deck.issues.len()) {
        println!("{}", line);
    }

    Ok(())
}

/// Console report printed after a successful run.
fn summary_lines(path: &Path, slides: usize, issues: usize) -> Vec<String> {
    let mut lines = vec![
        "✓ Presentation created successfully!".to_string(),
        format!("✓ Location: {}", path.display()),
        format!("✓ Total slides: {}", slides),
    ];
    if issues > 0 {
        lines.push(format!(
            "! {} content line(s) kept at top level despite leading spaces (see warnings above)",
            issues
        ));
    }
    lines.push("\nThe presentation includes:".to_string());
    lines.push("  • Green color theme (#2d6a4f)".to_string());
    lines.push(format!("  • {} comprehensive slides", slides));
    lines.push("  • Real Java code snippets from your project".to_string());
    lines.push("  • Complete SDLC coverage".to_string());
    lines.push("  • Professional design".to_string());
    lines
}

/// Read the written deck back and check its slide count.
fn verify_output(path: &Path, expected: usize) -> Result<usize> {
    let outline = PptxReader::new()
        .open(path)
        .with_context(|| format!("Failed to read back {}", path.display()))?;

    log::debug!("Read back {} slides from {}", outline.len(), path.display());
    if outline.len() != expected {
        bail!(
            "{} holds {} slides, expected {}",
            path.display(),
            outline.len(),
            expected
        );
    }
    Ok(outline.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_builtin_deck(dir: &Path) -> std::path::PathBuf {
        let path = dir.join(OUTPUT_PATH);
        DeckBuilder::new().build().presentation.save(&path).unwrap();
        path
    }

    #[test]
    fn test_verify_output_accepts_expected_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_builtin_deck(dir.path());
        assert_eq!(verify_output(&path, 41).unwrap(), 41);
    }

    #[test]
    fn test_verify_output_rejects_wrong_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_builtin_deck(dir.path());
        let err = verify_output(&path, 40).unwrap_err();
        assert!(err.to_string().contains("holds 41 slides, expected 40"));
    }

    #[test]
    fn test_verify_output_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = verify_output(&dir.path().join("absent.pptx"), 41).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read back"));
    }

    #[test]
    fn test_summary_reports_slide_count() {
        let lines = summary_lines(Path::new(OUTPUT_PATH), 41, 0);
        assert!(lines.contains(&"✓ Total slides: 41".to_string()));
        assert!(lines.contains(&"✓ Location: MyWelly_Presentation.pptx".to_string()));
        assert!(lines.contains(&"  • 41 comprehensive slides".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with('!')));
    }

    #[test]
    fn test_summary_mentions_flagged_lines() {
        let lines = summary_lines(Path::new(OUTPUT_PATH), 41, 19);
        assert!(lines
            .iter()
            .any(|l| l.starts_with("! 19 content line(s) kept at top level")));
    }
}
