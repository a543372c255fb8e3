//! CLI tool that builds the project presentation deck as a PPTX file.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::content::ecommerce_deck;
use deck_core::{DeckBuilder, DeckSpec, OutlineFormatter};
use deck_pptx::PptxWriter;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when no output path is given.
const DEFAULT_OUTPUT: &str = "presentation_ecommerce.pptx";

/// Build the e-commerce project presentation.
#[derive(Parser, Debug)]
#[command(name = "deck-build")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file (default: presentation_ecommerce.pptx next to the executable)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Build the deck described by this JSON file instead of the built-in one
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Print the built-in deck as JSON and exit
    #[arg(long)]
    dump_content: bool,

    /// Print a text outline of the deck instead of writing a file
    #[arg(short, long)]
    print: bool,

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

    if args.dump_content {
        println!("{}", ecommerce_deck().to_json()?);
        return Ok(());
    }

    let deck = load_deck(args.content.as_deref())?;
    log::debug!("Building {} slides", deck.slides.len());

    let canvas = DeckBuilder::new()
        .build(&deck)
        .context("Failed to build the deck")?;

    if args.print {
        print!("{}", OutlineFormatter::new().format_with_newline(&canvas));
        return Ok(());
    }

    let output_path = match args.output {
        Some(path) => path,
        None => default_output_path()?,
    };

    let mut writer = PptxWriter::new();
    if let Some(title) = &deck.title {
        writer = writer.with_title(title.as_str());
    }
    if let Some(language) = &deck.language {
        writer = writer.with_language(language.as_str());
    }
    writer
        .save(&canvas, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("✅ Presentation created: {}", output_path.display());
    Ok(())
}

/// Load the deck from a JSON file, or fall back to the built-in content.
fn load_deck(path: Option<&Path>) -> Result<DeckSpec> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            DeckSpec::from_json(&json)
                .with_context(|| format!("Failed to parse deck content in {}", path.display()))
        }
        None => Ok(ecommerce_deck()),
    }
}

/// `presentation_ecommerce.pptx` in the directory holding the executable.
fn default_output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the executable")?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join(DEFAULT_OUTPUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_no_flags() {
        let args = Args::parse_from(["deck-build"]);
        assert!(args.output.is_none());
        assert!(args.content.is_none());
        assert!(!args.print && !args.verbose && !args.dump_content);
    }

    #[test]
    fn test_args_output_and_print() {
        let args = Args::parse_from(["deck-build", "-o", "out.pptx", "--print"]);
        assert_eq!(args.output, Some(PathBuf::from("out.pptx")));
        assert!(args.print);
    }

    #[test]
    fn test_default_output_name() {
        let path = default_output_path().unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_OUTPUT);
    }

    #[test]
    fn test_load_builtin_deck() {
        let deck = load_deck(None).unwrap();
        assert_eq!(deck.slides.len(), 15);
    }

    #[test]
    fn test_load_deck_from_json_file() {
        let path = std::env::temp_dir().join(format!("deck-cli-{}.json", std::process::id()));
        fs::write(&path, r#"{"slides":[{"kind":"title","title":"Hi"},{"kind":"closing"}]}"#)
            .unwrap();
        let deck = load_deck(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(deck.slides.len(), 2);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_deck(Some(Path::new("/nonexistent/deck.json"))).is_err());
    }
}
