//! Decksmith CLI
//!
//! Usage:
//!   decksmith [OPTIONS] [FILE]
//!
//! Reads a JSON presentation request from FILE (or standard input), writes
//! the rendered deck to the request's `outputPath`, and prints
//! `OK:<outputPath>` on success. Any failure prints `Error: <message>` to
//! stderr and exits with code 1.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use decksmith::deck::DrawPrimitive;
use decksmith::{DeckError, DeckOptions, DeckRequest, ThemeFile};

#[derive(Parser)]
#[command(name = "decksmith")]
#[command(about = "Render a proposal deck from a JSON slide description")]
struct Cli {
    /// Request file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Palette file overriding default colors (TOML, `[colors]` table)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Debug mode: dump a per-slide primitive summary to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(path) => {
            println!("OK:{path}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, DeckError> {
    let source = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.display().to_string(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| DeckError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            buffer
        }
    };

    let request = DeckRequest::from_json(&source)?;

    let theme_file = match &cli.theme {
        Some(path) => ThemeFile::from_file(path)?,
        None => ThemeFile::default(),
    };

    let options = DeckOptions::new()
        .with_date_label(Local::now().format("%B %Y").to_string())
        .with_theme_file(theme_file);

    if cli.debug {
        dump_deck(&request, &options);
    }

    decksmith::run(&request, &options)
}

/// Per-slide primitive summary for `--debug`
fn dump_deck(request: &DeckRequest, options: &DeckOptions) {
    let deck = decksmith::build_deck(request, options);
    eprintln!("=== Deck Debug ===");
    for (i, (spec, slide)) in request.slides.iter().zip(&deck.slides).enumerate() {
        let mut rects = 0;
        let mut ovals = 0;
        let mut lines = 0;
        let mut texts = 0;
        let mut images = 0;
        for p in &slide.primitives {
            match p {
                DrawPrimitive::Rect { .. } => rects += 1,
                DrawPrimitive::Oval { .. } => ovals += 1,
                DrawPrimitive::Line { .. } => lines += 1,
                DrawPrimitive::Text { .. } => texts += 1,
                DrawPrimitive::Image { .. } => images += 1,
            }
        }
        eprintln!(
            "[{:>2}] {:<13} bg={} rect={} oval={} line={} text={} image={}",
            i + 1,
            spec.tag(),
            slide.background,
            rects,
            ovals,
            lines,
            texts,
            images
        );
    }
    eprintln!("==================");
}
