use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sc_app::{resolve_os_clipboard, OsPasteSource, ReadOsClipboardUseCase};
use sc_core::clipboard::OsClipboardContent;
use sc_core::settings::ClipboardSettings;
use sc_core::zone::{merge_overlapping_zones, split_zone_for_paste, Zone};
use sc_platform::{OsClipboardParser, PlatformClipboardReader};

#[derive(Parser)]
#[command(name = "sheetclip")]
#[command(about = "Spreadsheet clipboard diagnostics", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tiles a block of the given size fills a target with
    Tile {
        /// Target range in A1 notation
        #[arg(short, long)]
        target: Zone,
        /// Block width in columns
        #[arg(long)]
        width: u32,
        /// Block height in rows
        #[arg(long)]
        height: u32,
    },
    /// Merge touching ranges
    Merge {
        /// Ranges in A1 notation
        #[arg(required = true)]
        zones: Vec<Zone>,
    },
    /// Resolve clipboard parts saved to files
    Inspect {
        /// HTML part
        #[arg(long)]
        html: PathBuf,
        /// Plain text part
        #[arg(long)]
        text: Option<PathBuf>,
    },
    /// Resolve the current system clipboard
    Probe,
}

pub fn tile(target: &Zone, width: u32, height: u32) -> Vec<String> {
    split_zone_for_paste(target, width, height)
        .iter()
        .map(Zone::to_string)
        .collect()
}

pub fn merge(zones: &[Zone]) -> Vec<String> {
    merge_overlapping_zones(zones)
        .iter()
        .map(Zone::to_string)
        .collect()
}

pub fn inspect(parser: &OsClipboardParser, html: String, text: Option<String>) -> OsPasteSource {
    let mut content = OsClipboardContent::new().with_html(html);
    if let Some(text) = text {
        content = content.with_text(text);
    }
    resolve_os_clipboard(parser.parse(&content))
}

fn read_part(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json(source: &OsPasteSource) -> Result<()> {
    let json = serde_json::to_string_pretty(source).context("Failed to encode paste source")?;
    println!("{json}");
    Ok(())
}

pub async fn run(command: Commands, settings: ClipboardSettings) -> Result<()> {
    match command {
        Commands::Tile {
            target,
            width,
            height,
        } => {
            for tile in tile(&target, width, height) {
                println!("{tile}");
            }
        }
        Commands::Merge { zones } => {
            for zone in merge(&zones) {
                println!("{zone}");
            }
        }
        Commands::Inspect { html, text } => {
            let html = read_part(&html)?;
            let text = text.as_ref().map(read_part).transpose()?;
            let parser = OsClipboardParser::new(settings);
            print_json(&inspect(&parser, html, text))?;
        }
        Commands::Probe => {
            info!("Probing system clipboard");
            let use_case = ReadOsClipboardUseCase::new(
                Arc::new(PlatformClipboardReader::new(&settings)),
                Arc::new(OsClipboardParser::new(settings)),
            );
            print_json(&use_case.execute().await?)?;
        }
    }
    Ok(())
}
